//! Wire types for the OAuth2 token endpoint and the Sheets values API

use serde::{Deserialize, Serialize};

/// Body of a `values:append` request
#[derive(Debug, Clone, Serialize)]
pub struct ValueRange<'a> {
    pub values: &'a [Vec<String>],
}

/// Response of a `values:append` request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    #[serde(default)]
    pub table_range: Option<String>,
    #[serde(default)]
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: Option<u64>,
    #[serde(default)]
    pub updated_cells: Option<u64>,
}

/// Outcome of one append, as reported back to the importer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendSummary {
    pub range: String,
    pub updated_range: Option<String>,
    pub updated_rows: u64,
}

impl AppendSummary {
    /// Build a summary from the API response, falling back to the batch size
    pub fn from_response(range: &str, sent_rows: usize, response: AppendValuesResponse) -> Self {
        let updates = response.updates.unwrap_or_default();
        Self {
            range: range.to_string(),
            updated_range: updates.updated_range,
            updated_rows: updates.updated_rows.unwrap_or(sent_rows as u64),
        }
    }
}

/// Google JSON error envelope: `{"error": {"code": .., "message": .., "status": ..}}`
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorEnvelope {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Claims of the signed service account assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Successful token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
}

fn default_expires_in() -> i64 {
    3600
}

/// OAuth2 error response (`invalid_grant` and friends)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_response_parsing() {
        let json = r#"{
            "spreadsheetId": "abc",
            "tableRange": "Students!A1:M10",
            "updates": {
                "spreadsheetId": "abc",
                "updatedRange": "Students!A11:M12",
                "updatedRows": 2,
                "updatedColumns": 13,
                "updatedCells": 26
            }
        }"#;

        let response: AppendValuesResponse = serde_json::from_str(json).unwrap();
        let summary = AppendSummary::from_response("Students!A2", 2, response);

        assert_eq!(summary.updated_rows, 2);
        assert_eq!(summary.updated_range.as_deref(), Some("Students!A11:M12"));
    }

    #[test]
    fn test_append_summary_falls_back_to_sent_rows() {
        let summary = AppendSummary::from_response("Logs!A2", 5, AppendValuesResponse::default());

        assert_eq!(summary.updated_rows, 5);
        assert_eq!(summary.range, "Logs!A2");
        assert!(summary.updated_range.is_none());
    }

    #[test]
    fn test_value_range_serialization() {
        let rows = vec![vec!["a".to_string(), "".to_string()]];
        let body = serde_json::to_value(ValueRange { values: &rows }).unwrap();

        assert_eq!(body, serde_json::json!({ "values": [["a", ""]] }));
    }
}
