//! Google Sheets v4 values client

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use super::auth::TokenSource;
use super::constants::VALUE_INPUT_OPTION;
use super::models::{AppendSummary, AppendValuesResponse, GoogleErrorEnvelope, ValueRange};
use crate::config::SheetsConfig;
use crate::import::SheetWriter;

/// Non-success answer from the Sheets API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetsError {
    Api {
        status: u16,
        range: String,
        message: String,
    },
}

impl std::fmt::Display for SheetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsError::Api {
                status,
                range,
                message,
            } => write!(
                f,
                "Sheets API returned {} for {}: {}",
                status, range, message
            ),
        }
    }
}

impl std::error::Error for SheetsError {}

/// Client bound to a single spreadsheet
#[derive(Debug)]
pub struct SheetsClient {
    http: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    tokens: TokenSource,
}

impl SheetsClient {
    pub fn new(
        http: reqwest::Client,
        api_base: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        tokens: TokenSource,
    ) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            spreadsheet_id: spreadsheet_id.into(),
            tokens,
        }
    }

    /// Build a client from the loaded configuration
    pub fn from_config(config: &SheetsConfig) -> Result<Self> {
        let http = reqwest::Client::new();
        let tokens = TokenSource::from_credentials(&config.credentials, http.clone())
            .context("Failed to load Google credentials")?;

        Ok(Self::new(
            http,
            config.api_base.clone(),
            config.spreadsheet_id.clone(),
            tokens,
        ))
    }

    /// URL of the `values:append` endpoint for an A1 range
    pub fn append_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.api_base,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    /// Append rows after the existing content of `range`
    pub async fn append_values(&self, range: &str, rows: &[Vec<String>]) -> Result<AppendSummary> {
        let token = self
            .tokens
            .access_token()
            .await
            .context("Failed to obtain access token")?;

        let url = self.append_url(range);
        debug!("POST {} ({} rows)", url, rows.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .json(&ValueRange { values: rows })
            .send()
            .await
            .with_context(|| format!("Failed to send append request for {}", range))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read append response for {}", range))?;

        if !status.is_success() {
            return Err(api_error(status, range, &body).into());
        }

        let parsed: AppendValuesResponse = if body.trim().is_empty() {
            AppendValuesResponse::default()
        } else {
            serde_json::from_str(&body)
                .with_context(|| format!("Unexpected append response for {}", range))?
        };

        let summary = AppendSummary::from_response(range, rows.len(), parsed);
        debug!(
            "Appended {} rows to {}{}",
            summary.updated_rows,
            range,
            summary
                .updated_range
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default()
        );

        Ok(summary)
    }
}

fn api_error(status: StatusCode, range: &str, body: &str) -> SheetsError {
    let message = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    SheetsError::Api {
        status: status.as_u16(),
        range: range.to_string(),
        message,
    }
}

#[async_trait]
impl SheetWriter for SheetsClient {
    async fn append(&self, range: &str, rows: &[Vec<String>]) -> Result<AppendSummary> {
        self.append_values(range, rows).await
    }
}
