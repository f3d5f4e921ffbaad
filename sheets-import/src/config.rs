//! Runtime configuration
//!
//! Secrets come from the process environment, optionally seeded from a `.env`
//! file. Command-line flags override individual values.

use std::path::PathBuf;

use crate::api::constants::DEFAULT_SHEETS_API_BASE;

pub const ENV_SPREADSHEET_ID: &str = "SPREADSHEET_ID";
pub const ENV_SERVICE_ACCOUNT: &str = "GOOGLE_SA_BASE64";
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_ACCESS_TOKEN";
pub const ENV_API_BASE: &str = "SHEETS_API_BASE";

/// Error raised while assembling the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    MissingVar { name: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar { name } => {
                write!(f, "Missing required env var: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// How the importer authenticates against the Sheets API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Base64-encoded service account JSON key
    ServiceAccount(String),
    /// Pre-minted OAuth2 access token
    AccessToken(String),
}

/// Everything needed to talk to the spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub credentials: Credentials,
    pub api_base: String,
}

impl SheetsConfig {
    /// Public link to the spreadsheet, shown at the end of a run
    pub fn spreadsheet_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}",
            self.spreadsheet_id
        )
    }
}

/// Full run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    /// `None` in dry-run mode
    pub sheets: Option<SheetsConfig>,
}

/// Values supplied on the command line that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub spreadsheet_id: Option<String>,
    pub input_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl Config {
    /// Load `.env` (if present) and build the configuration from the process environment
    pub fn load(overrides: Overrides) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(overrides, |name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let input_dir = overrides.input_dir.unwrap_or_else(|| PathBuf::from("."));

        if overrides.dry_run {
            return Ok(Self {
                input_dir,
                sheets: None,
            });
        }

        let spreadsheet_id = overrides
            .spreadsheet_id
            .or_else(|| get(ENV_SPREADSHEET_ID))
            .ok_or(ConfigError::MissingVar {
                name: ENV_SPREADSHEET_ID,
            })?;

        let credentials = match get(ENV_ACCESS_TOKEN) {
            Some(token) => Credentials::AccessToken(token),
            None => get(ENV_SERVICE_ACCOUNT)
                .map(Credentials::ServiceAccount)
                .ok_or(ConfigError::MissingVar {
                    name: ENV_SERVICE_ACCOUNT,
                })?,
        };

        let api_base = get(ENV_API_BASE)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string());

        Ok(Self {
            input_dir,
            sheets: Some(SheetsConfig {
                spreadsheet_id,
                credentials,
                api_base,
            }),
        })
    }
}
