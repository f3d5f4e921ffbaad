//! Google API endpoints and scopes

/// Default Sheets API host
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Default OAuth2 token endpoint for service accounts
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Read/write access to spreadsheets
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Grant type for the signed JWT assertion flow
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Values are parsed as if typed into the UI (dates, numbers)
pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Lifetime requested for the JWT assertion, in seconds
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh the cached token this many seconds before it expires
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;
