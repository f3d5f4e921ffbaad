//! Google Sheets API access
//!
//! Service account authentication and the `values:append` call used by the
//! importer. Only the endpoints the importer needs are modelled.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;

pub use auth::{AuthError, ServiceAccountAuth, ServiceAccountKey, TokenSource};
pub use client::{SheetsClient, SheetsError};
pub use models::AppendSummary;
