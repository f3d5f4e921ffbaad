//! Import school bot CSV exports into Google Sheets
//!
//! Students, parents, teachers, broadcasts and logs are read from their CSV
//! exports, translated into the Arabic display rows the bot's spreadsheet
//! expects, and appended to the matching tabs.

pub mod api;
pub mod cli;
pub mod config;
pub mod import;

pub use config::Config;
pub use import::{ImportReport, Importer, Source};
