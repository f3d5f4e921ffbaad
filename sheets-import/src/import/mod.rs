//! CSV to sheet import pipeline
//!
//! Each source is read from disk, turned into display rows and appended to
//! its sheet in a single call. Sources run one after another; the first
//! failure ends the run and earlier appends are left in place.

pub mod importer;
pub mod reader;
pub mod records;
pub mod rows;
pub mod source;
pub mod translate;
pub mod writer;

pub use importer::{ImportReport, Importer, SourceOutcome};
pub use records::{Broadcast, LogEntry, Parent, Student, Teacher};
pub use rows::{SheetRow, StudentDirectory, parent_row};
pub use source::Source;
pub use writer::{DryRunWriter, SheetWriter};
