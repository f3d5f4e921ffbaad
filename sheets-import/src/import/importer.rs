//! Sequential import driver

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use super::reader::read_records;
use super::records::{Broadcast, LogEntry, Parent, Student, Teacher};
use super::rows::{SheetRow, StudentDirectory, parent_row};
use super::source::Source;
use super::writer::SheetWriter;
use crate::api::AppendSummary;

/// Result of importing one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Appended {
        source: Source,
        rows: usize,
        summary: AppendSummary,
    },
    /// The CSV had no data rows, nothing was sent
    Skipped { source: Source },
}

impl SourceOutcome {
    pub fn source(&self) -> Source {
        match self {
            SourceOutcome::Appended { source, .. } | SourceOutcome::Skipped { source } => *source,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            SourceOutcome::Appended { rows, .. } => *rows,
            SourceOutcome::Skipped { .. } => 0,
        }
    }
}

/// Outcomes of a full run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub outcomes: Vec<SourceOutcome>,
}

impl ImportReport {
    pub fn total_rows(&self) -> usize {
        self.outcomes.iter().map(SourceOutcome::rows).sum()
    }

    pub fn appended_sources(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SourceOutcome::Appended { .. }))
            .count()
    }
}

/// Reads the CSV exports from one directory and appends them through a writer
pub struct Importer<W> {
    input_dir: PathBuf,
    writer: W,
    sources: Vec<Source>,
    students: Option<Vec<Student>>,
}

impl<W: SheetWriter> Importer<W> {
    pub fn new(input_dir: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            input_dir: input_dir.into(),
            writer,
            sources: Source::ALL.to_vec(),
            students: None,
        }
    }

    /// Restrict the run to `sources`; an empty list keeps all of them
    pub fn with_sources(mut self, sources: &[Source]) -> Self {
        self.sources = Source::select(sources);
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Import every selected source in order, stopping at the first failure
    pub async fn run(&mut self) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for source in self.sources.clone() {
            let outcome = self.import_source(source).await?;
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    /// Read, transform and append one source
    pub async fn import_source(&mut self, source: Source) -> Result<SourceOutcome> {
        let rows = self
            .build_rows(source)
            .with_context(|| format!("Failed to prepare {}", source.file_name()))?;

        if rows.is_empty() {
            info!("No {} to import, skipping {}", source, source.range());
            return Ok(SourceOutcome::Skipped { source });
        }

        let range = source.range();
        let summary = self
            .writer
            .append(&range, &rows)
            .await
            .with_context(|| format!("Failed to append {} to {}", source, range))?;

        info!("Imported {} {}", rows.len(), source);

        Ok(SourceOutcome::Appended {
            source,
            rows: rows.len(),
            summary,
        })
    }

    /// Build the display rows of one source
    pub fn build_rows(&mut self, source: Source) -> Result<Vec<Vec<String>>> {
        match source {
            Source::Students => Ok(rows_of(self.students()?)),
            Source::Parents => {
                let parents: Vec<Parent> = self.read(source)?;
                if parents.is_empty() {
                    return Ok(Vec::new());
                }
                let directory = StudentDirectory::new(self.students()?);
                Ok(parents.iter().map(|p| parent_row(p, &directory)).collect())
            }
            Source::Teachers => Ok(rows_of(&self.read::<Teacher>(source)?)),
            Source::Broadcasts => Ok(rows_of(&self.read::<Broadcast>(source)?)),
            Source::Logs => Ok(rows_of(&self.read::<LogEntry>(source)?)),
        }
    }

    fn path_for(&self, source: Source) -> PathBuf {
        self.input_dir.join(source.file_name())
    }

    fn read<T: DeserializeOwned>(&self, source: Source) -> Result<Vec<T>> {
        read_records(&self.path_for(source))
    }

    /// Students are read once and shared by the students and parents steps
    fn students(&mut self) -> Result<&[Student]> {
        if self.students.is_none() {
            let students = self.read::<Student>(Source::Students)?;
            self.students = Some(students);
        }

        Ok(self.students.as_deref().unwrap_or_default())
    }
}

fn rows_of<T: SheetRow>(records: &[T]) -> Vec<Vec<String>> {
    records.iter().map(SheetRow::to_row).collect()
}
