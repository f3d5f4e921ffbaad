//! The five CSV sources and where their rows land

use std::fmt;

use clap::ValueEnum;

/// One CSV export and its destination sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Source {
    Students,
    Parents,
    Teachers,
    Broadcasts,
    Logs,
}

impl Source {
    /// Canonical processing order
    pub const ALL: [Source; 5] = [
        Source::Students,
        Source::Parents,
        Source::Teachers,
        Source::Broadcasts,
        Source::Logs,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Source::Students => "students.csv",
            Source::Parents => "parents.csv",
            Source::Teachers => "teachers.csv",
            Source::Broadcasts => "broadcasts.csv",
            Source::Logs => "logs.csv",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            Source::Students => "Students",
            Source::Parents => "Parents",
            Source::Teachers => "Teachers",
            Source::Broadcasts => "Broadcasts",
            Source::Logs => "Logs",
        }
    }

    /// A1 range rows are appended to (row 1 holds the headers)
    pub fn range(self) -> String {
        format!("{}!A2", self.sheet_name())
    }

    /// Column count of the destination sheet
    pub fn width(self) -> usize {
        match self {
            Source::Students => 13,
            Source::Parents => 7,
            Source::Teachers => 5,
            Source::Broadcasts => 6,
            Source::Logs => 5,
        }
    }

    /// Keep only the requested sources, in canonical order
    pub fn select(requested: &[Source]) -> Vec<Source> {
        if requested.is_empty() {
            return Source::ALL.to_vec();
        }

        Source::ALL
            .into_iter()
            .filter(|s| requested.contains(s))
            .collect()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
