// src/services/report.rs
//
// Import report
//
// One line per input record, in input order. Failures are always the same
// generic line; the reason is only ever logged.

use std::fmt;
use thiserror::Error;

use crate::domain::{Cast, DomainError, Play, Theatre, Violation};

/// The only failure line an import ever emits
pub const INVALID_DATA: &str = "Invalid data!";

/// Why a record was not imported. Logged, never reported.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("{}", describe(.0))]
    Constraints(Vec<Violation>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Line-per-record outcome of one import call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    lines: Vec<String>,
    imported: usize,
    rejected: usize,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, line: String) {
        self.imported += 1;
        self.lines.push(line);
    }

    pub fn invalid(&mut self) {
        self.rejected += 1;
        self.lines.push(INVALID_DATA.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Records turned into entities
    pub fn imported(&self) -> usize {
        self.imported
    }

    /// Records (and tickets) that produced the generic failure line
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

/// Newline-separated, no trailing newline
impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

pub fn play_imported(play: &Play) -> String {
    format!(
        "Successfully imported {} with genre {} and a rating of {}!",
        play.title, play.genre, play.rating
    )
}

pub fn actor_imported(cast: &Cast) -> String {
    format!(
        "Successfully imported actor {} as a {} character!",
        cast.full_name,
        cast.role_label()
    )
}

pub fn theatre_imported(theatre: &Theatre) -> String {
    format!(
        "Successfully imported theatre {} with #{} tickets!",
        theatre.name,
        theatre.ticket_count()
    )
}
