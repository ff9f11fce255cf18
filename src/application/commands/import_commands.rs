// src/application/commands/import_commands.rs
//
// Import Command Handlers
//
// RULES:
// - Read the payload file
// - Call the import service for its kind
// - Return the report text unchanged

use log::info;
use std::fmt;
use std::path::Path;

use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats, DatabaseStats};
use crate::error::AppResult;

/// Which pipeline a payload file feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// XML, `<Plays>` root
    Plays,
    /// XML, `<Casts>` root
    Casts,
    /// JSON array of theatres
    Theatres,
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportKind::Plays => write!(f, "plays"),
            ImportKind::Casts => write!(f, "casts"),
            ImportKind::Theatres => write!(f, "theatres"),
        }
    }
}

/// Import one payload file and return its report
pub fn import_file(state: &AppState, kind: ImportKind, path: &Path) -> AppResult<String> {
    info!("Importing {} from {}", kind, path.display());

    let text = std::fs::read_to_string(path)?;
    import_text(state, kind, &text)
}

/// Import an in-memory payload and return its report
pub fn import_text(state: &AppState, kind: ImportKind, text: &str) -> AppResult<String> {
    match kind {
        ImportKind::Plays => state.play_import_service.import_plays(text),
        ImportKind::Casts => state.cast_import_service.import_casts(text),
        ImportKind::Theatres => state.theatre_import_service.import_theatres(text),
    }
}

/// Row counts of the imported tables
pub fn database_stats(state: &AppState) -> AppResult<DatabaseStats> {
    let conn = get_connection(&state.pool)?;
    get_database_stats(&conn)
}
