// src/application/state.rs

use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::db::{
    create_connection_pool, create_scratch_pool, get_connection, initialize_database,
    resolve_database_path, ConnectionPool,
};
use crate::error::AppResult;
use crate::repositories::{
    CastRepository, PlayRepository, SqliteCastRepository, SqlitePlayRepository,
    SqliteTheatreRepository, TheatreRepository,
};
use crate::services::{CastImportService, PlayImportService, TheatreImportService};

/// Everything a command needs, wired once at startup
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub play_import_service: Arc<PlayImportService>,
    pub cast_import_service: Arc<CastImportService>,
    pub theatre_import_service: Arc<TheatreImportService>,
}

impl AppState {
    /// Open the database the command line asked for
    ///
    /// A dry run imports into an empty scratch database and writes nothing
    /// to disk; otherwise the file at `database` (or its default location)
    /// is opened and its schema initialized.
    pub fn open(database: Option<&Path>, dry_run: bool) -> AppResult<Self> {
        let pool = if dry_run {
            info!("Dry run: importing into an in-memory database");
            create_scratch_pool()?
        } else {
            let path = resolve_database_path(database)?;
            info!("Using database {}", path.display());
            let pool = create_connection_pool(&path)?;

            // Initialize schema (idempotent)
            {
                let conn = get_connection(&pool)?;
                initialize_database(&conn)?;
            }
            pool
        };

        Ok(Self::from_pool(Arc::new(pool)))
    }

    /// Wire repositories and services over an existing pool
    pub fn from_pool(pool: Arc<ConnectionPool>) -> Self {
        // 1. REPOSITORIES
        let play_repo: Arc<dyn PlayRepository> = Arc::new(SqlitePlayRepository::new(pool.clone()));
        let cast_repo: Arc<dyn CastRepository> = Arc::new(SqliteCastRepository::new(pool.clone()));
        let theatre_repo: Arc<dyn TheatreRepository> =
            Arc::new(SqliteTheatreRepository::new(pool.clone()));

        // 2. SERVICES
        Self {
            pool,
            play_import_service: Arc::new(PlayImportService::new(play_repo)),
            cast_import_service: Arc::new(CastImportService::new(cast_repo)),
            theatre_import_service: Arc::new(TheatreImportService::new(theatre_repo)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::get_database_stats;

    const CASTS: &str = "<Casts>
  <Cast><Id>1</Id><FullName>Van Tyson</FullName><IsMainCharacter>false</IsMainCharacter>
    <PhoneNumber>+44-35-745-2774</PhoneNumber><PlayId>26</PlayId></Cast>
</Casts>";

    const THEATRES: &str = r#"[
  {"Name": "Donmar Warehouse", "NumberOfHalls": 1, "Director": "Tim Sheader",
   "Tickets": [{"Price": 42.50, "RowNumber": 3, "PlayId": 26}]}
]"#;

    fn stats(state: &AppState) -> crate::db::DatabaseStats {
        let conn = get_connection(&state.pool).unwrap();
        get_database_stats(&conn).unwrap()
    }

    #[test]
    fn test_dry_run_imports_casts_for_unknown_plays() {
        let state = AppState::open(None, true).unwrap();

        let report = state.cast_import_service.import_casts(CASTS).unwrap();

        assert_eq!(report, "Successfully imported actor Van Tyson as a lesser character!");
        assert_eq!(stats(&state).cast_count, 1);
    }

    #[test]
    fn test_dry_run_imports_theatre_with_tickets() {
        let state = AppState::open(None, true).unwrap();

        let report = state.theatre_import_service.import_theatres(THEATRES).unwrap();

        assert_eq!(report, "Successfully imported theatre Donmar Warehouse with #1 tickets!");
        assert_eq!(stats(&state).ticket_count, 1);
    }

    #[test]
    fn test_dry_run_leaves_database_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theatre.db");

        let state = AppState::open(Some(&path), true).unwrap();
        state.theatre_import_service.import_theatres(THEATRES).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_file_database_keeps_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theatre.db");

        let state = AppState::open(Some(&path), false).unwrap();

        assert!(path.exists());
        assert!(state.cast_import_service.import_casts(CASTS).is_err());
        assert_eq!(stats(&state).cast_count, 0);
    }
}
