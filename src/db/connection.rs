// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::db::migrations::initialize_database;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Environment variable that overrides the default database location
pub const DATABASE_PATH_ENV: &str = "THEATRE_IMPORTER_DB";

/// Resolve the database file path
///
/// Precedence: explicit path, then `THEATRE_IMPORTER_DB`, then
/// `{APP_DATA}/theatre-importer/theatre.db`. The parent directory is created
/// if missing.
pub fn resolve_database_path(explicit: Option<&Path>) -> AppResult<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(DATABASE_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?
                .join("theatre-importer")
                .join("theatre.db"),
        },
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    Ok(path)
}

/// Create a connection pool over a database file
///
/// Pool configuration:
/// - Max 4 connections (imports are sequential)
/// - SQLite in WAL mode
/// - Foreign keys enabled
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(db_path: &Path) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        // Enable foreign key support (not default in SQLite)
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Create a single-connection in-memory pool with the schema applied
///
/// Every in-memory connection is its own database, so the pool is capped at
/// one connection. Foreign keys are enforced, as in the file pool.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    build_memory_pool("PRAGMA foreign_keys = ON;")
}

/// Create an in-memory pool for dry runs
///
/// The scratch database starts empty, so rows referring to plays stored in
/// the real database would fail their foreign keys. They are not checked
/// here.
pub fn create_scratch_pool() -> AppResult<ConnectionPool> {
    build_memory_pool("PRAGMA foreign_keys = OFF;")
}

fn build_memory_pool(pragmas: &'static str) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory().with_init(move |conn| {
        conn.execute_batch(pragmas)?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}
