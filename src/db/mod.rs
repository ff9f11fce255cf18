// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, create_scratch_pool, get_connection,
    resolve_database_path, ConnectionPool, PooledConn, DATABASE_PATH_ENV,
};

pub use migrations::{get_database_stats, initialize_database, DatabaseStats};
