// src/lib.rs
// Theatre Importer - Batch importer for plays, casts and theatres
//
// Architecture:
// - Domain-centric: entities, value objects and field constraints live in domain
// - Linear pipelines: parse -> validate -> map -> persist once -> report
// - Explicit: No implicit behavior, no magic
// - Application Layer: command-line boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_play,
    // Cast
    Cast,
    // Constraints
    Constraint,
    DomainError,
    FieldRule,
    FieldValue,
    Genre,
    // Play
    Play,
    PlayDuration,
    // Theatre
    Theatre,
    Ticket,
    Validate,
    Violation,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_memory_pool, create_scratch_pool, get_database_stats,
    initialize_database, ConnectionPool, DatabaseStats,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CastRepository, PlayRepository, SqliteCastRepository, SqlitePlayRepository,
    SqliteTheatreRepository, TheatreRepository,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{parse_json_collection, parse_xml_document};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    Batch,
    CastImportService,
    ImportReport,
    PlayImportService,
    TheatreImportService,
    INVALID_DATA,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
