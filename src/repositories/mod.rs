// src/repositories/mod.rs
//
// Repository layer (persistence gateway)
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO validation (callers hand over accepted entities only)
// - One transaction, one commit per `add_batch` call
// - NO cross-repository calls
// - Explicit SQL only

pub mod cast_repository;
pub mod play_repository;
pub mod theatre_repository;

pub use cast_repository::{CastRepository, SqliteCastRepository};
pub use play_repository::{PlayRepository, SqlitePlayRepository};
pub use theatre_repository::{SqliteTheatreRepository, TheatreRepository};

#[cfg(test)]
pub use cast_repository::MockCastRepository;
#[cfg(test)]
pub use play_repository::MockPlayRepository;
#[cfg(test)]
pub use theatre_repository::MockTheatreRepository;

/// Wrap a column decoding failure the way rusqlite expects it
fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}
