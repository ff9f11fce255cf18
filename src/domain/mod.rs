// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod cast;
pub mod constraints;
pub mod play;
pub mod theatre;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Field constraints (shared by every transfer record)
pub use constraints::{Constraint, FieldRule, FieldValue, Validate, Violation};

// Play Domain
pub use play::{validate_play, Genre, Play, PlayDuration};

// Cast Domain
pub use cast::Cast;

// Theatre Domain
pub use theatre::{Theatre, Ticket};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent values that cannot become entities
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid duration '{0}', expected [d.]hh:mm:ss[.fffffff]")]
    InvalidDuration(String),

    #[error("Unknown genre '{0}'")]
    UnknownGenre(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
