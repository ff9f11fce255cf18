// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Each import service runs one pipeline: parse -> classify -> persist once.

pub mod batch;
pub mod cast_import_service;
pub mod play_import_service;
pub mod report;
pub mod theatre_import_service;


pub use batch::Batch;

pub use report::{ImportReport, Rejection, INVALID_DATA};

pub use play_import_service::{classify_plays, PlayImportService, PLAYS_ROOT};

pub use cast_import_service::{classify_casts, CastImportService, CASTS_ROOT};

pub use theatre_import_service::{classify_theatres, TheatreImportService};
