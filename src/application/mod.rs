// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits above the domain, repositories and services
// - It provides the boundary between the command line and the services
// - It translates payloads into transfer records (dto) and errors into
//   exit codes

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use error_handling::{ErrorType, exit_code};
pub use state::AppState;
