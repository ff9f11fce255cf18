// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the services
// - Commands read input files and hand text to the services
// - Commands NEVER contain business logic

pub mod import_commands;

pub use import_commands::*;
