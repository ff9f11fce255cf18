// src/application/dto/mod.rs
//
// Transfer Records
//
// CRITICAL PRINCIPLES:
// - Records are plain data decoded straight from the payload
// - Missing fields take their type default ("" / 0 / false)
// - Records are validated, mapped, then dropped; they are never persisted
// - Each record carries its own constraint table (see `domain::constraints`)

pub mod casts;
pub mod plays;
pub mod theatres;

pub use casts::{CastRecord, CastsDocument};
pub use plays::{PlayRecord, PlaysDocument};
pub use theatres::{TheatreRecord, TicketRecord};
