//! Critical Theatre Invariants:
//!
//! 1. A Theatre owns its Tickets; they are never persisted on their own
//! 2. A Theatre without tickets is still a valid Theatre
//! 3. Ticket order follows the order they were accepted in

pub mod entity;

pub use entity::{Theatre, Ticket};
