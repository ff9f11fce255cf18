//! Cast members of a play.
//!
//! A cast row references its play by id only; whether that play exists is
//! decided by the storage schema, not here.

pub mod entity;

pub use entity::Cast;
