pub mod duration;
pub mod entity;
pub mod invariants;

pub use duration::PlayDuration;
pub use entity::{Genre, Play};
pub use invariants::validate_play;
