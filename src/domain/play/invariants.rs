use super::entity::Play;
use crate::domain::{DomainError, DomainResult};

/// Shortest running time a play may have, in hours
const MIN_DURATION_HOURS: i64 = 1;

/// Validates all Play invariants
pub fn validate_play(play: &Play) -> DomainResult<()> {
    validate_duration(play)?;
    Ok(())
}

/// The hour component must be at least one. A span of a day and
/// thirty minutes has an hour component of zero and is rejected.
fn validate_duration(play: &Play) -> DomainResult<()> {
    if play.duration.hours() < MIN_DURATION_HOURS {
        return Err(DomainError::InvariantViolation(format!(
            "Play duration {} is shorter than {} hour",
            play.duration, MIN_DURATION_HOURS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::play::{Genre, PlayDuration};

    fn play_lasting(duration: &str) -> Play {
        Play::new(
            "The Cherry Orchard".to_string(),
            PlayDuration::parse_exact(duration).unwrap(),
            8.5,
            Genre::Drama,
            "A family loses its estate.".to_string(),
            "Anton Chekhov".to_string(),
        )
    }

    #[test]
    fn test_one_hour_is_enough() {
        assert!(validate_play(&play_lasting("01:00:00")).is_ok());
        assert!(validate_play(&play_lasting("03:10:00")).is_ok());
    }

    #[test]
    fn test_under_an_hour_fails() {
        let result = validate_play(&play_lasting("00:45:00"));
        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("shorter than 1 hour"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }

    #[test]
    fn test_whole_days_without_hours_fail() {
        assert!(validate_play(&play_lasting("1.00:30:00")).is_err());
    }
}
