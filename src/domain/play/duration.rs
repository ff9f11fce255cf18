// src/domain/play/duration.rs
//
// Play running time
//
// Parsed from the constant time-span notation `[d.]hh:mm:ss[.fffffff]`.
// Anything outside that notation is rejected; there is no lenient fallback.

use chrono::Duration;
use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

const MAX_DAYS: i64 = 10_675_199;
const FRACTION_DIGITS: usize = 7;

/// Structured time span of a play
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayDuration(Duration);

impl PlayDuration {
    /// Parse the strict constant format.
    ///
    /// Hours are 0-23, minutes and seconds 0-59, each one or two digits.
    /// An optional `d.` prefix carries whole days and an optional `.fffffff`
    /// suffix carries up to seven fractional-second digits.
    pub fn parse_exact(input: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidDuration(input.to_string());
        let text = input.trim();

        let mut parts = text.split(':');
        let (head, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(head), Some(minutes), Some(seconds), None) => (head, minutes, seconds),
            _ => return Err(invalid()),
        };

        let (days, hours) = match head.split_once('.') {
            Some((days, hours)) => (parse_digits(days, 1, 8).ok_or_else(invalid)?, hours),
            None => (0, head),
        };
        if days > MAX_DAYS {
            return Err(invalid());
        }

        let (seconds, fraction) = match seconds.split_once('.') {
            Some((seconds, fraction)) => (seconds, Some(fraction)),
            None => (seconds, None),
        };

        let hours = parse_component(hours, 23).ok_or_else(invalid)?;
        let minutes = parse_component(minutes, 59).ok_or_else(invalid)?;
        let seconds = parse_component(seconds, 59).ok_or_else(invalid)?;

        let nanos = match fraction {
            Some(fraction) => {
                let ticks = parse_digits(fraction, 1, FRACTION_DIGITS).ok_or_else(invalid)?;
                let scale = 10_i64.pow((FRACTION_DIGITS - fraction.len()) as u32);
                ticks * scale * 100
            }
            None => 0,
        };

        Ok(Self(
            Duration::days(days)
                + Duration::hours(hours)
                + Duration::minutes(minutes)
                + Duration::seconds(seconds)
                + Duration::nanoseconds(nanos),
        ))
    }

    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self(Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds))
    }

    /// Hour component (0-23), not the total number of hours
    pub fn hours(&self) -> i64 {
        self.0.num_hours() % 24
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

/// ASCII digits only, with a bounded length
fn parse_digits(text: &str, min_len: usize, max_len: usize) -> Option<i64> {
    if text.len() < min_len || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_component(text: &str, max: i64) -> Option<i64> {
    parse_digits(text, 1, 2).filter(|value| *value <= max)
}

impl FromStr for PlayDuration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s)
    }
}

impl fmt::Display for PlayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.num_seconds();
        let days = total / 86_400;
        if days > 0 {
            write!(f, "{}.", days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            (total / 3_600) % 24,
            (total / 60) % 60,
            total % 60
        )?;
        let ticks = self.0.subsec_nanos() / 100;
        if ticks > 0 {
            write!(f, ".{:07}", ticks)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_hms() {
        let duration = PlayDuration::parse_exact("02:15:30").unwrap();
        assert_eq!(duration.hours(), 2);
        assert_eq!(duration.as_duration().num_seconds(), 2 * 3600 + 15 * 60 + 30);
        assert_eq!(duration, PlayDuration::from_hms(2, 15, 30));
    }

    #[test]
    fn test_single_digit_components() {
        let duration = PlayDuration::parse_exact("1:5:9").unwrap();
        assert_eq!(duration, PlayDuration::from_hms(1, 5, 9));
    }

    #[test]
    fn test_days_do_not_count_as_hours() {
        let duration = PlayDuration::parse_exact("1.00:30:00").unwrap();
        assert_eq!(duration.hours(), 0);
        assert_eq!(duration.as_duration().num_minutes(), 24 * 60 + 30);
    }

    #[test]
    fn test_fraction() {
        let duration = PlayDuration::parse_exact("01:00:00.5").unwrap();
        assert_eq!(duration.as_duration().num_milliseconds(), 3_600_500);
        assert_eq!(duration.to_string(), "01:00:00.5000000");
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "", "abc", "01:00", "01:00:00:00", "24:00:00", "01:60:00", "01:00:60",
            "001:00:00", "-01:00:00", "01:00:00.12345678", "1h30m", "01::00", "01:00:0a",
        ] {
            assert!(
                PlayDuration::parse_exact(input).is_err(),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_storage_form() {
        let duration = PlayDuration::parse_exact("2.03:04:05").unwrap();
        assert_eq!(duration.to_string(), "2.03:04:05");
        assert_eq!("2.03:04:05".parse::<PlayDuration>().unwrap(), duration);
    }

    #[test]
    fn test_error_carries_input() {
        let err = PlayDuration::parse_exact("nope").unwrap_err();
        assert_eq!(err, DomainError::InvalidDuration("nope".to_string()));
    }
}
