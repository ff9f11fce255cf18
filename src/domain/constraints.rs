// src/domain/constraints.rs
//
// Field constraint table
//
// Every transfer record describes its fields as a list of `FieldRule`s.
// A single routine evaluates them; there is no per-record validation code
// beyond the table itself.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// A single check applied to a field value
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Value must be present: non-blank for text
    Required,

    /// Text must have at least this many characters
    MinLength(usize),

    /// Text must have at most this many characters
    MaxLength(usize),

    /// Number must lie within the inclusive bounds
    Range(f64, f64),

    /// Text must match the pattern, which is anchored with `^...$` so it
    /// covers the whole value. Empty text is left to `Required`.
    Pattern(&'static LazyLock<Regex>),
}

/// Borrowed view of a field, as seen by the constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl Constraint {
    /// Check one value. Kind mismatches (a length bound on a number) fail.
    pub fn is_satisfied_by(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::Required, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Constraint::Required, FieldValue::Number(_)) => true,
            (Constraint::MinLength(min), FieldValue::Text(text)) => text.chars().count() >= *min,
            (Constraint::MaxLength(max), FieldValue::Text(text)) => text.chars().count() <= *max,
            (Constraint::Range(min, max), FieldValue::Number(number)) => {
                *min <= number && number <= *max
            }
            (Constraint::Pattern(pattern), FieldValue::Text(text)) => {
                text.is_empty() || pattern.is_match(text)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "required"),
            Constraint::MinLength(min) => write!(f, "min length {}", min),
            Constraint::MaxLength(max) => write!(f, "max length {}", max),
            Constraint::Range(min, max) => write!(f, "range {}..={}", min, max),
            Constraint::Pattern(pattern) => write!(f, "pattern {}", pattern.as_str()),
        }
    }
}

/// One row of a record's constraint table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub constraints: &'static [Constraint],
}

impl<'a> FieldRule<'a> {
    pub fn new(
        field: &'static str,
        value: FieldValue<'a>,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            field,
            value,
            constraints,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied_by(self.value))
    }
}

/// A failed constraint, kept for diagnostics only
#[derive(Debug, Clone, Copy)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violates {}", self.field, self.constraint)
    }
}

/// Implemented by every transfer record.
///
/// Validation never mutates the record and never fails loudly: a broken
/// field only turns the result into `false`.
pub trait Validate {
    /// The record's constraint table, one entry per constrained field
    fn rules(&self) -> Vec<FieldRule<'_>>;

    fn is_valid(&self) -> bool {
        self.rules().iter().all(FieldRule::is_satisfied)
    }

    fn violations(&self) -> Vec<Violation> {
        self.rules()
            .iter()
            .flat_map(|rule| {
                rule.constraints
                    .iter()
                    .filter(|constraint| !constraint.is_satisfied_by(rule.value))
                    .map(|constraint| Violation {
                        field: rule.field,
                        constraint: *constraint,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{3}$").expect("Invalid regex pattern"));

    static NAME_RULES: &[Constraint] = &[
        Constraint::Required,
        Constraint::MinLength(4),
        Constraint::MaxLength(6),
    ];
    static SCORE_RULES: &[Constraint] = &[Constraint::Range(0.0, 10.0)];
    static CODE_RULES: &[Constraint] = &[Constraint::Pattern(&DIGITS)];

    struct Sample {
        name: String,
        score: f64,
        code: String,
    }

    impl Validate for Sample {
        fn rules(&self) -> Vec<FieldRule<'_>> {
            vec![
                FieldRule::new("name", FieldValue::Text(&self.name), NAME_RULES),
                FieldRule::new("score", FieldValue::Number(self.score), SCORE_RULES),
                FieldRule::new("code", FieldValue::Text(&self.code), CODE_RULES),
            ]
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "Hamlet".to_string(),
            score: 10.0,
            code: "123".to_string(),
        }
    }

    #[test]
    fn test_valid_sample() {
        let s = sample();
        assert!(s.is_valid());
        assert!(s.violations().is_empty());
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(!Constraint::Required.is_satisfied_by(FieldValue::Text("   ")));
        assert!(!Constraint::Required.is_satisfied_by(FieldValue::Text("")));
        assert!(Constraint::Required.is_satisfied_by(FieldValue::Text("x")));
    }

    #[test]
    fn test_length_counts_chars() {
        // four chars, eight bytes
        assert!(Constraint::MinLength(4).is_satisfied_by(FieldValue::Text("ÉÉÉÉ")));
        assert!(Constraint::MaxLength(4).is_satisfied_by(FieldValue::Text("ÉÉÉÉ")));
        assert!(!Constraint::MaxLength(3).is_satisfied_by(FieldValue::Text("ÉÉÉÉ")));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = Constraint::Range(0.0, 10.0);
        assert!(range.is_satisfied_by(FieldValue::Number(0.0)));
        assert!(range.is_satisfied_by(FieldValue::Number(10.0)));
        assert!(!range.is_satisfied_by(FieldValue::Number(10.01)));
        assert!(!range.is_satisfied_by(FieldValue::Number(-0.01)));
        assert!(!range.is_satisfied_by(FieldValue::Number(f64::NAN)));
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        let pattern = Constraint::Pattern(&DIGITS);
        assert!(pattern.is_satisfied_by(FieldValue::Text("123")));
        assert!(!pattern.is_satisfied_by(FieldValue::Text("1234")));
        assert!(!pattern.is_satisfied_by(FieldValue::Text("a123")));
        assert!(pattern.is_satisfied_by(FieldValue::Text("")));
    }

    #[test]
    fn test_kind_mismatch_fails() {
        assert!(!Constraint::MinLength(1).is_satisfied_by(FieldValue::Number(5.0)));
        assert!(!Constraint::Range(0.0, 1.0).is_satisfied_by(FieldValue::Text("0.5")));
    }

    #[test]
    fn test_violations_name_field_and_constraint() {
        let mut s = sample();
        s.name = "Lear".to_string() + "-King";
        s.score = 11.0;

        let violations = s.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].to_string(), "name violates max length 6");
        assert_eq!(violations[1].to_string(), "score violates range 0..=10");
        assert!(!s.is_valid());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let mut s = sample();
        s.code = "12".to_string();
        assert_eq!(s.is_valid(), s.is_valid());
        assert!(!s.is_valid());
    }
}
