use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::domain::{Constraint, FieldRule, FieldValue, Validate};

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+][4][4]-\d{2}-\d{3}-\d{4}$").expect("Invalid phone number regex")
});

static FULL_NAME: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(4),
    Constraint::MaxLength(30),
];
static PHONE_NUMBER: &[Constraint] = &[Constraint::Required, Constraint::Pattern(&PHONE_PATTERN)];

/// `<Casts>` document root
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastsDocument {
    #[serde(rename = "Cast")]
    pub casts: Vec<CastRecord>,
}

/// One `<Cast>` element
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CastRecord {
    /// Informational only; storage assigns its own id
    pub id: i32,
    pub full_name: String,
    pub is_main_character: bool,
    pub phone_number: String,
    pub play_id: i32,
}

impl Validate for CastRecord {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new("FullName", FieldValue::Text(&self.full_name), FULL_NAME),
            FieldRule::new("PhoneNumber", FieldValue::Text(&self.phone_number), PHONE_NUMBER),
        ]
    }
}
