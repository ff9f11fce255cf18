use serde::Deserialize;

use crate::domain::{Constraint, FieldRule, FieldValue, Validate};

static TITLE: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(4),
    Constraint::MaxLength(50),
];
static DURATION: &[Constraint] = &[Constraint::Required];
static RATING: &[Constraint] = &[Constraint::Range(0.00, 10.00)];
static DESCRIPTION: &[Constraint] = &[Constraint::Required, Constraint::MaxLength(700)];
static SCREENWRITER: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(4),
    Constraint::MaxLength(50),
];

/// `<Plays>` document root
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaysDocument {
    #[serde(rename = "Play")]
    pub plays: Vec<PlayRecord>,
}

/// One `<Play>` element
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlayRecord {
    pub title: String,
    /// Kept as text; parsed during mapping
    pub duration: String,
    pub rating: f32,
    /// Kept as text; looked up during mapping
    pub genre: String,
    pub description: String,
    pub screenwriter: String,
}

impl Validate for PlayRecord {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new("Title", FieldValue::Text(&self.title), TITLE),
            FieldRule::new("Duration", FieldValue::Text(&self.duration), DURATION),
            FieldRule::new("Rating", FieldValue::Number(f64::from(self.rating)), RATING),
            FieldRule::new("Description", FieldValue::Text(&self.description), DESCRIPTION),
            FieldRule::new("Screenwriter", FieldValue::Text(&self.screenwriter), SCREENWRITER),
        ]
    }
}
