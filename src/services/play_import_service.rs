// src/services/play_import_service.rs
//
// Play import pipeline: XML -> PlayRecord -> Play

use log::{debug, info};
use std::sync::Arc;

use super::batch::Batch;
use super::report::{play_imported, ImportReport, Rejection};
use crate::application::dto::{PlayRecord, PlaysDocument};
use crate::domain::{validate_play, Genre, Play, PlayDuration, Validate};
use crate::error::AppResult;
use crate::infrastructure::parse_xml_document;
use crate::repositories::PlayRepository;

/// Root element of a plays payload
pub const PLAYS_ROOT: &str = "Plays";

pub struct PlayImportService {
    play_repo: Arc<dyn PlayRepository>,
}

impl PlayImportService {
    pub fn new(play_repo: Arc<dyn PlayRepository>) -> Self {
        Self { play_repo }
    }

    /// Parse, classify and persist a plays payload; returns the report text.
    ///
    /// A payload that does not decode fails the whole call and nothing is
    /// persisted.
    pub fn import_plays(&self, xml: &str) -> AppResult<String> {
        let document: PlaysDocument = parse_xml_document(xml, PLAYS_ROOT)?;

        let mut batch = Batch::new();
        let report = classify_plays(document.plays, &mut batch);

        self.play_repo.add_batch(batch.as_slice())?;

        info!(
            "Play import finished: {} imported, {} rejected",
            report.imported(),
            report.rejected()
        );
        Ok(report.to_string())
    }
}

/// Validate and map every record, pushing accepted plays into `batch`
pub fn classify_plays(records: Vec<PlayRecord>, batch: &mut Batch<Play>) -> ImportReport {
    let mut report = ImportReport::new();

    for (index, record) in records.into_iter().enumerate() {
        match map_play(record) {
            Ok(play) => {
                report.success(play_imported(&play));
                batch.push(play);
            }
            Err(rejection) => {
                debug!("Play #{} rejected: {}", index + 1, rejection);
                report.invalid();
            }
        }
    }

    report
}

fn map_play(record: PlayRecord) -> Result<Play, Rejection> {
    let duration = PlayDuration::parse_exact(&record.duration)?;

    if !record.is_valid() {
        return Err(Rejection::Constraints(record.violations()));
    }

    let genre: Genre = record.genre.parse()?;

    let play = Play::new(
        record.title,
        duration,
        record.rating,
        genre,
        record.description,
        record.screenwriter,
    );
    validate_play(&play)?;

    Ok(play)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, duration: &str, genre: &str) -> PlayRecord {
        PlayRecord {
            title: title.to_string(),
            duration: duration.to_string(),
            rating: 7.5,
            genre: genre.to_string(),
            description: "A play about people.".to_string(),
            screenwriter: "Some Writer".to_string(),
        }
    }

    #[test]
    fn test_accepts_valid_record() {
        let mut batch = Batch::new();
        let report = classify_plays(vec![record("Hamlet", "02:00:00", "Drama")], &mut batch);

        assert_eq!(
            report.to_string(),
            "Successfully imported Hamlet with genre Drama and a rating of 7.5!"
        );
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.as_slice()[0].genre, Genre::Drama);
        assert_eq!(batch.as_slice()[0].duration, PlayDuration::from_hms(2, 0, 0));
    }

    #[test]
    fn test_short_play_rejected() {
        let mut batch = Batch::new();
        let report = classify_plays(vec![record("Hamlet", "00:45:00", "Drama")], &mut batch);

        assert_eq!(report.to_string(), "Invalid data!");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let mut batch = Batch::new();
        let report = classify_plays(vec![record("Hamlet", "02:00:00", "Sci-Fi")], &mut batch);

        assert_eq!(report.to_string(), "Invalid data!");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_unparsable_duration_is_a_record_rejection() {
        let mut batch = Batch::new();
        let report = classify_plays(
            vec![record("Hamlet", "two hours", "Drama"), record("Othello", "03:00:00", "Drama")],
            &mut batch,
        );

        assert_eq!(report.lines()[0], "Invalid data!");
        assert!(report.lines()[1].starts_with("Successfully imported Othello"));
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let records = vec![
            record("Hamlet", "02:00:00", "Drama"),
            record("Ham", "02:00:00", "Drama"),
            record("Cats", "02:30:00", "Musical"),
            PlayRecord::default(),
        ];
        let mut batch = Batch::new();
        let report = classify_plays(records, &mut batch);

        assert_eq!(report.lines().len(), 4);
        assert!(report.lines()[0].contains("Hamlet"));
        assert_eq!(report.lines()[1], "Invalid data!");
        assert!(report.lines()[2].contains("Cats with genre Musical"));
        assert_eq!(report.lines()[3], "Invalid data!");
        assert_eq!(batch.len(), 2);
        assert_eq!(report.imported(), 2);
        assert_eq!(report.rejected(), 2);
    }
}
