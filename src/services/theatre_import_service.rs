// src/services/theatre_import_service.rs
//
// Theatre import pipeline: JSON -> TheatreRecord (+ TicketRecords) -> Theatre
//
// Tickets are filtered one by one. A bad ticket costs a failure line but
// never the theatre; a theatre left with no tickets is still imported.

use log::{debug, info, warn};
use std::sync::Arc;

use super::batch::Batch;
use super::report::{theatre_imported, ImportReport};
use crate::application::dto::TheatreRecord;
use crate::domain::{Theatre, Ticket, Validate};
use crate::error::AppResult;
use crate::infrastructure::parse_json_collection;
use crate::repositories::TheatreRepository;

pub struct TheatreImportService {
    theatre_repo: Arc<dyn TheatreRepository>,
}

impl TheatreImportService {
    pub fn new(theatre_repo: Arc<dyn TheatreRepository>) -> Self {
        Self { theatre_repo }
    }

    pub fn import_theatres(&self, json: &str) -> AppResult<String> {
        let records: Vec<TheatreRecord> = parse_json_collection(json)?;

        let mut batch = Batch::new();
        let report = classify_theatres(records, &mut batch);

        self.theatre_repo.add_batch(batch.as_slice())?;

        info!(
            "Theatre import finished: {} theatres with {} tickets imported, {} lines rejected",
            batch.len(),
            batch.iter().map(Theatre::ticket_count).sum::<usize>(),
            report.rejected()
        );
        Ok(report.to_string())
    }
}

/// Validate and map every theatre and its tickets, pushing accepted
/// theatres into `batch`
pub fn classify_theatres(records: Vec<TheatreRecord>, batch: &mut Batch<Theatre>) -> ImportReport {
    let mut report = ImportReport::new();

    for record in records {
        if !record.is_valid() {
            debug!("Theatre '{}' rejected: {:?}", record.name, record.violations());
            report.invalid();
            continue;
        }

        let mut theatre = Theatre::new(record.name, record.number_of_halls, record.director);

        for ticket in record.tickets.unwrap_or_default() {
            if !ticket.is_valid() {
                debug!(
                    "Ticket for theatre '{}' rejected: {:?}",
                    theatre.name,
                    ticket.violations()
                );
                report.invalid();
                continue;
            }

            theatre.add_ticket(Ticket::new(ticket.price, ticket.row_number, ticket.play_id));
        }

        if theatre.tickets.is_empty() {
            warn!("Theatre '{}' imported without tickets", theatre.name);
        }

        report.success(theatre_imported(&theatre));
        batch.push(theatre);
    }

    report
}
