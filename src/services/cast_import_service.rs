// src/services/cast_import_service.rs
//
// Cast import pipeline: XML -> CastRecord -> Cast

use log::{debug, info};
use std::sync::Arc;

use super::batch::Batch;
use super::report::{actor_imported, ImportReport};
use crate::application::dto::{CastRecord, CastsDocument};
use crate::domain::{Cast, Validate};
use crate::error::AppResult;
use crate::infrastructure::parse_xml_document;
use crate::repositories::CastRepository;

/// Root element of a casts payload
pub const CASTS_ROOT: &str = "Casts";

pub struct CastImportService {
    cast_repo: Arc<dyn CastRepository>,
}

impl CastImportService {
    pub fn new(cast_repo: Arc<dyn CastRepository>) -> Self {
        Self { cast_repo }
    }

    pub fn import_casts(&self, xml: &str) -> AppResult<String> {
        let document: CastsDocument = parse_xml_document(xml, CASTS_ROOT)?;

        let mut batch = Batch::new();
        let report = classify_casts(document.casts, &mut batch);

        self.cast_repo.add_batch(batch.as_slice())?;

        info!(
            "Cast import finished: {} imported, {} rejected",
            report.imported(),
            report.rejected()
        );
        Ok(report.to_string())
    }
}

/// Validate and map every record, pushing accepted cast members into `batch`
pub fn classify_casts(records: Vec<CastRecord>, batch: &mut Batch<Cast>) -> ImportReport {
    let mut report = ImportReport::new();

    for record in records {
        if !record.is_valid() {
            debug!("Cast {} rejected: {:?}", record.id, record.violations());
            report.invalid();
            continue;
        }

        let cast = Cast::new(
            record.full_name,
            record.is_main_character,
            record.phone_number,
            record.play_id,
        );

        report.success(actor_imported(&cast));
        batch.push(cast);
    }

    report
}
