//! One-off administrative jobs run against a remote catalog.
//!
//! Every job walks its records in order, reports one [`RecordOutcome`] per
//! record through a caller-supplied callback and keeps going when the catalog
//! rejects a single record. Creation jobs only tolerate validation errors;
//! the visibility update also skips containers that do not exist. Anything
//! else stops the run.

pub mod containers;
pub mod deposit;
pub mod slug;
pub mod users;

use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

use crate::catalog::CatalogError;

pub use containers::{
    create_data_containers, plan_data_containers, plan_visibility_updates, read_rows,
    update_container_visibility,
};
pub use deposit::create_data_deposit;
pub use slug::slugify;
pub use users::create_user;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result of processing a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub action: &'static str,
    pub record: String,
    pub error: Option<String>,
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Totals for a finished job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl JobSummary {
    /// Count one catalog call, reporting it, or hand back a fatal error.
    ///
    /// `tolerated` decides which failures only skip the record.
    pub(crate) fn settle(
        &mut self,
        action: &'static str,
        record: &str,
        result: Result<Value, CatalogError>,
        tolerated: fn(&CatalogError) -> bool,
        report: &mut dyn FnMut(&RecordOutcome),
    ) -> Result<(), CatalogError> {
        let error = match result {
            Ok(_) => None,
            Err(e) if tolerated(&e) => {
                warn!("Failed to {} '{}': {}", action, record, e);
                Some(e.to_string())
            }
            Err(e) => return Err(e),
        };

        self.processed += 1;
        if error.is_some() {
            self.failed += 1;
        } else {
            self.succeeded += 1;
        }

        report(&RecordOutcome {
            action,
            record: record.to_string(),
            error,
        });

        Ok(())
    }
}
