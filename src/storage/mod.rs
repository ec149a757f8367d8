//! Storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic, write_text_atomic};
pub use ledger::LedgerRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Ties the ledger file and the audit log to one set of paths
pub struct Storage {
    paths: TrackerPaths,
    pub ledger: LedgerRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create storage rooted at `paths`, creating directories as needed
    pub fn new(paths: TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn load_all(&mut self) -> TrackerResult<()> {
        self.ledger.load()
    }

    pub fn save_all(&self) -> TrackerResult<()> {
        self.ledger.save()
    }

    /// Record an audit entry
    ///
    /// A failing audit log is reported as a warning; the ledger itself has
    /// already been updated and saved by then.
    pub fn audit(&self, entry: &AuditEntry) {
        if let Err(e) = self.audit.log(entry) {
            tracing::warn!(error = %e, "failed to write audit entry");
        }
    }
}
