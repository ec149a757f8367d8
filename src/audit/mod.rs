//! Audit logging
//!
//! Every account opened, transaction appended, and snapshot written is
//! recorded in an append-only JSONL file next to the settings.
//!
//! ```rust,ignore
//! use finance_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let record = account.add_transaction(input)?.clone();
//! logger.log(&AuditEntry::add_transaction(&account, &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
