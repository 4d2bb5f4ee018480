//! Projects, time entries and per-project hour totals.

pub mod backend;
pub mod id;
pub mod ledger;
pub mod local;
pub mod models;
pub mod seed;
pub mod validation;

pub use backend::{BackendError, Snapshot, TimeTrackingBackend};
pub use ledger::Ledger;
pub use local::LocalBackend;
pub use models::{EntryId, NewTimeEntry, Project, ProjectId, ProjectSummary, TimeEntry};
pub use validation::{TimeLogInput, ValidationError};
