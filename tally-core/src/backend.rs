use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EntryId, NewTimeEntry, Project, ProjectId, ProjectSummary, TimeEntry};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Everything a screen needs to render, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub time_entries: Vec<TimeEntry>,
    pub summary: Vec<ProjectSummary>,
}

/// Storage port for projects and time entries.
///
/// The UI only talks to this trait, so the in-memory [`LocalBackend`] can be
/// swapped for a remote one returning the same shapes.
///
/// [`LocalBackend`]: crate::local::LocalBackend
#[async_trait]
pub trait TimeTrackingBackend: Send + Sync + 'static {
    async fn projects(&self) -> Result<Vec<Project>, BackendError>;

    /// Time entries, newest first.
    async fn time_entries(&self) -> Result<Vec<TimeEntry>, BackendError>;

    /// Create a project. `Ok(None)` means the name was empty or taken.
    async fn add_project(&self, name: &str) -> Result<Option<Project>, BackendError>;

    /// Delete a project and its time entries. `Ok(false)` if it did not exist.
    async fn delete_project(&self, id: ProjectId) -> Result<bool, BackendError>;

    async fn add_time_entry(&self, entry: NewTimeEntry) -> Result<TimeEntry, BackendError>;

    async fn delete_time_entry(&self, id: EntryId) -> Result<bool, BackendError>;

    /// Total hours per project, largest first.
    async fn summary(&self) -> Result<Vec<ProjectSummary>, BackendError>;

    async fn snapshot(&self) -> Result<Snapshot, BackendError> {
        Ok(Snapshot {
            projects: self.projects().await?,
            time_entries: self.time_entries().await?,
            summary: self.summary().await?,
        })
    }
}
