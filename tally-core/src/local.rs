//! In-process backend backed by a shared [`Ledger`].

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::{BackendError, Snapshot, TimeTrackingBackend};
use crate::ledger::Ledger;
use crate::models::{EntryId, NewTimeEntry, Project, ProjectId, ProjectSummary, TimeEntry};

#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    ledger: Arc<RwLock<Ledger>>,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }
}

#[async_trait]
impl TimeTrackingBackend for LocalBackend {
    async fn projects(&self) -> Result<Vec<Project>, BackendError> {
        Ok(self.ledger.read().await.projects().to_vec())
    }

    async fn time_entries(&self) -> Result<Vec<TimeEntry>, BackendError> {
        Ok(self.ledger.read().await.time_entries().to_vec())
    }

    async fn add_project(&self, name: &str) -> Result<Option<Project>, BackendError> {
        Ok(self.ledger.write().await.add_project(name))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool, BackendError> {
        Ok(self.ledger.write().await.delete_project(id))
    }

    async fn add_time_entry(&self, entry: NewTimeEntry) -> Result<TimeEntry, BackendError> {
        Ok(self.ledger.write().await.add_time_entry(entry))
    }

    async fn delete_time_entry(&self, id: EntryId) -> Result<bool, BackendError> {
        Ok(self.ledger.write().await.delete_time_entry(id))
    }

    async fn summary(&self) -> Result<Vec<ProjectSummary>, BackendError> {
        Ok(self.ledger.read().await.summary())
    }

    async fn snapshot(&self) -> Result<Snapshot, BackendError> {
        // One lock so the three views agree with each other.
        let ledger = self.ledger.read().await;
        Ok(Snapshot {
            projects: ledger.projects().to_vec(),
            time_entries: ledger.time_entries().to_vec(),
            summary: ledger.summary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_ledger;
    use time::macros::date;

    #[tokio::test]
    async fn seeded_backend_reports_demo_summary() {
        let backend = LocalBackend::with_ledger(demo_ledger());
        let summary = backend.summary().await.unwrap();

        assert_eq!(summary.len(), 4);
        assert_eq!(summary[0].name, "Project Bravo - Website Redesign");
        assert_eq!(summary[0].total_hours, 9.5);
    }

    #[tokio::test]
    async fn mutations_are_visible_in_the_next_snapshot() {
        let backend = LocalBackend::new();
        let project = backend.add_project("Ops").await.unwrap().unwrap();
        let entry = backend
            .add_time_entry(NewTimeEntry {
                project_id: project.id,
                task_description: "On call".to_string(),
                hours: 3.0,
                date: date!(2025 - 06 - 21),
            })
            .await
            .unwrap();

        let snapshot = backend.snapshot().await.unwrap();
        assert_eq!(snapshot.projects, vec![project.clone()]);
        assert_eq!(snapshot.time_entries, vec![entry.clone()]);
        assert_eq!(snapshot.summary[0].total_hours, 3.0);

        assert!(backend.delete_time_entry(entry.id).await.unwrap());
        assert!(backend.delete_project(project.id).await.unwrap());
        assert_eq!(backend.snapshot().await.unwrap(), Snapshot::default());
    }

    #[tokio::test]
    async fn clones_share_the_same_ledger() {
        let backend = LocalBackend::new();
        let other = backend.clone();
        other.add_project("Shared").await.unwrap();
        assert_eq!(backend.projects().await.unwrap().len(), 1);
    }
}
