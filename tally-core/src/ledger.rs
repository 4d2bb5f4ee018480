use tracing::debug;

use crate::id::IdMinter;
use crate::models::{
    format_iso_date, EntryId, NewTimeEntry, Project, ProjectId, ProjectSummary, TimeEntry,
};
use crate::validation::same_project_name;

/// In-memory store of projects and time entries.
///
/// Projects keep insertion order. Time entries are kept newest first: new
/// entries are prepended and the list is never re-sorted. None of the
/// operations fail; invalid input is silently ignored and deleting a
/// missing id is a no-op.
#[derive(Debug, Default)]
pub struct Ledger {
    projects: Vec<Project>,
    entries: Vec<TimeEntry>,
    minter: IdMinter,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing data, keeping the given ids.
    pub fn with_data(projects: Vec<Project>, entries: Vec<TimeEntry>) -> Self {
        let mut minter = IdMinter::new();
        for project in &projects {
            minter.reserve(project.id.as_u64());
        }
        for entry in &entries {
            minter.reserve(entry.id.as_u64());
        }
        Self {
            projects,
            entries,
            minter,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn time_entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Add a project, ignoring empty names and names already in use.
    pub fn add_project(&mut self, name: &str) -> Option<Project> {
        let name = name.trim();
        if name.is_empty() || self.projects.iter().any(|p| same_project_name(&p.name, name)) {
            debug!(name, "project rejected");
            return None;
        }

        let id = ProjectId::new(self.minter.mint(name));
        let project = Project {
            id,
            name: name.to_string(),
        };
        self.projects.push(project.clone());
        debug!(%id, name, "project added");
        Some(project)
    }

    /// Delete a project together with every time entry logged against it.
    ///
    /// Returns `false` if no project had that id.
    pub fn delete_project(&mut self, id: ProjectId) -> bool {
        let entries_before = self.entries.len();
        self.entries.retain(|entry| entry.project_id != id);
        let removed_entries = entries_before - self.entries.len();

        let projects_before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = self.projects.len() != projects_before;

        debug!(%id, removed, removed_entries, "project deleted");
        removed
    }

    /// Store a new entry at the front of the list.
    ///
    /// The entry is not validated here.
    pub fn add_time_entry(&mut self, entry: NewTimeEntry) -> TimeEntry {
        let seed_text = format!("{}{}", entry.task_description, format_iso_date(entry.date));
        let id = EntryId::new(self.minter.mint(&seed_text));
        let entry = entry.into_entry(id);
        self.entries.insert(0, entry.clone());
        debug!(%id, project_id = %entry.project_id, hours = entry.hours, "time entry added");
        entry
    }

    pub fn delete_time_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Total hours per project, largest first.
    ///
    /// Projects with equal totals keep their list order. Entries pointing at
    /// a project that no longer exists are not counted anywhere.
    pub fn summary(&self) -> Vec<ProjectSummary> {
        let mut summary: Vec<ProjectSummary> = self
            .projects
            .iter()
            .map(|p| ProjectSummary {
                id: p.id,
                name: p.name.clone(),
                total_hours: 0.0,
            })
            .collect();

        for entry in &self.entries {
            if let Some(row) = summary.iter_mut().find(|row| row.id == entry.project_id) {
                row.total_hours += entry.hours;
            }
        }

        summary.sort_by(|a, b| b.total_hours.total_cmp(&a.total_hours));
        summary
    }
}
