//! Demo data loaded at startup unless disabled in the config.

use time::macros::date;
use time::Date;

use crate::ledger::Ledger;
use crate::models::{EntryId, Project, ProjectId, TimeEntry};

pub fn demo_projects() -> Vec<Project> {
    [
        (1, "Project Alpha - Mobile App"),
        (2, "Project Bravo - Website Redesign"),
        (3, "Internal - R&D"),
        (4, "Client X - Marketing Campaign"),
    ]
    .into_iter()
    .map(|(id, name)| Project {
        id: ProjectId::new(id),
        name: name.to_string(),
    })
    .collect()
}

pub fn demo_time_entries() -> Vec<TimeEntry> {
    let entry = |id: u64, project_id: u64, task: &str, hours: f64, date: Date| TimeEntry {
        id: EntryId::new(id),
        project_id: ProjectId::new(project_id),
        task_description: task.to_string(),
        hours,
        date,
    };

    vec![
        entry(101, 2, "Initial design mockups", 4.5, date!(2025 - 06 - 20)),
        entry(102, 1, "Setup development environment", 3.0, date!(2025 - 06 - 19)),
        entry(103, 3, "Research new charting libraries", 2.0, date!(2025 - 06 - 19)),
        entry(104, 2, "Wireframing user flows", 5.0, date!(2025 - 06 - 18)),
        entry(105, 4, "Analyze competitor ads", 2.5, date!(2025 - 06 - 20)),
    ]
}

pub fn demo_ledger() -> Ledger {
    Ledger::with_data(demo_projects(), demo_time_entries())
}
