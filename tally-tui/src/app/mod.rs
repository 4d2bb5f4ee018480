use crate::config::TallyConfig;
use tally_core::models::format_iso_date;
use tally_core::{Project, ProjectId, ProjectSummary, Snapshot, TimeEntry};
use time::Date;

mod forms;
mod navigation;
mod state;
pub use forms::{LogField, LogTimeForm, ProjectFocus, ProjectForm};
pub use state::{DeleteContext, DeleteTarget, TextInput, View};

pub const UNKNOWN_PROJECT: &str = "Unknown Project";

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Navigation menu (sidebar). Always drawn on wide terminals, drawn as an
    // overlay on narrow ones only while open. Keys go to it while open.
    pub menu_open: bool,
    pub menu_index: usize,

    // Last snapshot loaded from the backend
    pub projects: Vec<Project>,
    pub time_entries: Vec<TimeEntry>,
    pub summary: Vec<ProjectSummary>,

    // Dashboard
    pub recent_entries_limit: usize,
    pub focused_entry_index: Option<usize>,

    // Forms
    pub log_form: LogTimeForm,
    pub project_form: ProjectForm,

    pub delete_context: Option<DeleteContext>,
}

impl App {
    pub fn new(cfg: &TallyConfig, today: Date) -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            status_message: None,
            menu_open: false,
            menu_index: 0,
            projects: Vec::new(),
            time_entries: Vec::new(),
            summary: Vec::new(),
            recent_entries_limit: cfg.recent_entries_limit,
            focused_entry_index: None,
            log_form: LogTimeForm::new(today),
            project_form: ProjectForm::default(),
            delete_context: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Replace the cached data with a fresh snapshot from the backend and
    /// bring selections back in range.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.projects = snapshot.projects;
        self.time_entries = snapshot.time_entries;
        self.summary = snapshot.summary;

        self.log_form.sync_projects(&self.projects);
        self.project_form.clamp_selection(self.projects.len());
        let recent = self.recent_entries().len();
        self.focused_entry_index = self
            .focused_entry_index
            .filter(|_| recent > 0)
            .map(|idx| idx.min(recent - 1));
    }

    pub fn recent_entries(&self) -> &[TimeEntry] {
        let limit = self.recent_entries_limit.min(self.time_entries.len());
        &self.time_entries[..limit]
    }

    pub fn project_name(&self, id: ProjectId) -> &str {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PROJECT)
    }

    /// Largest project total, never below one hour so bars stay proportional
    /// to a sensible scale when little time is logged.
    pub fn max_total_hours(&self) -> f64 {
        self.summary
            .iter()
            .map(|row| row.total_hours)
            .fold(1.0_f64, f64::max)
    }

    /// Ask for confirmation before deleting the focused dashboard entry.
    pub fn request_delete_entry(&mut self) {
        let Some(entry) = self
            .focused_entry_index
            .and_then(|idx| self.recent_entries().get(idx))
        else {
            return;
        };
        let ctx = DeleteContext {
            target: DeleteTarget::Entry(entry.id),
            label: format!(
                "{} / {}",
                self.project_name(entry.project_id),
                entry.task_description
            ),
            detail: format!("{}  ·  {:.1}h", format_iso_date(entry.date), entry.hours),
            origin: View::Dashboard,
        };
        self.open_delete_confirm(ctx);
    }

    /// Ask for confirmation before deleting the selected project and its entries.
    pub fn request_delete_project(&mut self) {
        let Some(project) = self.projects.get(self.project_form.selected) else {
            return;
        };
        let entry_count = self
            .time_entries
            .iter()
            .filter(|e| e.project_id == project.id)
            .count();
        let ctx = DeleteContext {
            target: DeleteTarget::Project(project.id),
            label: project.name.clone(),
            detail: match entry_count {
                0 => "No time entries".to_string(),
                1 => "Also deletes 1 time entry".to_string(),
                n => format!("Also deletes {} time entries", n),
            },
            origin: View::Projects,
        };
        self.open_delete_confirm(ctx);
    }

    fn open_delete_confirm(&mut self, ctx: DeleteContext) {
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    /// Close the confirm dialog and return to the view it was opened from.
    pub fn close_delete_confirm(&mut self) -> Option<DeleteContext> {
        let ctx = self.delete_context.take();
        let origin = ctx.as_ref().map(|c| c.origin).unwrap_or(View::Dashboard);
        self.navigate_to(origin);
        ctx
    }
}
