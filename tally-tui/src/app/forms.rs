use tally_core::models::format_iso_date;
use tally_core::validation::validate_project_name;
use tally_core::{NewTimeEntry, Project, ProjectId, TimeLogInput};
use time::Date;

use super::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    Project,
    Description,
    Hours,
    Date,
}

impl LogField {
    pub fn next(self) -> Self {
        match self {
            LogField::Project => LogField::Description,
            LogField::Description => LogField::Hours,
            LogField::Hours => LogField::Date,
            LogField::Date => LogField::Project,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LogField::Project => LogField::Date,
            LogField::Description => LogField::Project,
            LogField::Hours => LogField::Description,
            LogField::Date => LogField::Hours,
        }
    }
}

/// State of the "Log Time" screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LogTimeForm {
    pub project_id: Option<ProjectId>,
    pub description: TextInput,
    pub hours: TextInput,
    pub date: TextInput,
    pub focused: LogField,
    pub error: Option<String>,
}

impl LogTimeForm {
    pub fn new(today: Date) -> Self {
        Self {
            project_id: None,
            description: TextInput::new(),
            hours: TextInput::new(),
            date: TextInput::with_value(&format_iso_date(today)),
            focused: LogField::Project,
            error: None,
        }
    }

    /// Keep the project selection pointing at a project that still exists.
    pub fn sync_projects(&mut self, projects: &[Project]) {
        let still_exists = self
            .project_id
            .is_some_and(|id| projects.iter().any(|p| p.id == id));
        if !still_exists {
            self.project_id = projects.first().map(|p| p.id);
        }
    }

    pub fn cycle_project(&mut self, projects: &[Project], forward: bool) {
        if projects.is_empty() {
            self.project_id = None;
            return;
        }
        let len = projects.len();
        let current = self
            .project_id
            .and_then(|id| projects.iter().position(|p| p.id == id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        self.project_id = Some(projects[next].id);
    }

    /// The text input behind the focused field, if it is a text field.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            LogField::Project => None,
            LogField::Description => Some(&mut self.description),
            LogField::Hours => Some(&mut self.hours),
            LogField::Date => Some(&mut self.date),
        }
    }

    /// Validate the form into an entry ready for the backend. Inputs are left
    /// untouched until the backend accepts it.
    pub fn submit(&mut self) -> Option<NewTimeEntry> {
        let input = TimeLogInput {
            project_id: self.project_id,
            task_description: &self.description.value,
            hours: &self.hours.value,
            date: &self.date.value,
        };
        match input.validate() {
            Ok(entry) => {
                self.error = None;
                Some(entry)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Reset after a logged entry; project and date stay for the next one.
    pub fn clear_logged(&mut self) {
        self.description.clear();
        self.hours.clear();
        self.error = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFocus {
    Input,
    List,
}

/// State of the "Manage Projects" screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: TextInput,
    pub focus: ProjectFocus,
    pub selected: usize,
    pub error: Option<String>,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: TextInput::new(),
            focus: ProjectFocus::Input,
            selected: 0,
            error: None,
        }
    }
}

impl ProjectForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ProjectFocus::Input => ProjectFocus::List,
            ProjectFocus::List => ProjectFocus::Input,
        };
    }

    pub fn clamp_selection(&mut self, project_count: usize) {
        self.selected = self.selected.min(project_count.saturating_sub(1));
    }

    /// Validate the typed name and return it trimmed for submission.
    pub fn submit(&mut self, projects: &[Project]) -> Option<String> {
        match validate_project_name(&self.name.value, projects) {
            Ok(name) => {
                self.error = None;
                Some(name)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn clear_name(&mut self) {
        self.name.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn projects() -> Vec<Project> {
        vec![
            Project {
                id: ProjectId::new(1),
                name: "alpha".to_string(),
            },
            Project {
                id: ProjectId::new(2),
                name: "Bravo".to_string(),
            },
        ]
    }

    fn filled_form(hours: &str) -> LogTimeForm {
        let mut form = LogTimeForm::new(date!(2025 - 06 - 20));
        form.sync_projects(&projects());
        form.cycle_project(&projects(), true);
        form.description = TextInput::with_value("Code review");
        form.hours = TextInput::with_value(hours);
        form
    }

    #[test]
    fn new_form_defaults_to_today_and_first_project() {
        let mut form = LogTimeForm::new(date!(2025 - 06 - 20));
        assert_eq!(form.date.value, "2025-06-20");
        form.sync_projects(&projects());
        assert_eq!(form.project_id, Some(ProjectId::new(1)));
    }

    #[test]
    fn submit_leaves_inputs_for_the_backend_round_trip() {
        let mut form = filled_form("1.5");
        let entry = form.submit().unwrap();

        assert_eq!(entry.project_id, ProjectId::new(2));
        assert_eq!(entry.hours, 1.5);
        assert_eq!(form.description.value, "Code review");
        assert_eq!(form.hours.value, "1.5");
    }

    #[test]
    fn clearing_a_logged_entry_keeps_project_and_date() {
        let mut form = filled_form("1.5");
        form.clear_logged();

        assert!(form.description.value.is_empty());
        assert!(form.hours.value.is_empty());
        assert_eq!(form.project_id, Some(ProjectId::new(2)));
        assert_eq!(form.date.value, "2025-06-20");
        assert!(form.error.is_none());
    }

    #[test]
    fn rejected_submit_keeps_input_and_shows_message() {
        for hours in ["0", "25"] {
            let mut form = filled_form(hours);
            assert!(form.submit().is_none());
            assert_eq!(
                form.error.as_deref(),
                Some("Hours must be a positive number, up to 24.")
            );
            assert_eq!(form.description.value, "Code review");
        }
    }

    #[test]
    fn submit_without_projects_asks_for_all_fields() {
        let mut form = filled_form("2");
        form.sync_projects(&[]);
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("All fields are required."));
    }

    #[test]
    fn deleted_project_selection_falls_back_to_first() {
        let mut form = filled_form("2");
        let remaining = vec![projects().remove(0)];
        form.sync_projects(&remaining);
        assert_eq!(form.project_id, Some(ProjectId::new(1)));
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut form = LogTimeForm::new(date!(2025 - 06 - 20));
        form.sync_projects(&projects());
        form.cycle_project(&projects(), false);
        assert_eq!(form.project_id, Some(ProjectId::new(2)));
        form.cycle_project(&projects(), true);
        assert_eq!(form.project_id, Some(ProjectId::new(1)));
    }

    #[test]
    fn project_form_rejects_case_insensitive_duplicates() {
        let mut form = ProjectForm {
            name: TextInput::with_value("Alpha"),
            ..ProjectForm::default()
        };
        assert!(form.submit(&projects()).is_none());
        assert_eq!(
            form.error.as_deref(),
            Some("A project with this name already exists.")
        );
        assert_eq!(form.name.value, "Alpha");
    }

    #[test]
    fn project_form_keeps_name_until_cleared() {
        let mut form = ProjectForm {
            name: TextInput::with_value("  Charlie "),
            ..ProjectForm::default()
        };
        assert_eq!(form.submit(&projects()).as_deref(), Some("Charlie"));
        assert_eq!(form.name.value, "  Charlie ");

        form.clear_name();
        assert!(form.name.value.is_empty());
    }

    #[test]
    fn selection_is_clamped_to_the_list() {
        let mut form = ProjectForm {
            selected: 5,
            ..ProjectForm::default()
        };
        form.clamp_selection(2);
        assert_eq!(form.selected, 1);
        form.clamp_selection(0);
        assert_eq!(form.selected, 0);
    }
}
