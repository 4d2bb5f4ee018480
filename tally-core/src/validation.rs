//! Input checks performed by the forms before anything reaches the ledger.

use thiserror::Error;

use crate::models::{parse_iso_date, NewTimeEntry, Project, ProjectId};

pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

/// A form validation failure. The display text is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Hours must be a positive number, up to 24.")]
    HoursOutOfRange,
    #[error("Date must be in YYYY-MM-DD format.")]
    InvalidDate,
    #[error("Project name cannot be empty.")]
    EmptyProjectName,
    #[error("A project with this name already exists.")]
    DuplicateProjectName,
}

/// Raw contents of the log-time form.
#[derive(Debug, Clone, Copy)]
pub struct TimeLogInput<'a> {
    pub project_id: Option<ProjectId>,
    pub task_description: &'a str,
    pub hours: &'a str,
    pub date: &'a str,
}

impl TimeLogInput<'_> {
    pub fn validate(&self) -> Result<NewTimeEntry, ValidationError> {
        let task_description = self.task_description.trim();
        let hours = self.hours.trim();
        let date = self.date.trim();

        let Some(project_id) = self.project_id else {
            return Err(ValidationError::MissingFields);
        };
        if task_description.is_empty() || hours.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let hours = parse_hours(hours)?;
        let date = parse_iso_date(date).map_err(|_| ValidationError::InvalidDate)?;

        Ok(NewTimeEntry {
            project_id,
            task_description: task_description.to_string(),
            hours,
            date,
        })
    }
}

fn parse_hours(raw: &str) -> Result<f64, ValidationError> {
    let hours: f64 = raw.parse().map_err(|_| ValidationError::HoursOutOfRange)?;
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_HOURS_PER_ENTRY {
        return Err(ValidationError::HoursOutOfRange);
    }
    Ok(hours)
}

/// Check a new project name against the existing projects.
///
/// Returns the trimmed name to submit.
pub fn validate_project_name(input: &str, existing: &[Project]) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyProjectName);
    }
    if existing.iter().any(|p| same_project_name(&p.name, name)) {
        return Err(ValidationError::DuplicateProjectName);
    }
    Ok(name.to_string())
}

/// Project names are compared trimmed and case-insensitively.
pub fn same_project_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn input<'a>(hours: &'a str) -> TimeLogInput<'a> {
        TimeLogInput {
            project_id: Some(ProjectId::new(1)),
            task_description: "Write docs",
            hours,
            date: "2025-06-20",
        }
    }

    fn projects() -> Vec<Project> {
        vec![Project {
            id: ProjectId::new(1),
            name: "alpha".to_string(),
        }]
    }

    #[test]
    fn valid_input_becomes_new_entry() {
        let entry = input("2.5").validate().unwrap();
        assert_eq!(entry.project_id, ProjectId::new(1));
        assert_eq!(entry.task_description, "Write docs");
        assert_eq!(entry.hours, 2.5);
        assert_eq!(entry.date, date!(2025 - 06 - 20));
    }

    #[test]
    fn zero_hours_is_rejected() {
        assert_eq!(
            input("0").validate().unwrap_err(),
            ValidationError::HoursOutOfRange
        );
    }

    #[test]
    fn more_than_a_day_is_rejected() {
        assert_eq!(
            input("25").validate().unwrap_err(),
            ValidationError::HoursOutOfRange
        );
        assert!(input("24").validate().is_ok());
    }

    #[test]
    fn non_numeric_hours_are_rejected() {
        for raw in ["abc", "NaN", "inf", "-1"] {
            assert_eq!(
                input(raw).validate().unwrap_err(),
                ValidationError::HoursOutOfRange,
                "{raw}"
            );
        }
    }

    #[test]
    fn missing_fields_are_reported_first() {
        let mut missing_project = input("2");
        missing_project.project_id = None;
        assert_eq!(
            missing_project.validate().unwrap_err(),
            ValidationError::MissingFields
        );

        let mut blank_description = input("0");
        blank_description.task_description = "   ";
        assert_eq!(
            blank_description.validate().unwrap_err(),
            ValidationError::MissingFields
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut bad_date = input("1");
        bad_date.date = "June 20";
        assert_eq!(bad_date.validate().unwrap_err(), ValidationError::InvalidDate);
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            ValidationError::HoursOutOfRange.to_string(),
            "Hours must be a positive number, up to 24."
        );
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required."
        );
    }

    #[test]
    fn project_name_is_trimmed() {
        assert_eq!(
            validate_project_name("  Bravo  ", &projects()).unwrap(),
            "Bravo"
        );
    }

    #[test]
    fn blank_project_name_is_rejected() {
        assert_eq!(
            validate_project_name("   ", &projects()).unwrap_err(),
            ValidationError::EmptyProjectName
        );
    }

    #[test]
    fn duplicate_check_ignores_case() {
        assert_eq!(
            validate_project_name("Alpha", &projects()).unwrap_err(),
            ValidationError::DuplicateProjectName
        );
    }
}
