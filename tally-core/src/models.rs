use serde::{Deserialize, Serialize};
use std::fmt;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// A project identifier.
///
/// Minted ids are cyrb53 hashes, so they always fit in 53 bits and survive a
/// round trip through a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A time entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// Hours worked on a task for a project on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: EntryId,
    pub project_id: ProjectId,
    pub task_description: String,
    pub hours: f64,
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// A time entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub project_id: ProjectId,
    pub task_description: String,
    pub hours: f64,
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl NewTimeEntry {
    pub(crate) fn into_entry(self, id: EntryId) -> TimeEntry {
        TimeEntry {
            id,
            project_id: self.project_id,
            task_description: self.task_description,
            hours: self.hours,
            date: self.date,
        }
    }
}

/// Total hours logged against one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub total_hours: f64,
}

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), ISO_DATE)
}

pub fn format_iso_date(date: Date) -> String {
    // Year, month and day are all present, so this never falls back.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = date
            .format(super::ISO_DATE)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&raw)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn time_entry_uses_camel_case_shape() {
        let entry = TimeEntry {
            id: EntryId::new(101),
            project_id: ProjectId::new(2),
            task_description: "Initial design mockups".to_string(),
            hours: 4.5,
            date: date!(2025 - 06 - 20),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": 101,
                "projectId": 2,
                "taskDescription": "Initial design mockups",
                "hours": 4.5,
                "date": "2025-06-20"
            })
        );
    }

    #[test]
    fn summary_serializes_total_hours() {
        let summary = ProjectSummary {
            id: ProjectId::new(1),
            name: "Internal - R&D".to_string(),
            total_hours: 2.0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["totalHours"], json!(2.0));
    }

    #[test]
    fn new_entry_rejects_malformed_dates() {
        let raw = json!({
            "projectId": 1,
            "taskDescription": "x",
            "hours": 1.0,
            "date": "20/06/2025"
        });
        assert!(serde_json::from_value::<NewTimeEntry>(raw).is_err());
    }

    #[test]
    fn iso_dates_are_zero_padded() {
        assert_eq!(format_iso_date(date!(2025 - 01 - 05)), "2025-01-05");
        assert_eq!(parse_iso_date(" 2025-01-05 ").unwrap(), date!(2025 - 01 - 05));
        assert!(parse_iso_date("2025-02-30").is_err());
    }
}
