use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::{date_range, require_fields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(alias = "entryId", alias = "id", deserialize_with = "lenient::id")]
    pub entry_id: String,
    #[serde(
        default,
        alias = "academicYearId",
        deserialize_with = "lenient::opt_id"
    )]
    pub academic_year_id: Option<String>,
    #[serde(default, alias = "event_name", alias = "name")]
    pub title: String,
    #[serde(default, alias = "eventType", alias = "type")]
    pub event_type: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCalendarEntry {
    pub academic_year_id: String,
    pub title: String,
    pub event_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCalendarEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("academic_year_id", &self.academic_year_id),
            ("title", &self.title),
            ("event_type", &self.event_type),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ])?;
        date_range(&self.start_date, &self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_reads_event_name_alias() {
        let entry: CalendarEntry = serde_json::from_str(
            r#"{"id": 3, "academicYearId": 4, "event_name": "Mid-sem", "startDate": "2026-09-14"}"#,
        )
        .unwrap();
        assert_eq!(entry.entry_id, "3");
        assert_eq!(entry.title, "Mid-sem");
        assert_eq!(entry.academic_year_id.as_deref(), Some("4"));
    }

    #[test]
    fn new_entry_validates_dates() {
        let mut entry = NewCalendarEntry {
            academic_year_id: "4".into(),
            title: "Mid-sem".into(),
            event_type: "exam".into(),
            start_date: "2026-09-14".into(),
            end_date: "2026-09-20".into(),
            description: None,
        };
        assert!(entry.validate().is_ok());
        entry.end_date = "2026-09-01".into();
        assert!(entry.validate().is_err());
    }
}
