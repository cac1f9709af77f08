use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::{date_range, require_fields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    #[serde(
        alias = "academicYearId",
        alias = "id",
        deserialize_with = "lenient::id"
    )]
    pub academic_year_id: String,
    #[serde(default, alias = "year", alias = "name")]
    pub label: String,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default, alias = "isCurrent", deserialize_with = "lenient::flag")]
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAcademicYear {
    pub label: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
}

impl NewAcademicYear {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("label", &self.label),
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
    fn year_reads_label_alias_and_flag() {
        let year: AcademicYear =
            serde_json::from_str(r#"{"id": 4, "year": "2026-27", "is_current": 1}"#).unwrap();
        assert_eq!(year.academic_year_id, "4");
        assert_eq!(year.label, "2026-27");
        assert!(year.is_current);
    }

    #[test]
    fn new_year_checks_date_order() {
        let form = NewAcademicYear {
            label: "2026-27".into(),
            start_date: "2027-06-01".into(),
            end_date: "2026-07-01".into(),
            is_current: false,
        };
        assert!(form.validate().is_err());
    }
}
