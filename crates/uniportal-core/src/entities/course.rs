use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::require_fields;

/// Catalogue course, independent of any semester offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(alias = "courseId", alias = "id", deserialize_with = "lenient::id")]
    pub course_id: String,
    #[serde(default, alias = "courseCode", alias = "code")]
    pub course_code: String,
    #[serde(default, alias = "courseName", alias = "name", alias = "title")]
    pub course_name: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub credits: Option<i64>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of the add-course form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub course_code: String,
    pub course_name: String,
    pub credits: Option<u32>,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), CoreError> {
        let credits = self.credits.map(|c| c.to_string()).unwrap_or_default();
        require_fields(&[
            ("course_code", &self.course_code),
            ("course_name", &self.course_name),
            ("credits", &credits),
            ("department", &self.department),
        ])?;
        if self.credits == Some(0) {
            return Err(CoreError::invalid("credits", "must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_reads_short_aliases() {
        let course: Course =
            serde_json::from_str(r#"{"id": 5, "code": "CS301", "name": "Compilers", "credits": "4"}"#)
                .unwrap();
        assert_eq!(course.course_id, "5");
        assert_eq!(course.course_code, "CS301");
        assert_eq!(course.course_name, "Compilers");
        assert_eq!(course.credits, Some(4));
    }

    #[test]
    fn new_course_requires_credits() {
        let form = NewCourse {
            course_code: "CS301".into(),
            course_name: "Compilers".into(),
            department: "CSE".into(),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().to_string().contains("credits"));

        let zero = NewCourse {
            credits: Some(0),
            ..form
        };
        assert!(zero.validate().is_err());
    }
}
