use serde::{Deserialize, Serialize};

use crate::enums::EnrollmentStatus;
use crate::lenient;

/// A course scheduled for a semester, with seat capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OfferingRow")]
pub struct CourseOffering {
    pub offering_id: String,
    pub course_id: String,
    pub course_code: String,
    pub course_name: String,
    pub credits: i64,
    pub faculty_name: Option<String>,
    pub max_seats: i64,
    pub available_seats: i64,
    pub already_registered: bool,
}

/// Wire shape of an offering row.
///
/// Joined rows may carry a bare `id` next to `offering_id`; `id` is only
/// used when `offering_id` is absent.
#[derive(Deserialize)]
struct OfferingRow {
    #[serde(default, alias = "offeringId", deserialize_with = "lenient::opt_id")]
    offering_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    id: Option<String>,
    #[serde(alias = "courseId", deserialize_with = "lenient::id")]
    course_id: String,
    #[serde(default, alias = "courseCode")]
    course_code: String,
    #[serde(default, alias = "courseName")]
    course_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    credits: i64,
    #[serde(default, alias = "facultyName")]
    faculty_name: Option<String>,
    #[serde(default, alias = "maxSeats", deserialize_with = "lenient::count")]
    max_seats: i64,
    #[serde(
        default,
        alias = "availableSeats",
        deserialize_with = "lenient::count"
    )]
    available_seats: i64,
    #[serde(
        default,
        alias = "alreadyRegistered",
        alias = "is_registered",
        deserialize_with = "lenient::flag"
    )]
    already_registered: bool,
}

impl TryFrom<OfferingRow> for CourseOffering {
    type Error = String;

    fn try_from(row: OfferingRow) -> Result<Self, Self::Error> {
        let offering_id = row
            .offering_id
            .or(row.id)
            .ok_or_else(|| "missing field `offering_id`".to_string())?;
        Ok(Self {
            offering_id,
            course_id: row.course_id,
            course_code: row.course_code,
            course_name: row.course_name,
            credits: row.credits,
            faculty_name: row.faculty_name,
            max_seats: row.max_seats,
            available_seats: row.available_seats,
            already_registered: row.already_registered,
        })
    }
}

impl CourseOffering {
    /// Whether the selection checkbox for this offering can be toggled.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.already_registered && self.available_seats > 0
    }
}

/// An offering the student ticked on the course-selection step.
///
/// Carries enough of the offering to render the finalize step without
/// fetching it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCourse {
    #[serde(deserialize_with = "lenient::id")]
    pub offering_id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub course_id: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub credits: i64,
    #[serde(default)]
    pub faculty_name: Option<String>,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

impl From<&CourseOffering> for SelectedCourse {
    fn from(offering: &CourseOffering) -> Self {
        Self {
            offering_id: offering.offering_id.clone(),
            course_id: offering.course_id.clone(),
            course_code: offering.course_code.clone(),
            course_name: offering.course_name.clone(),
            credits: offering.credits,
            faculty_name: offering.faculty_name.clone(),
            status: EnrollmentStatus::Pending,
        }
    }
}

/// A course on a student's record, from the student-courses listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentCourseRow")]
pub struct StudentCourse {
    pub offering_id: Option<String>,
    pub course_id: String,
    pub course_code: String,
    pub course_name: String,
    pub credits: i64,
    pub faculty_name: Option<String>,
    pub status: EnrollmentStatus,
}

/// Wire shape of a student-course row; `id` backs up a missing `course_id`.
#[derive(Deserialize)]
struct StudentCourseRow {
    #[serde(default, alias = "offeringId", deserialize_with = "lenient::opt_id")]
    offering_id: Option<String>,
    #[serde(default, alias = "courseId", deserialize_with = "lenient::opt_id")]
    course_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    id: Option<String>,
    #[serde(default, alias = "courseCode")]
    course_code: String,
    #[serde(default, alias = "courseName")]
    course_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    credits: i64,
    #[serde(default, alias = "facultyName")]
    faculty_name: Option<String>,
    #[serde(default)]
    status: EnrollmentStatus,
}

impl TryFrom<StudentCourseRow> for StudentCourse {
    type Error = String;

    fn try_from(row: StudentCourseRow) -> Result<Self, Self::Error> {
        let course_id = row
            .course_id
            .or(row.id)
            .ok_or_else(|| "missing field `course_id`".to_string())?;
        Ok(Self {
            offering_id: row.offering_id,
            course_id,
            course_code: row.course_code,
            course_name: row.course_name,
            credits: row.credits,
            faculty_name: row.faculty_name,
            status: row.status,
        })
    }
}

impl From<StudentCourse> for SelectedCourse {
    fn from(course: StudentCourse) -> Self {
        Self {
            offering_id: course
                .offering_id
                .unwrap_or_else(|| course.course_id.clone()),
            course_id: course.course_id,
            course_code: course.course_code,
            course_name: course.course_name,
            credits: course.credits,
            faculty_name: course.faculty_name,
            status: course.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(seats: i64, registered: bool) -> CourseOffering {
        CourseOffering {
            offering_id: "O1".into(),
            course_id: "C1".into(),
            course_code: "CS101".into(),
            course_name: "Programming".into(),
            credits: 4,
            faculty_name: Some("Dr. Meera".into()),
            max_seats: 60,
            available_seats: seats,
            already_registered: registered,
        }
    }

    #[test]
    fn full_or_registered_offerings_are_not_selectable() {
        assert!(offering(3, false).is_selectable());
        assert!(!offering(0, false).is_selectable());
        assert!(!offering(5, true).is_selectable());
    }

    #[test]
    fn selected_course_starts_pending() {
        let selected = SelectedCourse::from(&offering(3, false));
        assert_eq!(selected.status, EnrollmentStatus::Pending);
        assert_eq!(selected.course_code, "CS101");
        assert_eq!(selected.credits, 4);
    }

    #[test]
    fn offering_reads_camel_case_and_numeric_flags() {
        let json = r#"{
            "offeringId": 11, "courseId": 3, "courseCode": "MA201",
            "courseName": "Linear Algebra", "credits": 3,
            "facultyName": "Dr. Iyer", "maxSeats": 40,
            "availableSeats": "0", "alreadyRegistered": 0
        }"#;
        let parsed: CourseOffering = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.offering_id, "11");
        assert_eq!(parsed.available_seats, 0);
        assert!(!parsed.already_registered);
        assert!(!parsed.is_selectable());
    }

    #[test]
    fn student_course_without_offering_uses_course_id() {
        let json = r#"{"courseId": 5, "courseCode": "PH110", "status": "Registered"}"#;
        let course: StudentCourse = serde_json::from_str(json).unwrap();
        let selected = SelectedCourse::from(course);
        assert_eq!(selected.offering_id, "5");
        assert_eq!(selected.status, EnrollmentStatus::Registered);
    }

    #[test]
    fn joined_rows_prefer_their_own_ids_over_id() {
        let course: StudentCourse = serde_json::from_str(
            r#"{"id": 55, "course_id": 2, "course_code": "CS101", "status": "Registered"}"#,
        )
        .unwrap();
        assert_eq!(course.course_id, "2");

        let offering: CourseOffering = serde_json::from_str(
            r#"{"id": 90, "offering_id": 7, "course_id": 2, "available_seats": null}"#,
        )
        .unwrap();
        assert_eq!(offering.offering_id, "7");
        assert_eq!(offering.available_seats, 0);
    }

    #[test]
    fn bare_id_fills_in_when_own_id_is_missing() {
        let course: StudentCourse =
            serde_json::from_str(r#"{"id": 55, "status": "Registered"}"#).unwrap();
        assert_eq!(course.course_id, "55");

        let offering: CourseOffering =
            serde_json::from_str(r#"{"id": 90, "course_id": 2}"#).unwrap();
        assert_eq!(offering.offering_id, "90");

        let missing: Result<StudentCourse, _> = serde_json::from_str(r#"{"course_code": "X"}"#);
        assert!(missing.is_err());
    }
}
