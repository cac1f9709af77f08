//! Entity structs for backend records.
//!
//! Records are owned by the backend; the client only reads them and sends
//! back create bodies (`New*`) or sparse patches (see [`crate::updates`]).

mod academic_year;
mod announcement;
mod application;
mod calendar;
mod course;
mod faculty;
mod fee;
mod offering;
mod session;
mod student;

pub use academic_year::{AcademicYear, NewAcademicYear};
pub use announcement::{Announcement, NewAnnouncement};
pub use application::{ApplicationDecision, RegistrationApplication};
pub use calendar::{CalendarEntry, NewCalendarEntry};
pub use course::{Course, NewCourse};
pub use faculty::{Faculty, NewFaculty};
pub use fee::{FeeDecision, FeeSubmission, FeeTransaction};
pub use offering::{CourseOffering, SelectedCourse, StudentCourse};
pub use session::{Credentials, Session};
pub use student::{EditableFields, NewStudent, Student, StudentProfile};
