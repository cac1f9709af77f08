pub mod academic_year;
pub mod announcement;
pub mod application;
pub mod auth;
pub mod calendar;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod faculty;
pub mod fee;
pub mod records;
pub mod register;
pub mod student;
