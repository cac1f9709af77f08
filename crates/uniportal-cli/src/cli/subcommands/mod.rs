mod academic_year;
mod announcement;
mod application;
mod auth;
mod calendar;
mod fee;
mod records;
mod register;

pub use academic_year::AcademicYearCommands;
pub use announcement::AnnouncementCommands;
pub use application::ApplicationCommands;
pub use auth::{AuthCommands, AuthLoginArgs};
pub use calendar::{CalendarArgs, CalendarCommands};
pub use fee::FeeCommands;
pub use records::{
    CourseArgs, CourseCommands, EditArgs, FacultyArgs, FacultyCommands, RemoveArgs, StudentArgs,
    StudentCommands,
};
pub use register::{FeeFormArgs, FinalizeArgs, ProfileArgs, RegisterCommands};
