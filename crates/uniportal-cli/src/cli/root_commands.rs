use clap::Subcommand;

use crate::cli::subcommands::{
    AcademicYearCommands, AnnouncementCommands, ApplicationCommands, AuthCommands,
    CalendarCommands, CourseCommands, FacultyCommands, FeeCommands, RegisterCommands,
    StudentCommands,
};

/// Top-level command tree. Each command stands for one portal page.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, logout and session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Landing page for the logged-in role.
    Dashboard,
    /// Student records (admin).
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Faculty records (admin).
    Faculty {
        #[command(subcommand)]
        action: FacultyCommands,
    },
    /// Course catalog (admin).
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Academic years (admin).
    AcademicYear {
        #[command(subcommand)]
        action: AcademicYearCommands,
    },
    /// Announcements.
    Announcement {
        #[command(subcommand)]
        action: AnnouncementCommands,
    },
    /// Fee transaction approval (admin).
    Fee {
        #[command(subcommand)]
        action: FeeCommands,
    },
    /// Academic calendar.
    Calendar {
        #[command(subcommand)]
        action: CalendarCommands,
    },
    /// Registration applications (faculty).
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },
    /// Semester registration (student).
    Register {
        #[command(subcommand)]
        action: RegisterCommands,
    },
}
