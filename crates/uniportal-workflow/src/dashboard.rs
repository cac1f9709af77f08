//! Landing pages, one per role.
//!
//! Each dashboard fans its reads out with `tokio::join!`. A failed count on
//! the admin dashboard is logged and shown as unknown instead of failing the
//! whole page.

use serde::Serialize;
use uniportal_client::ClientError;
use uniportal_core::entities::{
    Announcement, RegistrationApplication, StudentCourse, StudentProfile,
};
use uniportal_core::enums::{ApprovalStatus, EnrollmentStatus, Role};

use crate::announcements;
use crate::error::PortalError;
use crate::portal::Portal;

const RECENT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboard {
    pub students: Option<usize>,
    pub faculty: Option<usize>,
    pub courses: Option<usize>,
    pub pending_fees: Option<usize>,
}

fn count_or_log<T>(result: Result<Vec<T>, ClientError>, what: &str) -> Option<usize> {
    match result {
        Ok(items) => Some(items.len()),
        Err(e) => {
            tracing::warn!(what, %e, "dashboard count failed");
            None
        }
    }
}

pub async fn admin(portal: &Portal) -> Result<AdminDashboard, PortalError> {
    let session = portal.authorize(&[Role::Admin])?;
    let client = &portal.client;
    let (students, faculty, courses, fees) = tokio::join!(
        client.list_students(&session),
        client.list_faculty(&session),
        client.list_courses(&session),
        client.list_fee_transactions(&session, Some(ApprovalStatus::Pending)),
    );
    Ok(AdminDashboard {
        students: count_or_log(students, "students"),
        faculty: count_or_log(faculty, "faculty"),
        courses: count_or_log(courses, "courses"),
        pending_fees: count_or_log(fees, "pending fees"),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacultyDashboard {
    pub name: String,
    pub pending_applications: Vec<RegistrationApplication>,
    pub announcements: Vec<Announcement>,
}

pub async fn faculty(portal: &Portal) -> Result<FacultyDashboard, PortalError> {
    let session = portal.authorize(&[Role::Faculty])?;
    let (applications, recent) = tokio::join!(
        crate::applications::list(portal, Some(ApprovalStatus::Pending)),
        announcements::list(portal),
    );
    let mut recent = recent?;
    recent.truncate(RECENT);
    Ok(FacultyDashboard {
        name: session.name,
        pending_applications: applications?,
        announcements: recent,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDashboard {
    pub profile: StudentProfile,
    pub registered_courses: Vec<StudentCourse>,
    pub total_credits: i64,
    pub announcements: Vec<Announcement>,
}

pub async fn student(portal: &Portal) -> Result<StudentDashboard, PortalError> {
    let session = portal.authorize(&[Role::Student])?;
    let student_id = portal.student_id()?;
    let (profile, courses, recent) = tokio::join!(
        portal.client.student_profile(&session, &student_id),
        portal
            .client
            .student_courses(&session, &student_id, Some(EnrollmentStatus::Registered)),
        announcements::list(portal),
    );
    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => match portal.session.student_profile()? {
            Some(reviewed) => {
                tracing::warn!(%e, "profile unavailable, showing the copy from registration");
                reviewed
            }
            None => return Err(e.into()),
        },
    };
    let registered_courses = courses?;
    let mut recent = recent?;
    recent.truncate(RECENT);
    Ok(StudentDashboard {
        profile,
        total_credits: registered_courses.iter().map(|c| c.credits).sum(),
        registered_courses,
        announcements: recent,
    })
}
