//! Student profile and semester registration routes.
//!
//! The offering list and course selection authorize on `Role` and
//! `StudentId` headers instead of the bearer token. Mutating registration
//! calls accept an idempotency key so a retried draft is not applied twice.

use serde::Serialize;
use uniportal_core::entities::{
    AcademicYear, CourseOffering, EditableFields, FeeSubmission, Session, StudentCourse,
    StudentProfile,
};
use uniportal_core::enums::EnrollmentStatus;

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient, seg};

/// Body of `POST /api/student/select-course`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSelection {
    pub student_id: String,
    pub offering_id: String,
    pub course_id: String,
}

/// Body of `POST /api/student/semester-registration`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterRegistration {
    pub student_id: String,
    pub academic_year_id: String,
    pub course_ids: Vec<String>,
    pub cpi: f64,
}

impl PortalClient {
    pub async fn student_profile(
        &self,
        session: &Session,
        student_id: &str,
    ) -> Result<StudentProfile, ClientError> {
        let path = format!("/api/student/{}", seg(student_id));
        self.fetch(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn editable_fields(
        &self,
        session: &Session,
        student_id: &str,
    ) -> Result<EditableFields, ClientError> {
        let path = format!("/api/student/registration/editable/{}", seg(student_id));
        self.fetch(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn update_editable_fields(
        &self,
        session: &Session,
        student_id: &str,
        fields: &EditableFields,
    ) -> Result<Ack, ClientError> {
        let path = format!("/api/student/registration/editable/{}", seg(student_id));
        self.mutate(Call::put(path, AuthScheme::Bearer).by(session), Some(fields))
            .await
    }

    /// Courses on the student's record, optionally narrowed by status.
    pub async fn student_courses(
        &self,
        session: &Session,
        student_id: &str,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<StudentCourse>, ClientError> {
        let mut path = format!("/api/student/courses/{}", seg(student_id));
        if let Some(status) = status {
            path.push_str("?status=");
            path.push_str(&seg(status.as_str()));
        }
        self.fetch_list(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn course_offerings(
        &self,
        session: &Session,
        student_id: &str,
    ) -> Result<Vec<CourseOffering>, ClientError> {
        let call = Call::get("/api/student/registration/offerings", AuthScheme::RoleAndStudent)
            .by(session)
            .student(student_id);
        self.fetch_list(call).await
    }

    pub async fn current_academic_year(
        &self,
        session: &Session,
    ) -> Result<AcademicYear, ClientError> {
        let call = Call::get("/api/student/registration/academic-year", AuthScheme::Bearer)
            .by(session);
        self.fetch(call).await
    }

    pub async fn select_course(
        &self,
        session: &Session,
        selection: &CourseSelection,
        idempotency_key: Option<&str>,
    ) -> Result<Ack, ClientError> {
        let call = Call::post("/api/student/select-course", AuthScheme::RoleAndStudent)
            .by(session)
            .student(&selection.student_id)
            .idempotent(idempotency_key);
        self.mutate(call, Some(selection)).await
    }

    /// `POST /api/student/submit-fee`.
    ///
    /// The acknowledgement is returned unjudged: the finalize step proceeds
    /// only on an explicit `success: true`, see [`Ack::ensure_confirmed`].
    pub async fn submit_fee(
        &self,
        session: &Session,
        submission: &FeeSubmission,
        idempotency_key: Option<&str>,
    ) -> Result<Ack, ClientError> {
        let call = Call::post("/api/student/submit-fee", AuthScheme::Bearer)
            .by(session)
            .idempotent(idempotency_key);
        self.send(call, Some(submission)).await
    }

    pub async fn register_semester(
        &self,
        session: &Session,
        registration: &SemesterRegistration,
        idempotency_key: Option<&str>,
    ) -> Result<Ack, ClientError> {
        let call = Call::post("/api/student/semester-registration", AuthScheme::Bearer)
            .by(session)
            .idempotent(idempotency_key);
        self.mutate(call, Some(registration)).await
    }
}
