//! Admin record management: students, faculty, courses, academic years.
//!
//! All routes take a bearer token and a `Role` header.

use uniportal_core::entities::{
    AcademicYear, Course, Faculty, NewAcademicYear, NewCourse, NewFaculty, NewStudent, Session,
    Student,
};
use uniportal_core::updates::{CourseUpdate, FacultyUpdate, StudentUpdate};

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient, seg};

const SCHEME: AuthScheme = AuthScheme::BearerAndRole;

impl PortalClient {
    pub async fn list_students(&self, session: &Session) -> Result<Vec<Student>, ClientError> {
        self.fetch_list(Call::get("/api/admin/students", SCHEME).by(session))
            .await
    }

    pub async fn get_student(&self, session: &Session, id: &str) -> Result<Student, ClientError> {
        self.fetch(Call::get(format!("/api/admin/students/{}", seg(id)), SCHEME).by(session))
            .await
    }

    pub async fn create_student(
        &self,
        session: &Session,
        student: &NewStudent,
    ) -> Result<Ack, ClientError> {
        self.mutate(Call::post("/api/admin/students", SCHEME).by(session), Some(student))
            .await
    }

    pub async fn update_student(
        &self,
        session: &Session,
        id: &str,
        update: &StudentUpdate,
    ) -> Result<Ack, ClientError> {
        let call = Call::put(format!("/api/admin/students/{}", seg(id)), SCHEME).by(session);
        self.mutate(call, Some(update)).await
    }

    pub async fn delete_student(&self, session: &Session, id: &str) -> Result<Ack, ClientError> {
        let call = Call::delete(format!("/api/admin/students/{}", seg(id)), SCHEME).by(session);
        self.mutate::<()>(call, None).await
    }

    pub async fn list_faculty(&self, session: &Session) -> Result<Vec<Faculty>, ClientError> {
        self.fetch_list(Call::get("/api/admin/faculty", SCHEME).by(session))
            .await
    }

    pub async fn get_faculty(&self, session: &Session, id: &str) -> Result<Faculty, ClientError> {
        self.fetch(Call::get(format!("/api/admin/faculty/{}", seg(id)), SCHEME).by(session))
            .await
    }

    pub async fn create_faculty(
        &self,
        session: &Session,
        faculty: &NewFaculty,
    ) -> Result<Ack, ClientError> {
        self.mutate(Call::post("/api/admin/faculty", SCHEME).by(session), Some(faculty))
            .await
    }

    pub async fn update_faculty(
        &self,
        session: &Session,
        id: &str,
        update: &FacultyUpdate,
    ) -> Result<Ack, ClientError> {
        let call = Call::put(format!("/api/admin/faculty/{}", seg(id)), SCHEME).by(session);
        self.mutate(call, Some(update)).await
    }

    pub async fn delete_faculty(&self, session: &Session, id: &str) -> Result<Ack, ClientError> {
        let call = Call::delete(format!("/api/admin/faculty/{}", seg(id)), SCHEME).by(session);
        self.mutate::<()>(call, None).await
    }

    pub async fn list_courses(&self, session: &Session) -> Result<Vec<Course>, ClientError> {
        self.fetch_list(Call::get("/api/admin/courses", SCHEME).by(session))
            .await
    }

    pub async fn get_course(&self, session: &Session, id: &str) -> Result<Course, ClientError> {
        self.fetch(Call::get(format!("/api/admin/courses/{}", seg(id)), SCHEME).by(session))
            .await
    }

    pub async fn create_course(
        &self,
        session: &Session,
        course: &NewCourse,
    ) -> Result<Ack, ClientError> {
        self.mutate(Call::post("/api/admin/courses", SCHEME).by(session), Some(course))
            .await
    }

    pub async fn update_course(
        &self,
        session: &Session,
        id: &str,
        update: &CourseUpdate,
    ) -> Result<Ack, ClientError> {
        let call = Call::put(format!("/api/admin/courses/{}", seg(id)), SCHEME).by(session);
        self.mutate(call, Some(update)).await
    }

    pub async fn delete_course(&self, session: &Session, id: &str) -> Result<Ack, ClientError> {
        let call = Call::delete(format!("/api/admin/courses/{}", seg(id)), SCHEME).by(session);
        self.mutate::<()>(call, None).await
    }

    pub async fn list_academic_years(
        &self,
        session: &Session,
    ) -> Result<Vec<AcademicYear>, ClientError> {
        self.fetch_list(Call::get("/api/admin/academic-years", SCHEME).by(session))
            .await
    }

    pub async fn create_academic_year(
        &self,
        session: &Session,
        year: &NewAcademicYear,
    ) -> Result<Ack, ClientError> {
        self.mutate(Call::post("/api/admin/academic-years", SCHEME).by(session), Some(year))
            .await
    }
}
