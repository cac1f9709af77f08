//! Records managed through the create / edit / remove pages.
//!
//! [`ManagedRecord`] binds a record type to its create body, its sparse
//! update, and the client calls for its routes, so the forms in
//! [`crate::forms`] stay generic.

use std::fmt::Debug;
use std::future::Future;

use serde::Serialize;
use uniportal_client::{Ack, ClientError, PortalClient};
use uniportal_core::CoreError;
use uniportal_core::entities::{
    CalendarEntry, Course, Faculty, NewCalendarEntry, NewCourse, NewFaculty, NewStudent, Session,
    Student,
};
use uniportal_core::enums::Role;
use uniportal_core::updates::{
    CalendarUpdate, CourseUpdate, FacultyUpdate, SparseUpdate, StudentUpdate,
};

pub trait ManagedRecord: Debug + Clone + Serialize {
    type New: Debug + Clone + Default + Serialize;
    type Update: SparseUpdate;

    /// Singular noun for messages ("Student", "Course", ...).
    const LABEL: &'static str;

    /// Roles allowed to create, edit and remove.
    const WRITERS: &'static [Role];

    fn id(&self) -> &str;

    fn validate_new(new: &Self::New) -> Result<(), CoreError>;

    fn list(
        client: &PortalClient,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<Self>, ClientError>>;

    fn get(
        client: &PortalClient,
        session: &Session,
        id: &str,
    ) -> impl Future<Output = Result<Self, ClientError>>;

    fn create(
        client: &PortalClient,
        session: &Session,
        new: &Self::New,
    ) -> impl Future<Output = Result<Ack, ClientError>>;

    fn update(
        client: &PortalClient,
        session: &Session,
        id: &str,
        update: &Self::Update,
    ) -> impl Future<Output = Result<Ack, ClientError>>;

    fn delete(
        client: &PortalClient,
        session: &Session,
        id: &str,
    ) -> impl Future<Output = Result<Ack, ClientError>>;
}

const ADMIN: &[Role] = &[Role::Admin];

impl ManagedRecord for Student {
    type New = NewStudent;
    type Update = StudentUpdate;
    const LABEL: &'static str = "Student";
    const WRITERS: &'static [Role] = ADMIN;

    fn id(&self) -> &str {
        &self.student_id
    }

    fn validate_new(new: &NewStudent) -> Result<(), CoreError> {
        new.validate()
    }

    async fn list(client: &PortalClient, session: &Session) -> Result<Vec<Self>, ClientError> {
        client.list_students(session).await
    }

    async fn get(client: &PortalClient, session: &Session, id: &str) -> Result<Self, ClientError> {
        client.get_student(session, id).await
    }

    async fn create(
        client: &PortalClient,
        session: &Session,
        new: &NewStudent,
    ) -> Result<Ack, ClientError> {
        client.create_student(session, new).await
    }

    async fn update(
        client: &PortalClient,
        session: &Session,
        id: &str,
        update: &StudentUpdate,
    ) -> Result<Ack, ClientError> {
        client.update_student(session, id, update).await
    }

    async fn delete(client: &PortalClient, session: &Session, id: &str) -> Result<Ack, ClientError> {
        client.delete_student(session, id).await
    }
}

impl ManagedRecord for Faculty {
    type New = NewFaculty;
    type Update = FacultyUpdate;
    const LABEL: &'static str = "Faculty";
    const WRITERS: &'static [Role] = ADMIN;

    fn id(&self) -> &str {
        &self.faculty_id
    }

    fn validate_new(new: &NewFaculty) -> Result<(), CoreError> {
        new.validate()
    }

    async fn list(client: &PortalClient, session: &Session) -> Result<Vec<Self>, ClientError> {
        client.list_faculty(session).await
    }

    async fn get(client: &PortalClient, session: &Session, id: &str) -> Result<Self, ClientError> {
        client.get_faculty(session, id).await
    }

    async fn create(
        client: &PortalClient,
        session: &Session,
        new: &NewFaculty,
    ) -> Result<Ack, ClientError> {
        client.create_faculty(session, new).await
    }

    async fn update(
        client: &PortalClient,
        session: &Session,
        id: &str,
        update: &FacultyUpdate,
    ) -> Result<Ack, ClientError> {
        client.update_faculty(session, id, update).await
    }

    async fn delete(client: &PortalClient, session: &Session, id: &str) -> Result<Ack, ClientError> {
        client.delete_faculty(session, id).await
    }
}

impl ManagedRecord for Course {
    type New = NewCourse;
    type Update = CourseUpdate;
    const LABEL: &'static str = "Course";
    const WRITERS: &'static [Role] = ADMIN;

    fn id(&self) -> &str {
        &self.course_id
    }

    fn validate_new(new: &NewCourse) -> Result<(), CoreError> {
        new.validate()
    }

    async fn list(client: &PortalClient, session: &Session) -> Result<Vec<Self>, ClientError> {
        client.list_courses(session).await
    }

    async fn get(client: &PortalClient, session: &Session, id: &str) -> Result<Self, ClientError> {
        client.get_course(session, id).await
    }

    async fn create(
        client: &PortalClient,
        session: &Session,
        new: &NewCourse,
    ) -> Result<Ack, ClientError> {
        client.create_course(session, new).await
    }

    async fn update(
        client: &PortalClient,
        session: &Session,
        id: &str,
        update: &CourseUpdate,
    ) -> Result<Ack, ClientError> {
        client.update_course(session, id, update).await
    }

    async fn delete(client: &PortalClient, session: &Session, id: &str) -> Result<Ack, ClientError> {
        client.delete_course(session, id).await
    }
}

impl ManagedRecord for CalendarEntry {
    type New = NewCalendarEntry;
    type Update = CalendarUpdate;
    const LABEL: &'static str = "Calendar entry";
    const WRITERS: &'static [Role] = ADMIN;

    fn id(&self) -> &str {
        &self.entry_id
    }

    fn validate_new(new: &NewCalendarEntry) -> Result<(), CoreError> {
        new.validate()
    }

    async fn list(client: &PortalClient, session: &Session) -> Result<Vec<Self>, ClientError> {
        client.list_calendar(session, None).await
    }

    async fn get(client: &PortalClient, session: &Session, id: &str) -> Result<Self, ClientError> {
        client.get_calendar_entry(session, id).await
    }

    async fn create(
        client: &PortalClient,
        session: &Session,
        new: &NewCalendarEntry,
    ) -> Result<Ack, ClientError> {
        client.create_calendar_entry(session, new).await
    }

    async fn update(
        client: &PortalClient,
        session: &Session,
        id: &str,
        update: &CalendarUpdate,
    ) -> Result<Ack, ClientError> {
        client.update_calendar_entry(session, id, update).await
    }

    async fn delete(client: &PortalClient, session: &Session, id: &str) -> Result<Ack, ClientError> {
        client.delete_calendar_entry(session, id).await
    }
}
