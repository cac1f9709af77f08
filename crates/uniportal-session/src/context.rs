//! Typed access to the stored session and registration draft.
//!
//! A [`SessionContext`] is created once per process and passed to whatever
//! needs it. Every operation is a load, modify, save against the backend, so
//! two commands run back to back always see each other's writes.

use std::path::PathBuf;
use std::sync::Arc;

use uniportal_core::entities::{SelectedCourse, Session, StudentProfile};
use uniportal_core::enums::Role;

use crate::backend::{FileBackend, MemoryBackend, StateBackend};
use crate::document::{FeeReceipt, StoredState};
use crate::error::SessionError;

#[derive(Clone)]
pub struct SessionContext {
    backend: Arc<dyn StateBackend>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("backend", &self.backend.describe())
            .finish()
    }
}

impl SessionContext {
    pub fn new(backend: Arc<dyn StateBackend>) -> Self {
        Self { backend }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(path)))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Raw snapshot of everything stored.
    pub fn state(&self) -> Result<StoredState, SessionError> {
        self.backend.load()
    }

    fn update<T>(
        &self,
        apply: impl FnOnce(&mut StoredState) -> T,
    ) -> Result<T, SessionError> {
        let mut state = self.backend.load()?;
        let out = apply(&mut state);
        self.backend.save(&state)?;
        Ok(out)
    }

    // -- identity ---------------------------------------------------------

    /// The logged-in identity, or `None` if there is no token.
    pub fn session(&self) -> Result<Option<Session>, SessionError> {
        let state = self.backend.load()?;
        let Some(token) = state.token.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        Ok(Some(Session {
            token,
            role: state.role.unwrap_or_default(),
            user_id: state.user_id.unwrap_or_default(),
            name: state.name.unwrap_or_default(),
            student_id: state.student_id,
            faculty_id: state.faculty_id,
        }))
    }

    /// # Errors
    ///
    /// [`SessionError::NotAuthenticated`] when nobody is logged in.
    pub fn require_session(&self) -> Result<Session, SessionError> {
        self.session()?.ok_or(SessionError::NotAuthenticated)
    }

    /// Remember a fresh login.
    ///
    /// A different user than the one stored starts with an empty draft.
    pub fn start(&self, session: &Session) -> Result<(), SessionError> {
        self.update(|state| {
            if state.user_id.as_deref() != Some(session.user_id.as_str()) {
                state.clear_workflow();
            }
            state.token = Some(session.token.clone());
            state.role = Some(session.role);
            state.user_id = Some(session.user_id.clone());
            state.name = Some(session.name.clone());
            state.student_id = session.student_id().map(str::to_string);
            state.faculty_id = session.faculty_id().map(str::to_string);
            state.student_name =
                (session.role == Role::Student).then(|| session.name.clone());
        })
    }

    /// Forget everything, identity and draft alike.
    pub fn logout(&self) -> Result<(), SessionError> {
        tracing::debug!(store = %self.backend.describe(), "clearing session");
        self.backend.clear()
    }

    /// Stored role; an unset role reads as student.
    pub fn role(&self) -> Result<Role, SessionError> {
        Ok(self.backend.load()?.role.unwrap_or_default())
    }

    /// Student id for registration calls, if the session has one.
    pub fn student_id(&self) -> Result<Option<String>, SessionError> {
        let state = self.backend.load()?;
        let fallback = (state.role.unwrap_or_default() == Role::Student)
            .then_some(state.user_id)
            .flatten();
        Ok(state
            .student_id
            .or(fallback)
            .filter(|id| !id.is_empty()))
    }

    // -- registration draft -----------------------------------------------

    pub fn student_profile(&self) -> Result<Option<StudentProfile>, SessionError> {
        Ok(self.backend.load()?.student_profile)
    }

    /// Copy the reviewed profile into the draft.
    ///
    /// The batch doubles as the academic year id for the rest of the flow.
    pub fn save_profile(&self, profile: &StudentProfile) -> Result<(), SessionError> {
        self.update(|state| {
            state.academic_year_id = profile.batch.clone();
            state.student_name = Some(profile.name.clone()).filter(|n| !n.is_empty());
            state.student_profile = Some(profile.clone());
        })
    }

    pub fn academic_year_id(&self) -> Result<Option<String>, SessionError> {
        Ok(self.backend.load()?.academic_year_id)
    }

    pub fn set_academic_year_id(&self, id: &str) -> Result<(), SessionError> {
        self.update(|state| state.academic_year_id = Some(id.to_string()))
    }

    /// Locally selected courses; nothing stored reads as an empty list.
    pub fn selected_courses(&self) -> Result<Vec<SelectedCourse>, SessionError> {
        Ok(self.backend.load()?.selected_courses.unwrap_or_default())
    }

    /// Replace the selection.
    ///
    /// Recorded offerings that are no longer selected are forgotten.
    pub fn save_selected_courses(&self, courses: &[SelectedCourse]) -> Result<(), SessionError> {
        self.update(|state| {
            state
                .recorded_offerings
                .retain(|id| courses.iter().any(|c| &c.offering_id == id));
            state.selected_courses = Some(courses.to_vec());
        })
    }

    /// Note that the backend accepted `offering_id` for this draft.
    pub fn record_offering(&self, offering_id: &str) -> Result<(), SessionError> {
        self.update(|state| {
            if !state.recorded_offerings.iter().any(|id| id == offering_id) {
                state.recorded_offerings.push(offering_id.to_string());
            }
        })
    }

    pub fn recorded_offerings(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.backend.load()?.recorded_offerings)
    }

    pub fn fee_receipt(&self) -> Result<Option<FeeReceipt>, SessionError> {
        Ok(self.backend.load()?.fee_receipt)
    }

    pub fn save_fee_receipt(&self, receipt: &FeeReceipt) -> Result<(), SessionError> {
        self.update(|state| state.fee_receipt = Some(receipt.clone()))
    }

    /// Key for the current draft's mutating calls, created on first use.
    pub fn idempotency_key(&self) -> Result<String, SessionError> {
        let mut state = self.backend.load()?;
        if let Some(key) = state.idempotency_key.clone() {
            return Ok(key);
        }
        let key = new_key()?;
        state.idempotency_key = Some(key.clone());
        self.backend.save(&state)?;
        Ok(key)
    }

    /// Drop the selection and finalize progress, keeping the reviewed profile.
    ///
    /// Runs after a successful finalize and when the student restarts selection.
    pub fn clear_selection(&self) -> Result<(), SessionError> {
        self.update(StoredState::clear_selection)
    }

    /// Abandon the draft entirely, profile copy included.
    pub fn reset_registration(&self) -> Result<(), SessionError> {
        self.update(StoredState::clear_workflow)
    }
}

fn new_key() -> Result<String, SessionError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)
        .map_err(|e| SessionError::Store(format!("failed to generate idempotency key: {e}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student(user_id: &str) -> Session {
        Session {
            token: "tok".into(),
            role: Role::Student,
            user_id: user_id.into(),
            name: "Asha".into(),
            student_id: None,
            faculty_id: None,
        }
    }

    #[test]
    fn no_token_means_no_session() {
        let ctx = SessionContext::in_memory();
        assert!(ctx.session().unwrap().is_none());
        assert!(matches!(
            ctx.require_session(),
            Err(SessionError::NotAuthenticated)
        ));
        assert_eq!(ctx.role().unwrap(), Role::Student);
    }

    #[test]
    fn start_stores_identity() {
        let ctx = SessionContext::in_memory();
        ctx.start(&student("2101")).unwrap();
        let session = ctx.require_session().unwrap();
        assert_eq!(session.role, Role::Student);
        assert_eq!(ctx.student_id().unwrap().as_deref(), Some("2101"));
        assert_eq!(ctx.state().unwrap().student_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn new_user_starts_with_empty_draft() {
        let ctx = SessionContext::in_memory();
        ctx.start(&student("2101")).unwrap();
        ctx.save_profile(&StudentProfile {
            student_id: "2101".into(),
            batch: Some("2022".into()),
            ..Default::default()
        })
        .unwrap();

        ctx.start(&student("2101")).unwrap();
        assert!(ctx.student_profile().unwrap().is_some());

        ctx.start(&student("2202")).unwrap();
        assert!(ctx.student_profile().unwrap().is_none());
        assert!(ctx.academic_year_id().unwrap().is_none());
    }

    #[test]
    fn save_profile_sets_academic_year_from_batch() {
        let ctx = SessionContext::in_memory();
        ctx.save_profile(&StudentProfile {
            student_id: "S1".into(),
            name: "Asha".into(),
            batch: Some("2022".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ctx.academic_year_id().unwrap().as_deref(), Some("2022"));
    }

    #[test]
    fn idempotency_key_is_stable_until_completion() {
        let ctx = SessionContext::in_memory();
        let first = ctx.idempotency_key().unwrap();
        assert_eq!(first.len(), 32);
        assert_eq!(ctx.idempotency_key().unwrap(), first);

        ctx.clear_selection().unwrap();
        assert_ne!(ctx.idempotency_key().unwrap(), first);
    }

    #[test]
    fn deselecting_forgets_recorded_offering() {
        let ctx = SessionContext::in_memory();
        let course = |id: &str| {
            SelectedCourse::from(&uniportal_core::entities::CourseOffering {
                offering_id: id.into(),
                ..Default::default()
            })
        };
        ctx.save_selected_courses(&[course("O1"), course("O2")]).unwrap();
        ctx.record_offering("O1").unwrap();
        ctx.record_offering("O1").unwrap();
        ctx.record_offering("O2").unwrap();
        assert_eq!(ctx.recorded_offerings().unwrap(), vec!["O1", "O2"]);

        ctx.save_selected_courses(&[course("O2")]).unwrap();
        assert_eq!(ctx.recorded_offerings().unwrap(), vec!["O2"]);
    }

    #[test]
    fn logout_clears_everything() {
        let ctx = SessionContext::in_memory();
        ctx.start(&student("2101")).unwrap();
        ctx.logout().unwrap();
        assert_eq!(ctx.state().unwrap(), StoredState::default());
    }
}
