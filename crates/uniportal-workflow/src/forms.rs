//! Create, edit and remove pages, generic over [`ManagedRecord`].

use std::collections::BTreeMap;

use uniportal_core::errors::SELECT_AT_LEAST_ONE_FIELD;
use uniportal_core::updates::SparseUpdate;
use uniportal_core::validation::PasswordChange;

use crate::error::PortalError;
use crate::portal::Portal;
use crate::records::ManagedRecord;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// An "Add ..." page.
#[derive(Debug, Clone)]
pub struct CreateForm<R: ManagedRecord> {
    pub draft: R::New,
}

impl<R: ManagedRecord> Default for CreateForm<R> {
    fn default() -> Self {
        Self {
            draft: R::New::default(),
        }
    }
}

impl<R: ManagedRecord> CreateForm<R> {
    pub fn new(draft: R::New) -> Self {
        Self { draft }
    }

    /// Validate, POST, and reset the form on success.
    ///
    /// Missing required fields are reported without a request. On failure
    /// the draft is left as it was so it can be corrected.
    ///
    /// # Errors
    ///
    /// Access denied, validation, or the backend's error.
    pub async fn submit(&mut self, portal: &Portal) -> Result<String, PortalError> {
        let session = portal.authorize(R::WRITERS)?;
        R::validate_new(&self.draft)?;
        let ack = R::create(&portal.client, &session, &self.draft).await?;
        self.draft = R::New::default();
        let message = ack.message_or(&format!("{} added successfully", R::LABEL));
        tracing::info!(record = R::LABEL, "created");
        Ok(message)
    }
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// An "Edit ..." page: hydrate, tick fields, submit only those.
#[derive(Debug, Clone)]
pub struct EditForm<R: ManagedRecord> {
    id: String,
    record: Option<R>,
    selected: BTreeMap<<R::Update as SparseUpdate>::Field, String>,
    password: Option<PasswordChange>,
}

impl<R: ManagedRecord> EditForm<R> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            record: None,
            selected: BTreeMap::new(),
            password: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The record as last fetched.
    #[must_use]
    pub const fn record(&self) -> Option<&R> {
        self.record.as_ref()
    }

    /// Fetch the current record by id.
    pub async fn hydrate(&mut self, portal: &Portal) -> Result<&R, PortalError> {
        let session = portal.authorize(R::WRITERS)?;
        let record = R::get(&portal.client, &session, &self.id).await?;
        Ok(self.record.insert(record))
    }

    /// Tick `field` with a new value. The value is checked immediately.
    pub fn select(
        &mut self,
        field: <R::Update as SparseUpdate>::Field,
        value: impl Into<String>,
    ) -> Result<(), PortalError> {
        let value = value.into();
        let mut probe = R::Update::default();
        probe.set_field(field, &value)?;
        self.selected.insert(field, value);
        Ok(())
    }

    /// Untick `field`; its value is no longer sent.
    pub fn deselect(&mut self, field: <R::Update as SparseUpdate>::Field) {
        self.selected.remove(&field);
    }

    pub fn selected_fields(&self) -> impl Iterator<Item = <R::Update as SparseUpdate>::Field> + '_ {
        self.selected.keys().copied()
    }

    /// Opt into a password change. Checked on submit.
    pub fn change_password(&mut self, change: PasswordChange) -> Result<(), PortalError> {
        if !<R::Update as SparseUpdate>::HAS_PASSWORD {
            return Err(PortalError::validation(format!(
                "{} records have no password",
                R::LABEL
            )));
        }
        self.password = Some(change);
        Ok(())
    }

    /// Build the sparse body from the ticked fields.
    pub fn build_update(&self, min_password_len: usize) -> Result<R::Update, PortalError> {
        if self.selected.is_empty() && self.password.is_none() {
            return Err(PortalError::validation(SELECT_AT_LEAST_ONE_FIELD));
        }
        let mut update = R::Update::default();
        for (field, value) in &self.selected {
            update.set_field(*field, value)?;
        }
        if let Some(change) = &self.password {
            update.set_password(change.validate(min_password_len)?);
        }
        Ok(update)
    }

    /// PUT only the selected subset.
    ///
    /// # Errors
    ///
    /// "Please select at least one field to edit" when nothing is ticked and
    /// no password change is requested; password mismatch or length errors;
    /// access denied; the backend's error.
    pub async fn submit(&mut self, portal: &Portal) -> Result<String, PortalError> {
        let session = portal.authorize(R::WRITERS)?;
        let update = self.build_update(portal.settings.min_password_len)?;
        tracing::debug!(record = R::LABEL, id = %self.id, ?update, "sending sparse update");
        let ack = R::update(&portal.client, &session, &self.id, &update).await?;
        self.selected.clear();
        self.password = None;
        Ok(ack.message_or(&format!("{} updated successfully", R::LABEL)))
    }
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// A "Remove ..." page: list, pick, delete, drop locally.
#[derive(Debug, Clone)]
pub struct RemoveForm<R: ManagedRecord> {
    pub records: Vec<R>,
}

impl<R: ManagedRecord> Default for RemoveForm<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: ManagedRecord> RemoveForm<R> {
    pub async fn load(&mut self, portal: &Portal) -> Result<&[R], PortalError> {
        let session = portal.authorize(R::WRITERS)?;
        self.records = R::list(&portal.client, &session).await?;
        Ok(&self.records)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// DELETE `id` and drop it from the local list without a re-fetch.
    ///
    /// `id` must be one of the loaded records.
    pub async fn remove(&mut self, portal: &Portal, id: &str) -> Result<String, PortalError> {
        let session = portal.authorize(R::WRITERS)?;
        if self.find(id).is_none() {
            return Err(PortalError::validation(format!(
                "{} '{id}' is not in the list",
                R::LABEL
            )));
        }
        let ack = R::delete(&portal.client, &session, id).await?;
        self.records.retain(|r| r.id() != id);
        tracing::info!(record = R::LABEL, id, "removed");
        Ok(ack.message_or(&format!("{} removed successfully", R::LABEL)))
    }
}
