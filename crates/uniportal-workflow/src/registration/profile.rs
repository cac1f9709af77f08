use serde::Serialize;
use uniportal_core::Route;
use uniportal_core::entities::{EditableFields, StudentProfile};
use uniportal_core::errors::SELECT_AT_LEAST_ONE_FIELD;

use crate::error::PortalError;
use crate::portal::{Portal, Redirect};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReview {
    pub profile: StudentProfile,
    pub editable: EditableFields,
}

/// Step 1: fetch the profile and its editable subset together.
///
/// # Errors
///
/// Any failure is blocking and carries [`Route::Login`].
pub async fn load_profile(portal: &Portal, student_id: &str) -> Result<ProfileReview, PortalError> {
    let session = portal
        .signed_in()
        .map_err(|e| e.blocking(Route::Login))?;
    let (profile, editable) = tokio::join!(
        portal.client.student_profile(&session, student_id),
        portal.client.editable_fields(&session, student_id),
    );
    let mut profile = profile.map_err(|e| PortalError::from(e).blocking(Route::Login))?;
    let editable = editable.map_err(|e| PortalError::from(e).blocking(Route::Login))?;
    profile.apply_editable(&editable);

    if let Some(cpi) = profile.cpi
        && !(0.0..=portal.settings.cpi_max).contains(&cpi)
    {
        tracing::warn!(cpi, max = portal.settings.cpi_max, "CPI outside the expected range");
    }
    Ok(ProfileReview { profile, editable })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditableOutcome {
    Saved { message: String },
    /// The update failed; the profile shown is unchanged.
    Kept { warning: String },
}

/// PUT the editable subset.
///
/// A failed request does not block the page: it comes back as
/// [`EditableOutcome::Kept`] with the reason.
pub async fn update_editable(
    portal: &Portal,
    student_id: &str,
    review: &mut ProfileReview,
    fields: EditableFields,
) -> Result<EditableOutcome, PortalError> {
    if fields.is_empty() {
        return Err(PortalError::validation(SELECT_AT_LEAST_ONE_FIELD));
    }
    let session = portal.signed_in()?;
    match portal
        .client
        .update_editable_fields(&session, student_id, &fields)
        .await
    {
        Ok(ack) => {
            review.profile.apply_editable(&fields);
            merge(&mut review.editable, fields);
            Ok(EditableOutcome::Saved {
                message: ack.message_or("Profile updated successfully"),
            })
        }
        Err(e) => {
            let warning = PortalError::from(e).to_string();
            tracing::warn!(%warning, "editable fields not saved");
            Ok(EditableOutcome::Kept { warning })
        }
    }
}

fn merge(into: &mut EditableFields, from: EditableFields) {
    if from.phone.is_some() {
        into.phone = from.phone;
    }
    if from.email.is_some() {
        into.email = from.email;
    }
    if from.contact.is_some() {
        into.contact = from.contact;
    }
    if from.address.is_some() {
        into.address = from.address;
    }
}

/// Copy the reviewed profile into the store and move on to course selection.
pub fn continue_to_courses(portal: &Portal, review: &ProfileReview) -> Result<Redirect, PortalError> {
    portal.session.save_profile(&review.profile)?;
    Ok(Redirect::now(Route::RegistrationCourses))
}
