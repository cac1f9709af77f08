use serde::Serialize;
use uniportal_core::Route;
use uniportal_core::entities::SelectedCourse;
use uniportal_core::enums::RegistrationStep;
use uniportal_session::FeeReceipt;

use super::finalize::FinalizeProgress;
use crate::error::PortalError;
use crate::portal::{Portal, Redirect};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationStatus {
    /// Step the student should open next.
    pub step: RegistrationStep,
    pub route: Route,
    pub profile_reviewed: bool,
    pub academic_year_id: Option<String>,
    pub selected: Vec<SelectedCourse>,
    pub recorded_offerings: Vec<String>,
    pub finalize_progress: Option<FinalizeProgress>,
    pub fee_receipt: Option<FeeReceipt>,
}

/// Infer the current step from what the store holds.
pub fn status(portal: &Portal) -> Result<RegistrationStatus, PortalError> {
    let state = portal.session.state()?;
    let selected = state.selected_courses.unwrap_or_default();
    let profile_reviewed = state.student_profile.is_some();

    let step = if state.fee_receipt.is_some() || !selected.is_empty() {
        RegistrationStep::FeeAndFinalize
    } else if profile_reviewed {
        RegistrationStep::CourseSelection
    } else {
        RegistrationStep::ProfileReview
    };

    Ok(RegistrationStatus {
        step,
        route: step.route(),
        profile_reviewed,
        academic_year_id: state.academic_year_id,
        selected,
        recorded_offerings: state.recorded_offerings,
        finalize_progress: state
            .fee_receipt
            .as_ref()
            .map(|_| FinalizeProgress::FeeSubmitted),
        fee_receipt: state.fee_receipt,
    })
}

/// Restart course selection: drop the selection, recorded posts and fee
/// progress. The reviewed profile is kept.
pub fn reset(portal: &Portal) -> Result<Redirect, PortalError> {
    portal.session.clear_selection()?;
    tracing::info!("registration selection cleared");
    Ok(Redirect::now(Route::RegistrationCourses))
}

/// Abandon the draft entirely, reviewed profile included, and go back to
/// the first step.
pub fn start_over(portal: &Portal) -> Result<Redirect, PortalError> {
    portal.session.reset_registration()?;
    tracing::info!("registration draft discarded");
    Ok(Redirect::now(Route::RegistrationProfile))
}
