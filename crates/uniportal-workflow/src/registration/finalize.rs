use chrono::Utc;
use serde::Serialize;
use uniportal_client::student::SemesterRegistration;
use uniportal_core::entities::{AcademicYear, FeeSubmission, SelectedCourse, Session};
use uniportal_core::enums::EnrollmentStatus;
use uniportal_core::validation::{parse_date, parse_number, require_fields};
use uniportal_core::{CoreError, Route};
use uniportal_session::FeeReceipt;

use crate::error::PortalError;
use crate::portal::{Portal, Redirect, Step};

/// What the finalize page shows before the fee form is filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizePage {
    pub student_id: String,
    pub courses: Vec<SelectedCourse>,
    pub academic_year: Option<AcademicYear>,
    pub academic_year_id: Option<String>,
    /// Present when an earlier run already paid the fee.
    pub fee_receipt: Option<FeeReceipt>,
}

/// Step 3 view. Without a stored student id this redirects to login and
/// sends nothing.
pub async fn load_finalize(portal: &Portal) -> Result<Step<FinalizePage>, PortalError> {
    let Some(student_id) = portal.session.student_id()? else {
        return Ok(Step::Redirect(Redirect::now(Route::Login)));
    };
    let session = portal.signed_in()?;
    let courses = courses_for(portal, &session, &student_id).await?;
    let academic_year = match portal.client.current_academic_year(&session).await {
        Ok(year) => Some(year),
        Err(e) => {
            tracing::warn!(%e, "current academic year unavailable");
            None
        }
    };
    let academic_year_id = portal
        .session
        .academic_year_id()?
        .or_else(|| academic_year.as_ref().map(|y| y.academic_year_id.clone()));
    Ok(Step::Ready(FinalizePage {
        student_id,
        courses,
        academic_year,
        academic_year_id,
        fee_receipt: portal.session.fee_receipt()?,
    }))
}

/// Stored selection, or the registered courses when nothing is stored.
async fn courses_for(
    portal: &Portal,
    session: &Session,
    student_id: &str,
) -> Result<Vec<SelectedCourse>, PortalError> {
    let stored = portal.session.selected_courses()?;
    if !stored.is_empty() {
        return Ok(stored);
    }
    let registered = portal
        .client
        .student_courses(session, student_id, Some(EnrollmentStatus::Registered))
        .await?;
    Ok(registered.into_iter().map(SelectedCourse::from).collect())
}

/// Fee details as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeForm {
    pub cpi: String,
    pub bank_name: String,
    pub transaction_id: String,
    pub transaction_date: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedFee {
    pub cpi: f64,
    pub amount: f64,
}

impl FeeForm {
    /// Every field is required; CPI and amount must be numbers.
    ///
    /// A CPI outside `0..=cpi_max` is only logged.
    pub fn parse(&self, cpi_max: f64) -> Result<ParsedFee, CoreError> {
        require_fields(&[
            ("cpi", &self.cpi),
            ("bank_name", &self.bank_name),
            ("transaction_id", &self.transaction_id),
            ("transaction_date", &self.transaction_date),
            ("amount", &self.amount),
        ])?;
        let cpi = self.parse_cpi(cpi_max)?;
        let amount = parse_number("amount", &self.amount)?;
        parse_date("transaction_date", &self.transaction_date)?;
        Ok(ParsedFee { cpi, amount })
    }

    /// Only the CPI, for a run that resumes after a recorded fee payment.
    pub fn parse_cpi(&self, cpi_max: f64) -> Result<f64, CoreError> {
        require_fields(&[("cpi", &self.cpi)])?;
        let cpi = parse_number("cpi", &self.cpi)?;
        if !(0.0..=cpi_max).contains(&cpi) {
            tracing::warn!(cpi, max = cpi_max, "CPI outside the expected range, submitting anyway");
        }
        Ok(cpi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalizeProgress {
    FeeSubmitted,
    Registered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizeOutcome {
    pub progress: FinalizeProgress,
    /// True when the fee came from an earlier run and was not sent again.
    pub fee_resumed: bool,
    pub fee: FeeReceipt,
    pub course_ids: Vec<String>,
    pub message: String,
    pub redirect: Redirect,
}

/// Submit the fee, then the semester registration.
///
/// Registration is only attempted once the fee call answers with an
/// explicit `success: true`. A confirmed fee is recorded before
/// registration starts; if registration then fails, running finalize again
/// skips straight to it. Both calls carry the draft's idempotency key.
///
/// # Errors
///
/// Validation of the form, the fee call's error, or
/// [`PortalError::RegistrationPending`] when only the fee went through.
pub async fn finalize(portal: &Portal, form: &FeeForm) -> Result<Step<FinalizeOutcome>, PortalError> {
    let Some(student_id) = portal.session.student_id()? else {
        return Ok(Step::Redirect(Redirect::now(Route::Login)));
    };
    let cpi_max = portal.settings.cpi_max;
    let stored_year = portal.session.academic_year_id()?;
    let resumable = portal.session.fee_receipt()?.is_some_and(|receipt| {
        stored_year
            .as_ref()
            .is_none_or(|year| *year == receipt.academic_year_id)
    });
    // The fee fields are only read when the fee still has to be sent.
    let cpi = if resumable {
        form.parse_cpi(cpi_max)?
    } else {
        form.parse(cpi_max)?.cpi
    };
    let session = portal.signed_in()?;

    let courses = courses_for(portal, &session, &student_id).await?;
    if courses.is_empty() {
        return Err(PortalError::validation(
            "No courses selected. Choose courses before finalizing.",
        ));
    }
    let academic_year_id = match stored_year {
        Some(id) => id,
        None => {
            portal
                .client
                .current_academic_year(&session)
                .await?
                .academic_year_id
        }
    };
    let key = portal.session.idempotency_key()?;

    let (receipt, fee_resumed) = match portal.session.fee_receipt()? {
        Some(receipt) if receipt.academic_year_id == academic_year_id => {
            tracing::info!(transaction = %receipt.transaction_id, "fee already recorded, resuming at registration");
            (receipt, true)
        }
        _ => {
            let amount = if resumable {
                form.parse(cpi_max)?.amount
            } else {
                parse_number("amount", &form.amount)?
            };
            let submission = FeeSubmission {
                student_id: student_id.clone(),
                academic_year_id: academic_year_id.clone(),
                bank_name: form.bank_name.trim().to_string(),
                transaction_id: form.transaction_id.trim().to_string(),
                transaction_date: form.transaction_date.trim().to_string(),
                amount,
            };
            let ack = portal
                .client
                .submit_fee(&session, &submission, Some(&key))
                .await?
                .ensure_confirmed()?;
            let receipt = FeeReceipt {
                academic_year_id: academic_year_id.clone(),
                transaction_id: submission.transaction_id,
                message: ack.message_or("Fee submitted"),
                fee_id: ack.record_id,
                submitted_at: Utc::now(),
            };
            portal.session.save_fee_receipt(&receipt)?;
            (receipt, false)
        }
    };

    let course_ids: Vec<String> = courses.iter().map(|c| c.course_id.clone()).collect();
    let registration = SemesterRegistration {
        student_id,
        academic_year_id,
        course_ids: course_ids.clone(),
        cpi,
    };
    let ack = portal
        .client
        .register_semester(&session, &registration, Some(&key))
        .await
        .map_err(|e| PortalError::RegistrationPending {
            cause: Box::new(e.into()),
        })?;

    portal.session.clear_selection()?;
    tracing::info!(courses = course_ids.len(), "semester registration submitted");
    Ok(Step::Ready(FinalizeOutcome {
        progress: FinalizeProgress::Registered,
        fee_resumed,
        fee: receipt,
        course_ids,
        message: ack.message_or("Registration submitted successfully"),
        redirect: Redirect::after(Route::StudentDashboard, portal.settings.redirect_delay()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FeeForm {
        FeeForm {
            cpi: "8.2".into(),
            bank_name: "SBI".into(),
            transaction_id: "UTR123".into(),
            transaction_date: "2026-07-01".into(),
            amount: "45000".into(),
        }
    }

    #[test]
    fn complete_form_parses() {
        let parsed = form().parse(10.0).unwrap();
        assert_eq!(parsed.cpi, 8.2);
        assert_eq!(parsed.amount, 45000.0);
    }

    #[test]
    fn blank_fields_are_named() {
        let mut form = form();
        form.bank_name.clear();
        form.amount = " ".into();
        let err = form.parse(10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: bank_name, amount"
        );
    }

    #[test]
    fn non_numeric_cpi_is_rejected() {
        let mut form = form();
        form.cpi = "eight".into();
        assert!(matches!(
            form.parse(10.0),
            Err(CoreError::InvalidValue { ref field, .. }) if field == "cpi"
        ));
    }

    #[test]
    fn cpi_alone_is_enough_when_resuming() {
        let resume = FeeForm {
            cpi: "7.9".into(),
            ..FeeForm::default()
        };
        assert_eq!(resume.parse_cpi(10.0).unwrap(), 7.9);
        assert!(resume.parse(10.0).is_err());
        assert!(FeeForm::default().parse_cpi(10.0).is_err());
    }

    #[test]
    fn out_of_range_cpi_is_advisory() {
        let mut form = form();
        form.cpi = "11.5".into();
        assert_eq!(form.parse(10.0).unwrap().cpi, 11.5);
    }
}
