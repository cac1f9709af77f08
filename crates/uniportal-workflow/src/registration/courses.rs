use std::collections::HashSet;

use futures::future::join_all;
use serde::Serialize;
use uniportal_client::student::CourseSelection;
use uniportal_core::Route;
use uniportal_core::entities::{CourseOffering, SelectedCourse};

use crate::error::PortalError;
use crate::portal::{Portal, Redirect};

/// Offerings on screen and the ids ticked so far, in tick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoursePicker {
    pub offerings: Vec<CourseOffering>,
    selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Selected,
    Deselected,
    /// Full or already registered; the checkbox is disabled.
    Disabled,
    Unknown,
}

impl CoursePicker {
    /// Restore a previous selection; ids no longer offered are dropped.
    pub fn new(offerings: Vec<CourseOffering>, restored: impl IntoIterator<Item = String>) -> Self {
        let mut picker = Self {
            offerings,
            selected: Vec::new(),
        };
        for id in restored {
            if picker.offering(&id).is_some() && !picker.is_selected(&id) {
                picker.selected.push(id);
            }
        }
        picker
    }

    fn offering(&self, offering_id: &str) -> Option<&CourseOffering> {
        self.offerings.iter().find(|o| o.offering_id == offering_id)
    }

    #[must_use]
    pub fn is_selected(&self, offering_id: &str) -> bool {
        self.selected.iter().any(|id| id == offering_id)
    }

    #[must_use]
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn toggle(&mut self, offering_id: &str) -> Toggle {
        let Some(offering) = self.offering(offering_id) else {
            return Toggle::Unknown;
        };
        if !offering.is_selectable() {
            return Toggle::Disabled;
        }
        if self.is_selected(offering_id) {
            self.selected.retain(|id| id != offering_id);
            Toggle::Deselected
        } else {
            self.selected.push(offering_id.to_string());
            Toggle::Selected
        }
    }

    /// The ticked offerings, denormalised for the finalize step.
    #[must_use]
    pub fn selected_courses(&self) -> Vec<SelectedCourse> {
        self.selected
            .iter()
            .filter_map(|id| self.offering(id))
            .map(SelectedCourse::from)
            .collect()
    }

    #[must_use]
    pub fn total_credits(&self) -> i64 {
        self.selected
            .iter()
            .filter_map(|id| self.offering(id))
            .map(|o| o.credits)
            .sum()
    }
}

/// Step 2: fetch offerings and restore the stored selection.
pub async fn load_courses(portal: &Portal, student_id: &str) -> Result<CoursePicker, PortalError> {
    let session = portal.signed_in()?;
    let offerings = portal.client.course_offerings(&session, student_id).await?;
    let restored = portal
        .session
        .selected_courses()?
        .into_iter()
        .map(|c| c.offering_id);
    Ok(CoursePicker::new(offerings, restored))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    /// Offerings posted in this run.
    pub submitted: Vec<String>,
    /// Offerings acknowledged by an earlier run and not posted again.
    pub skipped: Vec<String>,
    pub redirect: Redirect,
}

/// Idempotency key for one selection call.
fn selection_key(student_id: &str, offering_id: &str) -> String {
    format!("{student_id}:{offering_id}")
}

/// Persist the selection, then post every course not yet acknowledged.
///
/// The posts run concurrently and are awaited together. Each accepted
/// offering is recorded as it completes, so after a partial failure a
/// second submit only posts the ones that failed.
///
/// # Errors
///
/// Validation when nothing is ticked; [`PortalError::PartialSelection`]
/// naming failed and recorded offerings when any post fails.
pub async fn submit_courses(
    portal: &Portal,
    student_id: &str,
    picker: &CoursePicker,
) -> Result<SelectionOutcome, PortalError> {
    let courses = picker.selected_courses();
    if courses.is_empty() {
        return Err(PortalError::validation("Please select at least one course"));
    }
    let session = portal.signed_in()?;
    portal.session.save_selected_courses(&courses)?;

    let already: HashSet<String> = portal.session.recorded_offerings()?.into_iter().collect();
    let (skipped, pending): (Vec<&SelectedCourse>, Vec<&SelectedCourse>) = courses
        .iter()
        .partition(|c| already.contains(&c.offering_id));

    let calls = pending.iter().map(|course| {
        let session = &session;
        async move {
            let body = CourseSelection {
                student_id: student_id.to_string(),
                offering_id: course.offering_id.clone(),
                course_id: course.course_id.clone(),
            };
            let key = selection_key(student_id, &course.offering_id);
            let result = portal.client.select_course(session, &body, Some(&key)).await;
            (course.offering_id.clone(), result)
        }
    });

    let mut submitted = Vec::new();
    let mut failed = Vec::new();
    for (offering_id, result) in join_all(calls).await {
        match result {
            Ok(_) => {
                portal.session.record_offering(&offering_id)?;
                submitted.push(offering_id);
            }
            Err(e) => {
                let reason = PortalError::from(e).to_string();
                tracing::warn!(offering = %offering_id, %reason, "course selection failed");
                failed.push((offering_id, reason));
            }
        }
    }

    if !failed.is_empty() {
        return Err(PortalError::PartialSelection {
            recorded: portal.session.recorded_offerings()?,
            failed,
        });
    }
    Ok(SelectionOutcome {
        submitted,
        skipped: skipped.into_iter().map(|c| c.offering_id.clone()).collect(),
        redirect: Redirect::now(Route::RegistrationFinalize),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offering(id: &str, seats: i64, registered: bool) -> CourseOffering {
        CourseOffering {
            offering_id: id.into(),
            course_id: format!("C{id}"),
            course_code: format!("CS{id}"),
            credits: 3,
            available_seats: seats,
            already_registered: registered,
            ..Default::default()
        }
    }

    fn picker() -> CoursePicker {
        CoursePicker::new(
            vec![
                offering("1", 10, false),
                offering("2", 0, false),
                offering("3", 5, true),
                offering("4", 2, false),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn full_offering_cannot_be_toggled() {
        let mut picker = picker();
        assert_eq!(picker.toggle("2"), Toggle::Disabled);
        assert!(picker.selected_ids().is_empty());
    }

    #[test]
    fn registered_offering_cannot_be_toggled() {
        let mut picker = picker();
        assert_eq!(picker.toggle("3"), Toggle::Disabled);
        assert!(!picker.is_selected("3"));
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut picker = picker();
        picker.toggle("4");
        let before = picker.selected_ids().to_vec();
        assert_eq!(picker.toggle("1"), Toggle::Selected);
        assert_eq!(picker.toggle("1"), Toggle::Deselected);
        assert_eq!(picker.selected_ids(), before.as_slice());
    }

    #[test]
    fn unknown_offering_is_ignored() {
        let mut picker = picker();
        assert_eq!(picker.toggle("99"), Toggle::Unknown);
    }

    #[test]
    fn restore_drops_ids_not_offered() {
        let picker = CoursePicker::new(
            vec![offering("1", 10, false)],
            vec!["1".to_string(), "7".to_string(), "1".to_string()],
        );
        assert_eq!(picker.selected_ids(), ["1".to_string()].as_slice());
    }

    #[test]
    fn selected_courses_follow_tick_order() {
        let mut picker = picker();
        picker.toggle("4");
        picker.toggle("1");
        let codes: Vec<String> = picker
            .selected_courses()
            .into_iter()
            .map(|c| c.course_code)
            .collect();
        assert_eq!(codes, vec!["CS4", "CS1"]);
        assert_eq!(picker.total_credits(), 6);
    }
}
