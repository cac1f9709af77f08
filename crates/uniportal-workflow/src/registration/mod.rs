//! Semester registration, the three-step student flow.
//!
//! ```text
//! profile review → course selection → fee & finalize → dashboard
//! ```
//!
//! Steps hand data to each other only through the session store, so any
//! step can be opened directly. Finalize is the one step that refuses to
//! run without a stored student id.
//!
//! Course selection and finalize are written to survive being re-run:
//! acknowledged selections and a confirmed fee payment are recorded, and a
//! retry only repeats what has not gone through yet.

mod courses;
mod finalize;
mod profile;
mod status;

pub use courses::{CoursePicker, SelectionOutcome, Toggle, load_courses, submit_courses};
pub use finalize::{
    FeeForm, FinalizeOutcome, FinalizePage, FinalizeProgress, ParsedFee, finalize, load_finalize,
};
pub use profile::{
    EditableOutcome, ProfileReview, continue_to_courses, load_profile, update_editable,
};
pub use status::{RegistrationStatus, reset, start_over, status};
