//! # uniportal-core
//!
//! Core types shared by every portal crate:
//! - Entity structs for backend records (students, faculty, courses, offerings,
//!   fee transactions, announcements, calendar entries, applications)
//! - Role and status enums, including the registration step state machine
//! - Sparse update builders used by the edit forms
//! - Client-side validation helpers (required fields, password change, dates)
//! - Route table for the pages the workflows navigate to
//! - Lenient serde adapters for ids and numbers the backend sends in mixed shapes

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
pub mod routes;
pub mod updates;
pub mod validation;

pub use errors::CoreError;
pub use routes::Route;
