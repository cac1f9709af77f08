//! # uniportal-workflow
//!
//! Page controllers for the university portal. Each page is a short,
//! explicit sequence of client calls and session-store updates:
//!
//! - [`auth`]: login, logout, session status
//! - [`dashboard`]: admin, faculty and student landing pages
//! - [`forms`]: create / edit / remove pages for students, faculty, courses
//!   and calendar entries (see [`records`])
//! - [`registration`]: the three-step semester registration flow
//! - [`fees`]: fee approval
//! - [`announcements`], [`calendar`], [`applications`]
//!
//! Every controller takes a [`Portal`]; nothing reads global state.

pub mod announcements;
pub mod applications;
pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod fees;
pub mod forms;
pub mod records;
pub mod registration;

mod error;
mod portal;

pub use error::{ErrorKind, PortalError};
pub use portal::{Portal, Redirect, Step};
