//! # uniportal-session
//!
//! Local memory of the portal client: who is logged in, and how far the
//! student has got through semester registration.
//!
//! The document is a single JSON file (by default `~/.uniportal/session.json`)
//! written with owner-only permissions. All access goes through
//! [`SessionContext`], which is cloned into every workflow that needs it
//! instead of being reached through a global.

pub mod backend;
pub mod context;
pub mod document;
pub mod error;
pub mod token;

pub use backend::{FileBackend, MemoryBackend, StateBackend};
pub use context::SessionContext;
pub use document::{FeeReceipt, StoredState};
pub use error::SessionError;
