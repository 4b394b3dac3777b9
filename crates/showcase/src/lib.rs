//! Page routing and view-model assembly for the MentorAI showcase.
//!
//! Nothing in here performs I/O. [`Fixtures`] is built once at startup and
//! every view borrows from it.

pub mod fixtures;
pub mod routes;
pub mod views;

pub use fixtures::Fixtures;
pub use routes::{url_for, Page, Target};
