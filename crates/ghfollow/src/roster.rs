//! Flat CSV persistence for user lists.
//!
//! The format is deliberately minimal: a `Username,URL` header and one
//! `login,html_url` row per user. Fields are never quoted, so a comma inside
//! a field does not survive a round trip.

mod errors;
mod format;
mod store;

pub use errors::{Result, RosterError};
pub use format::{HEADER, parse_csv, render_csv};
pub use store::{load_csv, save_csv};
