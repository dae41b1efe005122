//! Core domain entities.
//!
//! - [`Url`] - A long link with an optional alias (draft or created record)
//! - [`DisplayError`] - A presentation-ready error with name and description
//! - [`HistoryEntry`] - A short link created during the current session

pub mod display_error;
pub mod history;
pub mod url;

pub use display_error::DisplayError;
pub use history::HistoryEntry;
pub use url::Url;
