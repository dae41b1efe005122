//! Input format validators for the short-link form.
//!
//! Both validators are pure: they return `Some(message)` describing the first
//! violated rule, or `None` when the input is acceptable.
//!
//! - [`long_link`] - The link being shortened
//! - [`custom_alias`] - The optional user-chosen alias

pub mod custom_alias;
pub mod long_link;

pub use custom_alias::{CUSTOM_ALIAS_MAX_LENGTH, validate_custom_alias_format};
pub use long_link::validate_long_link_format;
