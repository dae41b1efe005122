//! Url entity representing a short-link draft or a created short link.

use serde::{Deserialize, Serialize};

/// A long link paired with an optional alias.
///
/// The same shape is used for the user's in-progress draft and for the record
/// returned by the backend once the short link exists. An empty `original_url`
/// is representable here; it is rejected at submission time by the validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub original_url: String,
    pub alias: Option<String>,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(original_url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias,
        }
    }

    /// Returns the alias, treating an empty string as "no alias requested".
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}
