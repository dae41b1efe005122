//! Session history entry for created short links.

use chrono::{DateTime, Utc};

use super::Url;

/// A short link created during the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: Url,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(url: Url, created_at: DateTime<Utc>) -> Self {
        Self { url, created_at }
    }

    /// Alias of the created link, empty when the backend returned none.
    pub fn alias(&self) -> &str {
        self.url.alias.as_deref().unwrap_or_default()
    }
}
