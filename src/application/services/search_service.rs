//! Autocomplete search over short links created in this session.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::domain::entities::{HistoryEntry, Url};

/// Maximum number of suggestions returned for one query.
const MAX_SUGGESTIONS: usize = 5;

/// Bounded, most-recent-first history of created links.
pub struct SearchService {
    capacity: usize,
    history: Mutex<VecDeque<HistoryEntry>>,
}

impl SearchService {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::new()),
        }
    }

    /// Records a created link. A previous entry with the same alias is replaced.
    pub fn record(&self, url: Url) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(alias) = url.alias.as_deref() {
            history.retain(|entry| entry.alias() != alias);
        }

        history.push_front(HistoryEntry::new(url, Utc::now()));
        history.truncate(self.capacity);
    }

    /// Returns entries whose alias starts with `alias_prefix`, ignoring case,
    /// most recent first.
    ///
    /// A blank query yields no suggestions.
    pub fn get_auto_complete_suggestions(&self, alias_prefix: &str) -> Vec<HistoryEntry> {
        let prefix = alias_prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.alias().to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}
