//! Display-ready error descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An error shaped for presentation: a short title and a longer explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayError {
    pub name: String,
    pub description: String,
}

impl DisplayError {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
