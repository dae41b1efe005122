//! Error classes surfaced to the view layer.
//!
//! Every failure of the short-link flow is converted into one of three shapes
//! before it reaches presentation code:
//!
//! - [`AppError::Validation`] - rejected locally, shown next to the offending field
//! - [`AppError::Unauthorized`] - the auth token was refused, the user must sign in again
//! - [`AppError::Remote`] - network, backend or unknown failures, shown as a dismissible error

use std::fmt;

use crate::domain::entities::DisplayError;

/// Form field an input validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    LongLink,
    CustomAlias,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LongLink => f.write_str("long link"),
            Self::CustomAlias => f.write_str("custom alias"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("invalid {field}: {error}")]
    Validation {
        field: InputField,
        error: DisplayError,
    },

    #[error("authorization required: {message}")]
    Unauthorized { message: String },

    #[error("{0}")]
    Remote(DisplayError),
}

impl AppError {
    pub fn validation(field: InputField, description: impl Into<String>) -> Self {
        let name = match field {
            InputField::LongLink => "Invalid Long Link",
            InputField::CustomAlias => "Invalid Custom Alias",
        };
        Self::Validation {
            field,
            error: DisplayError::new(name, description),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn remote(error: DisplayError) -> Self {
        Self::Remote(error)
    }

    /// The descriptor to present, if this error is shown as a message.
    ///
    /// Authorization failures have none: they are handled by asking the user to
    /// sign in again.
    pub fn display_error(&self) -> Option<&DisplayError> {
        match self {
            Self::Validation { error, .. } | Self::Remote(error) => Some(error),
            Self::Unauthorized { .. } => None,
        }
    }
}
