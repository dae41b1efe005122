//! Error classification: backend error codes to display-ready descriptors.

use crate::domain::ErrorCode;
use crate::domain::entities::DisplayError;

/// Static lookup from [`ErrorCode`] to the [`DisplayError`] shown to users.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorService;

impl ErrorService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_err(&self, code: ErrorCode) -> DisplayError {
        let (name, description) = match code {
            ErrorCode::AliasAlreadyExist => (
                "Alias not available",
                "The alias you chose is not available, please choose a different one. \
                 Leaving the custom alias empty will generate an available alias automatically.",
            ),
            ErrorCode::UserNotHuman => (
                "Are you human?",
                "We could not confirm that this request came from a person. Please try again.",
            ),
            ErrorCode::InvalidLongLink => (
                "Invalid Long Link",
                "The long link you entered was rejected. Please check it and try again.",
            ),
            ErrorCode::InvalidCustomAlias => (
                "Invalid Custom Alias",
                "The custom alias you entered was rejected. Please choose a different one.",
            ),
            ErrorCode::MaliciousContent => (
                "Malicious link",
                "The link you submitted appears to contain malicious content and cannot be shortened.",
            ),
            ErrorCode::Unauthenticated => (
                "Not signed in",
                "Your session is no longer valid. Please sign in again.",
            ),
            ErrorCode::UnauthorizedAction => (
                "Not allowed",
                "Your account is not allowed to perform this action.",
            ),
            ErrorCode::NetworkError => (
                "Network error",
                "The connection to the server was lost. Please check your network and try again.",
            ),
            ErrorCode::Unknown => (
                "Unknown error",
                "Something unexpected happened. Please try again later.",
            ),
        };

        DisplayError::new(name, description)
    }
}
