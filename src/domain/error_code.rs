//! Error codes reported by the short-link backend.
//!
//! The backend attaches a code to each GraphQL error under
//! `extensions.code`. Two extra codes, [`ErrorCode::NetworkError`] and
//! [`ErrorCode::Unknown`], are produced on the client side when no backend code
//! is available.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AliasAlreadyExist,
    UserNotHuman,
    InvalidLongLink,
    InvalidCustomAlias,
    MaliciousContent,
    Unauthenticated,
    UnauthorizedAction,
    NetworkError,
    Unknown,
}

impl ErrorCode {
    const ALL: [ErrorCode; 9] = [
        Self::AliasAlreadyExist,
        Self::UserNotHuman,
        Self::InvalidLongLink,
        Self::InvalidCustomAlias,
        Self::MaliciousContent,
        Self::Unauthenticated,
        Self::UnauthorizedAction,
        Self::NetworkError,
        Self::Unknown,
    ];

    /// Wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AliasAlreadyExist => "aliasAlreadyExist",
            Self::UserNotHuman => "requesterNotHuman",
            Self::InvalidLongLink => "invalidLongLink",
            Self::InvalidCustomAlias => "invalidCustomAlias",
            Self::MaliciousContent => "maliciousContent",
            Self::Unauthenticated => "invalidAuthToken",
            Self::UnauthorizedAction => "unauthorizedAction",
            Self::NetworkError => "networkError",
            Self::Unknown => "unknownError",
        }
    }

    /// Parses a backend code. Unrecognized codes map to [`ErrorCode::Unknown`].
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|known| known.as_str() == code)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
