//! Captcha provider trait and error types.

use async_trait::async_trait;

/// Captcha action name used when creating a short link.
pub const CREATE_SHORT_LINK: &str = "createShortLink";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptchaError {
    #[error("Captcha provider unavailable: {0}")]
    Unavailable(String),
}

/// Trait for obtaining a one-time proof-of-humanity token.
///
/// The token is bound to an action name such as [`CREATE_SHORT_LINK`] and is
/// consumed by a single backend call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaProvider: Send + Sync {
    async fn execute(&self, action: &str) -> Result<String, CaptchaError>;
}
