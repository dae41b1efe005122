//! Captcha provider backed by a configured token.

use async_trait::async_trait;
use tracing::debug;

use super::provider::{CaptchaError, CaptchaProvider};

/// Returns the same pre-issued token for every action.
///
/// Terminal sessions cannot solve an interactive challenge, so the token is
/// obtained out of band and supplied through `CAPTCHA_TOKEN`.
pub struct StaticCaptchaProvider {
    token: Option<String>,
}

impl StaticCaptchaProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

#[async_trait]
impl CaptchaProvider for StaticCaptchaProvider {
    async fn execute(&self, action: &str) -> Result<String, CaptchaError> {
        debug!(action, "Issuing configured captcha token");

        self.token
            .clone()
            .ok_or_else(|| CaptchaError::Unavailable("CAPTCHA_TOKEN is not configured".into()))
    }
}
