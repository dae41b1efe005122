//! Captcha token acquisition.
//!
//! Provides a [`CaptchaProvider`] trait with one implementation:
//! - [`StaticCaptchaProvider`] - hands out a pre-issued token from configuration

mod provider;
mod static_provider;

pub use provider::{CREATE_SHORT_LINK, CaptchaError, CaptchaProvider};
pub use static_provider::StaticCaptchaProvider;

#[cfg(test)]
pub use provider::MockCaptchaProvider;
