//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the capabilities the application layer consumes.
//!
//! # Modules
//!
//! - [`graphql`] - GraphQL-over-HTTP transport
//! - [`captcha`] - Captcha token acquisition
//! - [`extension`] - Browser extension messaging

pub mod captcha;
pub mod extension;
pub mod graphql;
