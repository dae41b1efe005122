//! # Short Link Client
//!
//! Client for a GraphQL URL shortening service: turn a long link (and an
//! optional custom alias) into a short link, show its QR code, search the links
//! created in a session, and sign in through third-party providers.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - `Url`, `DisplayError` and backend error codes
//! - **Validators** ([`validators`]) - Pure long link and alias format checks
//! - **Application** ([`application`]) - Creation flow, error classification, auth, QR, search
//! - **Infrastructure** ([`infrastructure`]) - GraphQL over HTTP, captcha, extension messaging
//! - **State** ([`state`]) - Action-driven store with subscribers
//! - **View** ([`view`]) - Controller projecting store state for a renderer
//!
//! ## Creation Flow
//!
//! 1. The view dispatches input actions to the [`state::Store`]
//! 2. On submit, [`application::services::UrlService`] validates, fetches a
//!    captcha token and sends the `createURL` mutation
//! 3. The outcome is dispatched back as a created url or an error
//! 4. Subscribers re-render from the new state
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod validators;
pub mod view;

pub use error::AppError;
pub use state::{AppState, Store};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ErrorService, UrlService};
    pub use crate::domain::ErrorCode;
    pub use crate::domain::entities::{DisplayError, Url};
    pub use crate::error::{AppError, InputField};
    pub use crate::state::{Action, AppState, Store};
}
