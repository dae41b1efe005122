//! Domain layer: the data the client works with.
//!
//! - [`entities`] - `Url`, `DisplayError` and session history records
//! - [`error_code`] - Error codes reported by the backend
//!
//! Nothing here depends on transport, configuration or presentation.

pub mod entities;
pub mod error_code;

pub use error_code::ErrorCode;
