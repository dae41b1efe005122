//! GraphQL transport for the short-link backend.
//!
//! Provides a [`GraphQlClient`] trait with one production implementation:
//! - [`HttpGraphQlClient`] - JSON-over-HTTP client built on `reqwest`

mod client;
mod http_client;

pub use client::{
    GraphQlClient, GraphQlError, GraphQlErrorExtensions, GraphQlRequest, GraphQlRequestError,
};
pub use http_client::HttpGraphQlClient;

#[cfg(test)]
pub use client::MockGraphQlClient;
