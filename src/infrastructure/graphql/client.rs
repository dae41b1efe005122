//! GraphQL client trait and wire types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphQL operation posted as `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// One entry of the `errors` array of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl GraphQlError {
    /// Backend error code carried in `extensions.code`, if any.
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }
}

/// Failure of a GraphQL request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQlRequestError {
    /// The request never produced a GraphQL response (connection, timeout, HTTP status).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-empty `errors` array.
    #[error("GraphQL request failed with {} error(s)", .0.len())]
    GraphQl(Vec<GraphQlError>),

    /// The server answered, but with neither `data` nor `errors`.
    #[error("Malformed GraphQL response: {0}")]
    MalformedResponse(String),
}

/// Trait for executing GraphQL mutations against an endpoint.
///
/// Returns the `data` member of a successful response.
///
/// # Implementations
///
/// - [`crate::infrastructure::graphql::HttpGraphQlClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    async fn mutate(
        &self,
        endpoint: &str,
        request: GraphQlRequest,
    ) -> Result<Value, GraphQlRequestError>;
}
