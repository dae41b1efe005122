//! HTTP implementation of the GraphQL client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::client::{GraphQlClient, GraphQlError, GraphQlRequest, GraphQlRequestError};

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// GraphQL client posting JSON requests over HTTP.
///
/// Connection failures, timeouts and non-success HTTP statuses are all
/// reported as [`GraphQlRequestError::Network`]; a well-formed response with
/// an `errors` array is reported as [`GraphQlRequestError::GraphQl`].
#[derive(Clone)]
pub struct HttpGraphQlClient {
    client: Client,
}

impl HttpGraphQlClient {
    /// Builds a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("short-link-client/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl GraphQlClient for HttpGraphQlClient {
    async fn mutate(
        &self,
        endpoint: &str,
        request: GraphQlRequest,
    ) -> Result<Value, GraphQlRequestError> {
        debug!(endpoint, "Sending GraphQL mutation");

        let response = self
            .client
            .post(endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GraphQlRequestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, %status, "GraphQL endpoint returned an error status");
            return Err(GraphQlRequestError::Network(format!(
                "GraphQL endpoint returned {status}"
            )));
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| GraphQlRequestError::MalformedResponse(e.to_string()))?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            debug!(count = errors.len(), "GraphQL response carried errors");
            return Err(GraphQlRequestError::GraphQl(errors));
        }

        body.data.ok_or_else(|| {
            GraphQlRequestError::MalformedResponse("response has neither data nor errors".into())
        })
    }
}
