//! Short link creation service.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::services::{AuthService, ErrorService};
use crate::config::Config;
use crate::domain::ErrorCode;
use crate::domain::entities::{DisplayError, Url};
use crate::error::{AppError, InputField};
use crate::infrastructure::captcha::{CREATE_SHORT_LINK, CaptchaProvider};
use crate::infrastructure::graphql::{GraphQlClient, GraphQlRequest, GraphQlRequestError};
use crate::validators::{validate_custom_alias_format, validate_long_link_format};

const CREATE_URL_MUTATION: &str = r#"
  mutation params(
    $captchaResponse: String!
    $authToken: String!
    $urlInput: URLInput!
    $isPublic: Boolean!
  ) {
    authMutation(authToken: $authToken, captchaResponse: $captchaResponse) {
      createURL(url: $urlInput, isPublic: $isPublic) {
        alias
        originalURL
      }
    }
  }
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUrlData {
    auth_mutation: AuthMutationData,
}

#[derive(Debug, Deserialize)]
struct AuthMutationData {
    #[serde(rename = "createURL")]
    create_url: CreatedUrl,
}

#[derive(Debug, Deserialize)]
struct CreatedUrl {
    alias: Option<String>,
    #[serde(rename = "originalURL")]
    original_url: String,
}

impl From<CreatedUrl> for Url {
    fn from(created: CreatedUrl) -> Self {
        Url::new(created.original_url, created.alias)
    }
}

/// Service for creating short links through the GraphQL backend.
///
/// Validates input locally, obtains a captcha token, sends the `createURL`
/// mutation and converts every failure into an [`AppError`].
pub struct UrlService<G: GraphQlClient, C: CaptchaProvider> {
    graphql_client: Arc<G>,
    captcha_provider: Arc<C>,
    auth_service: Arc<AuthService>,
    error_service: ErrorService,
    graphql_endpoint: String,
    http_api_base_url: String,
    web_origin: String,
}

impl<G: GraphQlClient, C: CaptchaProvider> UrlService<G, C> {
    /// Creates a new url service.
    pub fn new(
        graphql_client: Arc<G>,
        captcha_provider: Arc<C>,
        auth_service: Arc<AuthService>,
        error_service: ErrorService,
        config: &Config,
    ) -> Self {
        Self {
            graphql_client,
            captcha_provider,
            auth_service,
            error_service,
            graphql_endpoint: config.graphql_endpoint(),
            http_api_base_url: config.http_api_base_url.trim_end_matches('/').to_string(),
            web_origin: config.web_origin.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a private short link for the editing url.
    ///
    /// # Errors
    ///
    /// See [`Self::create_short_link_with_visibility`].
    pub async fn create_short_link(&self, editing_url: &Url) -> Result<Url, AppError> {
        self.create_short_link_with_visibility(editing_url, false)
            .await
    }

    /// Creates a short link for the editing url.
    ///
    /// # Flow
    ///
    /// 1. Validate long link and custom alias (no network on failure)
    /// 2. Require an auth token
    /// 3. Obtain a captcha token
    /// 4. Send the mutation with the long link trimmed as validated; an empty
    ///    alias is sent as `null`
    /// 5. Map the created record back to [`Url`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input.
    ///
    /// Returns [`AppError::Unauthorized`] if no auth token is cached or the
    /// backend rejects it.
    ///
    /// Returns [`AppError::Remote`] for captcha, network, backend and unknown
    /// failures.
    pub async fn create_short_link_with_visibility(
        &self,
        editing_url: &Url,
        is_public: bool,
    ) -> Result<Url, AppError> {
        validate_inputs(editing_url)?;

        let auth_token = self
            .auth_service
            .auth_token()
            .ok_or_else(|| AppError::unauthorized("User is not signed in"))?;

        let captcha_response = self
            .captcha_provider
            .execute(CREATE_SHORT_LINK)
            .await
            .map_err(|e| {
                warn!("Captcha acquisition failed: {}", e);
                AppError::remote(DisplayError::new("Captcha failed", e.to_string()))
            })?;

        let alias = editing_url.requested_alias();
        let request = GraphQlRequest::new(
            CREATE_URL_MUTATION,
            json!({
                "captchaResponse": captcha_response,
                "authToken": auth_token,
                "urlInput": {
                    "originalURL": editing_url.original_url.trim(),
                    "customAlias": alias,
                },
                "isPublic": is_public,
            }),
        );

        debug!(alias = ?alias, is_public, "Creating short link");

        let data = self
            .graphql_client
            .mutate(&self.graphql_endpoint, request)
            .await
            .map_err(|e| self.classify(e))?;

        let created: CreateUrlData = serde_json::from_value(data).map_err(|e| {
            warn!("Unexpected createURL payload: {}", e);
            AppError::remote(self.error_service.get_err(ErrorCode::Unknown))
        })?;

        let url = Url::from(created.auth_mutation.create_url);
        info!(alias = ?url.alias, "Short link created");
        Ok(url)
    }

    /// User-facing short link, served by the web front end.
    pub fn alias_to_frontend_link(&self, alias: &str) -> String {
        format!("{}/r/{}", self.web_origin, alias)
    }

    /// Short link resolved directly by the backend.
    pub fn alias_to_backend_link(&self, alias: &str) -> String {
        format!("{}/r/{}", self.http_api_base_url, alias)
    }

    fn classify(&self, err: GraphQlRequestError) -> AppError {
        let code = match &err {
            GraphQlRequestError::Network(_) => ErrorCode::NetworkError,
            GraphQlRequestError::GraphQl(errors) => errors
                .first()
                .and_then(|e| e.code())
                .map(ErrorCode::from_code)
                .unwrap_or(ErrorCode::Unknown),
            GraphQlRequestError::MalformedResponse(_) => ErrorCode::Unknown,
        };

        warn!(code = %code, "createURL failed: {}", err);

        if code == ErrorCode::Unauthenticated {
            return AppError::unauthorized("User is not authenticated");
        }

        AppError::remote(self.error_service.get_err(code))
    }
}

fn validate_inputs(editing_url: &Url) -> Result<(), AppError> {
    if let Some(err) = validate_long_link_format(Some(&editing_url.original_url)) {
        return Err(AppError::validation(InputField::LongLink, err));
    }

    if let Some(err) = validate_custom_alias_format(editing_url.alias.as_deref()) {
        return Err(AppError::validation(InputField::CustomAlias, err));
    }

    Ok(())
}
