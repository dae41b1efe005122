//! Session authentication: auth token caching and third-party sign-in links.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};

/// Query parameter carrying the auth token after a sign-in redirect.
const AUTH_TOKEN_PARAM: &str = "token";

/// Third-party identity providers offered for sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInProvider {
    Github,
    Google,
    Facebook,
}

impl SignInProvider {
    pub const ALL: [SignInProvider; 3] = [Self::Github, Self::Google, Self::Facebook];

    fn path_segment(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SignInProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Github => f.write_str("GitHub"),
            Self::Google => f.write_str("Google"),
            Self::Facebook => f.write_str("Facebook"),
        }
    }
}

/// Holds the auth token for the current session.
///
/// The token is issued by the backend after a third-party sign-in and handed
/// back on the redirect URL. It is sent with every authenticated mutation.
pub struct AuthService {
    http_api_base_url: String,
    auth_token: RwLock<Option<String>>,
}

impl AuthService {
    /// Creates an auth service, optionally seeded with a previously issued token.
    pub fn new(http_api_base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            http_api_base_url: http_api_base_url.into(),
            auth_token: RwLock::new(auth_token.filter(|t| !t.is_empty())),
        }
    }

    /// Caches the auth token found in a sign-in redirect query string.
    ///
    /// Accepts the query with or without its leading `?`. Returns `true` if a
    /// token was found and cached; an existing token is kept otherwise.
    pub fn cache_auth_token(&self, query: &str) -> bool {
        let token = url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == AUTH_TOKEN_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        let Some(token) = token else {
            debug!("No auth token in sign-in redirect");
            return false;
        };

        *self
            .auth_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
        info!("Auth token cached");
        true
    }

    pub fn auth_token(&self) -> Option<String> {
        self.auth_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Forgets the cached auth token.
    pub fn sign_out(&self) {
        self.auth_token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        info!("Signed out");
    }

    /// Link that starts the OAuth flow with the given provider.
    pub fn sign_in_link(&self, provider: SignInProvider) -> String {
        format!(
            "{}/oauth/{}/sign-in",
            self.http_api_base_url.trim_end_matches('/'),
            provider.path_segment()
        )
    }
}
