//! Application wiring.
//!
//! Builds the store, infrastructure clients and services from a [`Config`] and
//! hands them to the view controller.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::{
    AuthService, BrowserExtensionService, ErrorService, QrCodeService, SearchService,
    StaticConfigDecisionService, UrlService,
};
use crate::config::Config;
use crate::infrastructure::captcha::StaticCaptchaProvider;
use crate::infrastructure::extension::NullExtensionMessenger;
use crate::infrastructure::graphql::HttpGraphQlClient;
use crate::state::Store;
use crate::view::{HomeController, HomeRenderer};

/// Controller type used by the terminal front end.
pub type AppController =
    HomeController<HttpGraphQlClient, StaticCaptchaProvider, NullExtensionMessenger>;

/// Everything a front end needs, constructed once at startup.
pub struct App {
    pub config: Config,
    pub store: Arc<Store>,
    pub auth_service: Arc<AuthService>,
    pub qr_code_service: QrCodeService,
    pub controller: AppController,
}

impl App {
    /// Wires the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn build(config: Config, renderer: Arc<dyn HomeRenderer>) -> Result<Self> {
        let graphql_client = Arc::new(
            HttpGraphQlClient::new(config.request_timeout())
                .context("Failed to build GraphQL HTTP client")?,
        );
        let captcha_provider = Arc::new(StaticCaptchaProvider::new(config.captcha_token.clone()));
        let auth_service = Arc::new(AuthService::new(
            config.http_api_base_url.clone(),
            config.auth_token.clone(),
        ));

        let url_service = Arc::new(UrlService::new(
            graphql_client,
            captcha_provider,
            auth_service.clone(),
            ErrorService::new(),
            &config,
        ));
        let search_service = Arc::new(SearchService::new(config.history_capacity));
        let extension_service = BrowserExtensionService::new(
            Arc::new(NullExtensionMessenger::new()),
            config.chrome_extension_id.clone(),
        );
        let qr_code_service = QrCodeService::new();
        let store = Arc::new(Store::default());

        let controller = HomeController::new(
            store.clone(),
            url_service,
            auth_service.clone(),
            search_service,
            extension_service,
            Arc::new(StaticConfigDecisionService),
            qr_code_service,
            renderer,
        );

        tracing::info!("Application wired");

        Ok(Self {
            config,
            store,
            auth_service,
            qr_code_service,
            controller,
        })
    }
}
