//! Home view: the short-link creation form.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::application::services::{
    AuthService, BrowserExtensionService, FeatureDecisionService, QrCodeService, SearchService,
    SignInProvider, UrlService,
};
use crate::domain::entities::{DisplayError, HistoryEntry, Url};
use crate::error::AppError;
use crate::infrastructure::captcha::CaptchaProvider;
use crate::infrastructure::extension::ExtensionMessenger;
use crate::infrastructure::graphql::GraphQlClient;
use crate::state::{Action, AppState, Listener, Store, SubscriptionId};
use crate::validators::{validate_custom_alias_format, validate_long_link_format};

/// Query parameter used to pre-fill the long link field.
const LONG_LINK_PARAM: &str = "long_link";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInLink {
    pub provider: SignInProvider,
    pub link: String,
}

/// Everything the home view displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    pub is_user_signed_in: bool,
    pub sign_in_links: Vec<SignInLink>,
    pub should_show_promo: bool,
    pub long_link: String,
    pub alias: Option<String>,
    pub created_url: Option<Url>,
    pub short_link: Option<String>,
    pub qr_code_url: Option<String>,
    pub input_err: Option<String>,
    pub err: Option<DisplayError>,
    pub auto_complete_suggestions: Vec<HistoryEntry>,
}

impl HomeView {
    /// Copies store state into the view, deriving the short link and its QR code.
    ///
    /// The QR code is only re-rendered when the short link changes.
    fn apply(
        &mut self,
        state: &AppState,
        short_link_for: impl Fn(&str) -> String,
        qr_code_service: &QrCodeService,
    ) {
        self.long_link = state.editing_url.original_url.clone();
        self.alias = state.editing_url.alias.clone();
        self.created_url = state.created_url.clone();
        self.input_err = state.input_err.clone();
        self.err = state.err.clone();

        let alias = state
            .created_url
            .as_ref()
            .and_then(|url| url.requested_alias());

        let Some(alias) = alias else {
            self.short_link = None;
            self.qr_code_url = None;
            return;
        };

        let short_link = short_link_for(alias);
        if self.short_link.as_deref() != Some(short_link.as_str()) {
            self.qr_code_url = qr_code_service
                .new_qr_code(&short_link)
                .inspect_err(|e| warn!("QR code unavailable: {}", e))
                .ok();
            self.short_link = Some(short_link);
        }
    }
}

/// Presents a [`HomeView`]. Called after every change.
pub trait HomeRenderer: Send + Sync {
    fn render(&self, view: &HomeView);
}

/// Result of pressing "create" on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(Url),
    /// The auth token was missing or refused; the user was signed out.
    SignInRequired,
    /// Validation or remote failure, already dispatched to the store.
    Failed(AppError),
}

/// Binds the home view to the store and services.
///
/// Input handlers dispatch actions; a store subscription keeps the
/// [`HomeView`] in sync and hands it to the renderer.
pub struct HomeController<G, C, M>
where
    G: GraphQlClient + 'static,
    C: CaptchaProvider + 'static,
    M: ExtensionMessenger,
{
    store: Arc<Store>,
    url_service: Arc<UrlService<G, C>>,
    auth_service: Arc<AuthService>,
    search_service: Arc<SearchService>,
    extension_service: BrowserExtensionService<M>,
    feature_decision: Arc<dyn FeatureDecisionService>,
    qr_code_service: QrCodeService,
    renderer: Arc<dyn HomeRenderer>,
    view: Arc<RwLock<HomeView>>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl<G, C, M> HomeController<G, C, M>
where
    G: GraphQlClient + 'static,
    C: CaptchaProvider + 'static,
    M: ExtensionMessenger,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<Store>,
        url_service: Arc<UrlService<G, C>>,
        auth_service: Arc<AuthService>,
        search_service: Arc<SearchService>,
        extension_service: BrowserExtensionService<M>,
        feature_decision: Arc<dyn FeatureDecisionService>,
        qr_code_service: QrCodeService,
        renderer: Arc<dyn HomeRenderer>,
    ) -> Self {
        Self {
            store,
            url_service,
            auth_service,
            search_service,
            extension_service,
            feature_decision,
            qr_code_service,
            renderer,
            view: Arc::new(RwLock::new(HomeView::default())),
            subscription: Mutex::new(None),
        }
    }

    /// Starts the view for the page location's query string.
    ///
    /// Decides whether to show the extension promo, then caches an auth token
    /// from a sign-in redirect. Signed-out users get the sign-in links;
    /// signed-in users get a store subscription and, if the query carries a
    /// valid `long_link`, a pre-filled form.
    ///
    /// Returns whether the user is signed in.
    pub async fn mount(&self, location_query: &str) -> bool {
        self.set_promo_display_status().await;

        self.auth_service.cache_auth_token(location_query);

        if !self.auth_service.is_signed_in() {
            self.request_sign_in();
            return false;
        }

        self.update_view(|view| {
            view.is_user_signed_in = true;
            view.sign_in_links.clear();
        });
        self.handle_state_change();
        self.auto_fill_long_link(location_query);
        true
    }

    /// Removes the store subscription.
    pub fn unmount(&self) {
        let id = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(id) = id {
            self.store.unsubscribe(id);
        }
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> HomeView {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn url_service(&self) -> &UrlService<G, C> {
        &self.url_service
    }

    /// Decides whether to advertise the browser extension.
    pub async fn set_promo_display_status(&self) {
        let should_show_promo = self.extension_service.should_show_promo().await;
        self.update_view(|view| view.should_show_promo = should_show_promo);
    }

    /// Pre-fills the long link from the `long_link` query parameter when it is valid.
    pub fn auto_fill_long_link(&self, location_query: &str) {
        let long_link =
            url::form_urlencoded::parse(location_query.trim_start_matches('?').as_bytes())
                .find(|(key, _)| key == LONG_LINK_PARAM)
                .map(|(_, value)| value.into_owned());

        if validate_long_link_format(long_link.as_deref()).is_some() {
            return;
        }
        if let Some(long_link) = long_link {
            debug!("Pre-filling long link from query");
            self.store.dispatch(Action::UpdateLongLink(long_link));
        }
    }

    pub fn on_long_link_change(&self, long_link: impl Into<String>) {
        self.store.dispatch(Action::UpdateLongLink(long_link.into()));
    }

    pub fn on_alias_change(&self, alias: impl Into<String>) {
        self.store.dispatch(Action::UpdateAlias(alias.into()));
    }

    pub fn on_long_link_blur(&self) {
        let long_link = self.store.state().editing_url.original_url;
        let err = validate_long_link_format(Some(&long_link));
        self.store.dispatch(Action::RaiseInputError(err));
    }

    pub fn on_alias_blur(&self) {
        let alias = self.store.state().editing_url.alias;
        let err = validate_custom_alias_format(alias.as_deref());
        self.store.dispatch(Action::RaiseInputError(err));
    }

    /// Dismisses the error dialog.
    pub fn on_err_close(&self) {
        self.store.dispatch(Action::ClearError);
    }

    pub fn on_sign_out(&self) {
        self.request_sign_in();
    }

    /// Submits the editing url.
    ///
    /// Success records the link for search and dispatches it. Validation errors
    /// are shown inline, remote errors in the error dialog, and authorization
    /// failures sign the user out.
    pub async fn on_create_short_link(&self, is_public: bool) -> CreateOutcome {
        let editing_url = self.store.state().editing_url;

        match self
            .url_service
            .create_short_link_with_visibility(&editing_url, is_public)
            .await
        {
            Ok(created) => {
                self.search_service.record(created.clone());
                self.store.dispatch(Action::UpdateCreatedUrl(created.clone()));
                CreateOutcome::Created(created)
            }
            Err(AppError::Unauthorized { .. }) => {
                self.request_sign_in();
                CreateOutcome::SignInRequired
            }
            Err(err @ AppError::Validation { .. }) => {
                let message = err.display_error().map(|e| e.description.clone());
                self.store.dispatch(Action::RaiseInputError(message));
                CreateOutcome::Failed(err)
            }
            Err(err @ AppError::Remote(_)) => {
                if let Some(display) = err.display_error() {
                    self.store
                        .dispatch(Action::RaiseCreateShortLinkError(display.clone()));
                }
                CreateOutcome::Failed(err)
            }
        }
    }

    /// Updates autocomplete suggestions for the search bar.
    pub fn on_search_input(&self, alias_prefix: &str) -> Vec<HistoryEntry> {
        if !self.feature_decision.include_search_bar() {
            return Vec::new();
        }

        let suggestions = self
            .search_service
            .get_auto_complete_suggestions(alias_prefix);
        let shown = suggestions.clone();
        self.update_view(|view| view.auto_complete_suggestions = shown);
        suggestions
    }

    /// Signs the user out and offers the enabled sign-in providers.
    pub fn request_sign_in(&self) {
        self.auth_service.sign_out();

        let sign_in_links = self
            .feature_decision
            .sign_in_providers()
            .into_iter()
            .map(|provider| SignInLink {
                provider,
                link: self.auth_service.sign_in_link(provider),
            })
            .collect();

        self.update_view(|view| {
            view.is_user_signed_in = false;
            view.sign_in_links = sign_in_links;
        });
    }

    fn handle_state_change(&self) {
        let mut subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if subscription.is_some() {
            return;
        }

        let view = Arc::clone(&self.view);
        let renderer = Arc::clone(&self.renderer);
        let url_service = Arc::clone(&self.url_service);
        let qr_code_service = self.qr_code_service;

        let listener: Listener = Arc::new(move |state: &AppState| {
            let snapshot = {
                let mut view = view.write().unwrap_or_else(PoisonError::into_inner);
                view.apply(
                    state,
                    |alias| url_service.alias_to_frontend_link(alias),
                    &qr_code_service,
                );
                view.clone()
            };
            renderer.render(&snapshot);
        });

        *subscription = Some(self.store.subscribe(listener));
    }

    fn update_view(&self, update: impl FnOnce(&mut HomeView)) {
        let snapshot = {
            let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);
            update(&mut view);
            view.clone()
        };
        self.renderer.render(&snapshot);
    }
}

impl<G, C, M> Drop for HomeController<G, C, M>
where
    G: GraphQlClient + 'static,
    C: CaptchaProvider + 'static,
    M: ExtensionMessenger,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{ErrorService, StaticConfigDecisionService};
    use crate::config::tests::test_config;
    use crate::domain::ErrorCode;
    use crate::infrastructure::captcha::MockCaptchaProvider;
    use crate::infrastructure::extension::{MockExtensionMessenger, NullExtensionMessenger};
    use crate::infrastructure::graphql::{
        GraphQlError, GraphQlErrorExtensions, GraphQlRequestError, MockGraphQlClient,
    };
    use serde_json::json;

    #[derive(Default)]
    struct RecordingRenderer {
        views: Mutex<Vec<HomeView>>,
    }

    impl HomeRenderer for RecordingRenderer {
        fn render(&self, view: &HomeView) {
            self.views.lock().unwrap().push(view.clone());
        }
    }

    struct Fixture<M: ExtensionMessenger = NullExtensionMessenger> {
        controller: HomeController<MockGraphQlClient, MockCaptchaProvider, M>,
        store: Arc<Store>,
        search_service: Arc<SearchService>,
        renderer: Arc<RecordingRenderer>,
    }

    fn fixture(graphql: MockGraphQlClient, auth_token: Option<&str>) -> Fixture {
        fixture_with_extension(
            graphql,
            auth_token,
            BrowserExtensionService::new(Arc::new(NullExtensionMessenger::new()), None),
        )
    }

    fn fixture_with_extension<M: ExtensionMessenger>(
        graphql: MockGraphQlClient,
        auth_token: Option<&str>,
        extension_service: BrowserExtensionService<M>,
    ) -> Fixture<M> {
        let config = test_config();
        let mut captcha = MockCaptchaProvider::new();
        captcha
            .expect_execute()
            .returning(|_| Ok("captcha-token".to_string()));

        let store = Arc::new(Store::default());
        let auth_service = Arc::new(AuthService::new(
            config.http_api_base_url.clone(),
            auth_token.map(str::to_string),
        ));
        let url_service = Arc::new(UrlService::new(
            Arc::new(graphql),
            Arc::new(captcha),
            auth_service.clone(),
            ErrorService::new(),
            &config,
        ));
        let search_service = Arc::new(SearchService::new(10));
        let renderer = Arc::new(RecordingRenderer::default());

        let controller = HomeController::new(
            store.clone(),
            url_service,
            auth_service,
            search_service.clone(),
            extension_service,
            Arc::new(StaticConfigDecisionService),
            QrCodeService::new(),
            renderer.clone(),
        );

        Fixture {
            controller,
            store,
            search_service,
            renderer,
        }
    }

    fn created_response() -> MockGraphQlClient {
        let mut graphql = MockGraphQlClient::new();
        graphql.expect_mutate().returning(|_, _| {
            Ok(json!({
                "authMutation": {
                    "createURL": { "alias": "abc", "originalURL": "https://example.com" }
                }
            }))
        });
        graphql
    }

    #[tokio::test]
    async fn test_mount_signed_out_offers_sign_in() {
        let f = fixture(MockGraphQlClient::new(), None);

        assert!(!f.controller.mount("").await);

        let view = f.controller.view();
        assert!(!view.is_user_signed_in);
        let providers: Vec<_> = view.sign_in_links.iter().map(|l| l.provider).collect();
        assert_eq!(
            providers,
            vec![SignInProvider::Google, SignInProvider::Facebook]
        );
        assert_eq!(
            view.sign_in_links[0].link,
            "https://api.short.test/oauth/google/sign-in"
        );
    }

    #[tokio::test]
    async fn test_mount_caches_token_from_redirect() {
        let f = fixture(MockGraphQlClient::new(), None);

        assert!(f.controller.mount("?token=from-redirect").await);
        assert!(f.controller.view().is_user_signed_in);
    }

    #[tokio::test]
    async fn test_mount_auto_fills_valid_long_link() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));

        f.controller
            .mount("?long_link=https%3A%2F%2Fexample.com%2Fpage")
            .await;

        assert_eq!(
            f.store.state().editing_url.original_url,
            "https://example.com/page"
        );
        assert_eq!(f.controller.view().long_link, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_mount_ignores_invalid_long_link() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));

        f.controller.mount("?long_link=not-a-link").await;

        assert!(f.store.state().editing_url.original_url.is_empty());
    }

    #[tokio::test]
    async fn test_input_changes_flow_into_view() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));
        f.controller.mount("").await;

        f.controller.on_long_link_change("https://example.com");
        f.controller.on_alias_change("mine");

        let view = f.controller.view();
        assert_eq!(view.long_link, "https://example.com");
        assert_eq!(view.alias.as_deref(), Some("mine"));
        assert!(f.renderer.views.lock().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_blur_validation_raises_and_clears_input_error() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));
        f.controller.mount("").await;

        f.controller.on_long_link_blur();
        assert!(f.controller.view().input_err.is_some());

        f.controller.on_long_link_change("https://example.com");
        f.controller.on_long_link_blur();
        assert!(f.controller.view().input_err.is_none());

        f.controller.on_alias_change("bad alias");
        f.controller.on_alias_blur();
        assert!(f.controller.view().input_err.is_some());
    }

    #[tokio::test]
    async fn test_create_short_link_updates_view() {
        let f = fixture(created_response(), Some("auth-token"));
        f.controller.mount("").await;
        f.controller.on_long_link_change("https://example.com");

        let outcome = f.controller.on_create_short_link(false).await;

        assert_eq!(
            outcome,
            CreateOutcome::Created(Url::new("https://example.com", Some("abc".to_string())))
        );
        let view = f.controller.view();
        assert_eq!(view.short_link.as_deref(), Some("https://short.test/r/abc"));
        assert!(
            view.qr_code_url
                .as_deref()
                .is_some_and(|qr| qr.starts_with("data:image/svg+xml;base64,"))
        );
        assert_eq!(f.search_service.get_auto_complete_suggestions("a").len(), 1);
    }

    #[tokio::test]
    async fn test_create_with_invalid_input_shows_inline_error() {
        let mut graphql = MockGraphQlClient::new();
        graphql.expect_mutate().times(0);
        let f = fixture(graphql, Some("auth-token"));
        f.controller.mount("").await;

        let outcome = f.controller.on_create_short_link(false).await;

        assert!(matches!(outcome, CreateOutcome::Failed(AppError::Validation { .. })));
        let view = f.controller.view();
        assert!(view.input_err.is_some());
        assert!(view.err.is_none());
    }

    #[tokio::test]
    async fn test_create_remote_error_shows_dialog_until_closed() {
        let mut graphql = MockGraphQlClient::new();
        graphql.expect_mutate().returning(|_, _| {
            Err(GraphQlRequestError::GraphQl(vec![GraphQlError {
                message: "taken".to_string(),
                extensions: Some(GraphQlErrorExtensions {
                    code: Some("aliasAlreadyExist".to_string()),
                }),
            }]))
        });
        let f = fixture(graphql, Some("auth-token"));
        f.controller.mount("").await;
        f.controller.on_long_link_change("https://example.com");
        f.controller.on_alias_change("taken");

        f.controller.on_create_short_link(false).await;

        assert_eq!(
            f.controller.view().err,
            Some(ErrorService::new().get_err(ErrorCode::AliasAlreadyExist))
        );

        f.controller.on_err_close();
        assert!(f.controller.view().err.is_none());
    }

    #[tokio::test]
    async fn test_create_unauthorized_requests_sign_in() {
        let mut graphql = MockGraphQlClient::new();
        graphql.expect_mutate().returning(|_, _| {
            Err(GraphQlRequestError::GraphQl(vec![GraphQlError {
                message: "bad token".to_string(),
                extensions: Some(GraphQlErrorExtensions {
                    code: Some("invalidAuthToken".to_string()),
                }),
            }]))
        });
        let f = fixture(graphql, Some("expired"));
        f.controller.mount("").await;
        f.controller.on_long_link_change("https://example.com");

        let outcome = f.controller.on_create_short_link(false).await;

        assert_eq!(outcome, CreateOutcome::SignInRequired);
        let view = f.controller.view();
        assert!(!view.is_user_signed_in);
        assert!(!view.sign_in_links.is_empty());
        assert!(view.err.is_none());
    }

    #[test]
    fn test_search_input_updates_suggestions() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));
        f.search_service
            .record(Url::new("https://example.com", Some("docs".to_string())));

        let suggestions = f.controller.on_search_input("do");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(f.controller.view().auto_complete_suggestions, suggestions);
    }

    #[tokio::test]
    async fn test_unmount_stops_view_updates() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));
        f.controller.mount("").await;

        f.controller.unmount();
        f.controller.on_long_link_change("https://example.com");

        assert!(f.controller.view().long_link.is_empty());
    }

    #[tokio::test]
    async fn test_promo_hidden_without_extension_support() {
        let f = fixture(MockGraphQlClient::new(), Some("auth-token"));

        f.controller.set_promo_display_status().await;

        assert!(!f.controller.view().should_show_promo);
    }

    #[tokio::test]
    async fn test_mount_shows_promo_when_extension_missing() {
        let mut messenger = MockExtensionMessenger::new();
        messenger.expect_is_supported().return_const(true);
        messenger.expect_send_message().times(1).returning(|_, _| None);
        let extension_service =
            BrowserExtensionService::new(Arc::new(messenger), Some("ext-id".to_string()));
        let f = fixture_with_extension(MockGraphQlClient::new(), None, extension_service);

        f.controller.mount("").await;

        let view = f.controller.view();
        assert!(view.should_show_promo);
        assert!(!view.is_user_signed_in);
    }

    #[tokio::test]
    async fn test_mount_hides_promo_when_extension_installed() {
        let mut messenger = MockExtensionMessenger::new();
        messenger.expect_is_supported().return_const(true);
        messenger
            .expect_send_message()
            .times(1)
            .returning(|_, _| Some(json!({ "message": "PONG" })));
        let extension_service =
            BrowserExtensionService::new(Arc::new(messenger), Some("ext-id".to_string()));
        let f = fixture_with_extension(
            MockGraphQlClient::new(),
            Some("auth-token"),
            extension_service,
        );

        f.controller.mount("").await;

        assert!(!f.controller.view().should_show_promo);
    }
}
