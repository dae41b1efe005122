mod common;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;
use short_link_client::app::App;
use short_link_client::domain::entities::Url;
use short_link_client::view::{CreateOutcome, HomeRenderer, HomeView};

#[derive(Default)]
struct RecordingRenderer {
    views: Mutex<Vec<HomeView>>,
}

impl HomeRenderer for RecordingRenderer {
    fn render(&self, view: &HomeView) {
        self.views.lock().unwrap().push(view.clone());
    }
}

fn created(alias: &str, original_url: &str) -> serde_json::Value {
    json!({
        "data": {
            "authMutation": {
                "createURL": { "alias": alias, "originalURL": original_url }
            }
        }
    })
}

#[tokio::test]
async fn test_create_short_link_end_to_end() {
    let (base_url, received) =
        common::spawn_graphql_server(StatusCode::OK, created("docs", "https://example.com/docs"))
            .await;
    let renderer = Arc::new(RecordingRenderer::default());
    let app = App::build(common::test_config(&base_url), renderer.clone()).unwrap();

    assert!(app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com/docs");
    app.controller.on_alias_change("docs");

    let outcome = app.controller.on_create_short_link(false).await;

    assert_eq!(
        outcome,
        CreateOutcome::Created(Url::new(
            "https://example.com/docs",
            Some("docs".to_string())
        ))
    );

    let view = app.controller.view();
    assert_eq!(view.short_link.as_deref(), Some("https://short.test/r/docs"));
    assert!(
        view.qr_code_url
            .as_deref()
            .is_some_and(|url| url.starts_with("data:image/svg+xml;base64,"))
    );
    assert!(view.err.is_none());
    assert!(renderer.views.lock().unwrap().len() >= 3);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let variables = &received[0]["variables"];
    assert_eq!(variables["authToken"], "auth-token");
    assert_eq!(variables["captchaResponse"], "captcha-token");
    assert_eq!(variables["urlInput"]["originalURL"], "https://example.com/docs");
    assert_eq!(variables["urlInput"]["customAlias"], "docs");
    assert_eq!(variables["isPublic"], false);
}

#[tokio::test]
async fn test_empty_alias_is_sent_as_null() {
    let (base_url, received) =
        common::spawn_graphql_server(StatusCode::OK, created("Xy12", "https://example.com"))
            .await;
    let app = App::build(
        common::test_config(&base_url),
        Arc::new(RecordingRenderer::default()),
    )
    .unwrap();

    assert!(app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com");
    app.controller.on_alias_change("");

    let outcome = app.controller.on_create_short_link(true).await;

    assert!(matches!(outcome, CreateOutcome::Created(_)));
    let received = received.lock().unwrap();
    assert!(received[0]["variables"]["urlInput"]["customAlias"].is_null());
    assert_eq!(received[0]["variables"]["isPublic"], true);

    let suggestions = app.controller.on_search_input("xy");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].alias(), "Xy12");
}

#[tokio::test]
async fn test_backend_error_is_shown_in_dialog() {
    let (base_url, _) = common::spawn_graphql_server(
        StatusCode::OK,
        json!({
            "data": null,
            "errors": [
                { "message": "taken", "extensions": { "code": "aliasAlreadyExist" } }
            ]
        }),
    )
    .await;
    let app = App::build(
        common::test_config(&base_url),
        Arc::new(RecordingRenderer::default()),
    )
    .unwrap();

    assert!(app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com");
    app.controller.on_alias_change("taken");

    let outcome = app.controller.on_create_short_link(false).await;

    assert!(matches!(outcome, CreateOutcome::Failed(_)));
    let err = app.store.state().err.unwrap();
    assert_eq!(err.name, "Alias not available");

    app.controller.on_err_close();
    assert!(app.store.state().err.is_none());
    assert!(app.controller.view().err.is_none());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let base_url = common::closed_base_url().await;
    let app = App::build(
        common::test_config(&base_url),
        Arc::new(RecordingRenderer::default()),
    )
    .unwrap();

    assert!(app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com");

    let outcome = app.controller.on_create_short_link(false).await;

    assert!(matches!(outcome, CreateOutcome::Failed(_)));
    assert_eq!(app.store.state().err.unwrap().name, "Network error");
}

#[tokio::test]
async fn test_rejected_auth_token_signs_user_out() {
    let (base_url, _) = common::spawn_graphql_server(
        StatusCode::OK,
        json!({
            "errors": [
                { "message": "bad token", "extensions": { "code": "invalidAuthToken" } }
            ]
        }),
    )
    .await;
    let app = App::build(
        common::test_config(&base_url),
        Arc::new(RecordingRenderer::default()),
    )
    .unwrap();

    assert!(app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com");

    let outcome = app.controller.on_create_short_link(false).await;

    assert_eq!(outcome, CreateOutcome::SignInRequired);
    assert!(!app.auth_service.is_signed_in());
    let view = app.controller.view();
    assert!(!view.is_user_signed_in);
    assert!(!view.sign_in_links.is_empty());
}

#[tokio::test]
async fn test_signed_out_user_never_reaches_backend() {
    let (base_url, received) =
        common::spawn_graphql_server(StatusCode::OK, created("abc", "https://example.com"))
            .await;
    let mut config = common::test_config(&base_url);
    config.auth_token = None;
    let app = App::build(config, Arc::new(RecordingRenderer::default())).unwrap();

    assert!(!app.controller.mount("").await);
    app.controller.on_long_link_change("https://example.com");

    let outcome = app.controller.on_create_short_link(false).await;

    assert_eq!(outcome, CreateOutcome::SignInRequired);
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sign_in_redirect_token_and_auto_fill() {
    let (base_url, _) =
        common::spawn_graphql_server(StatusCode::OK, created("abc", "https://example.com"))
            .await;
    let mut config = common::test_config(&base_url);
    config.auth_token = None;
    let app = App::build(config, Arc::new(RecordingRenderer::default())).unwrap();

    let signed_in = app
        .controller
        .mount("?token=fresh-token&long_link=https%3A%2F%2Fexample.com%2Fpage")
        .await;

    assert!(signed_in);
    assert_eq!(app.auth_service.auth_token().as_deref(), Some("fresh-token"));
    assert_eq!(
        app.store.state().editing_url.original_url,
        "https://example.com/page"
    );
}
