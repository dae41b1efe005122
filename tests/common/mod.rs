#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use short_link_client::config::Config;
use tokio::net::TcpListener;

/// Requests received by a stand-in server, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

#[derive(Clone)]
struct StandIn {
    status: StatusCode,
    body: Value,
    received: Received,
}

async fn graphql_handler(
    State(stand_in): State<StandIn>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stand_in.received.lock().unwrap().push(request);
    (stand_in.status, Json(stand_in.body))
}

/// Starts a GraphQL endpoint on a random local port that answers every
/// `POST /graphql` with `status` and `body`.
///
/// Returns the base URL and the requests it receives.
pub async fn spawn_graphql_server(status: StatusCode, body: Value) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .with_state(StandIn {
            status,
            body,
            received: received.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

/// Base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(graphql_api_base_url: &str) -> Config {
    Config {
        graphql_api_base_url: graphql_api_base_url.to_string(),
        http_api_base_url: "https://api.short.test".to_string(),
        web_origin: "https://short.test".to_string(),
        chrome_extension_id: None,
        auth_token: Some("auth-token".to_string()),
        captcha_token: Some("captcha-token".to_string()),
        request_timeout_secs: 5,
        history_capacity: 10,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}
