#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use zealous_core::compose::{BusinessProfile, OutboundMessage};
use zealous_core::routes::RouteTable;
use zealous_events::{EmailError, Mailer};

use zealous_api::config::ServerConfig;
use zealous_api::router::build_app_router;
use zealous_api::state::AppState;

/// Mailer that records every delivered message and can be told to fail.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    attempts: Mutex<usize>,
    /// 1-based send attempt that fails, if any.
    fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mailer whose `attempt`-th send fails with a transport-like error.
    pub fn failing_on(attempt: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some(attempt),
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), EmailError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_on == Some(attempt) {
            return Err(EmailError::Build("connection refused by test relay".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// The repository's `static/` directory.
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: static_dir(),
        secret_key: "test-secret".to_string(),
        business: BusinessProfile::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given mailer.
pub fn build_test_app(mailer: Arc<dyn Mailer>) -> Router {
    let state = AppState::new(test_config(), RouteTable::site(), mailer);
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a url-encoded form body.
pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(pairs).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn quote_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "Ayesha"),
        ("last_name", "Khan"),
        ("email", "ayesha@example.com"),
        ("phone", "+92 300 1234567"),
        ("company", "Acme Insurance"),
        ("service", "Inbound Call Centre"),
        ("message", ""),
    ]
}

pub fn contact_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Bilal"),
        ("email", "bilal@example.com"),
        ("phone", ""),
        ("subject", "Pricing"),
        ("message", "How much for ten seats?"),
    ]
}
