//! Shared utilities for integration testing: programmable mock upstreams
//! and a relay bound to an ephemeral port.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use openai_relay::relay::UpstreamClient;
use openai_relay::{RelayConfig, RelayServer, Shutdown};

pub const UPSTREAM_PATH: &str = "/v1/chat/completions";
pub const TEST_KEY: &str = "sk-test-key";

/// A request as the mock upstream saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

type Responder =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = (u16, String)> + Send>> + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, UPSTREAM_PATH)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn mock_handler(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    let parsed = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .captured
        .lock()
        .unwrap()
        .push(CapturedRequest { headers, body });

    let (status, body) = (state.responder)(parsed).await;
    (StatusCode::from_u16(status).unwrap(), body).into_response()
}

/// Start a mock upstream whose reply is computed from the request JSON.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> MockUpstream
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        responder: Arc::new(
            move |request: Value| -> Pin<Box<dyn Future<Output = (u16, String)> + Send>> {
                Box::pin(f(request))
            },
        ),
        captured: captured.clone(),
    };
    let app = Router::new()
        .route(UPSTREAM_PATH, post(mock_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, captured }
}

/// Start a mock upstream that always returns the same status and body.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_programmable_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, UPSTREAM_PATH)
}

pub fn relay_config(upstream_url: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.url = upstream_url.to_string();
    config.upstream.api_key = openai_relay::config::ApiKey::new(TEST_KEY);
    config
}

pub struct TestRelay {
    pub base_url: String,
    pub shutdown: Shutdown,
}

impl TestRelay {
    pub fn endpoint(&self) -> String {
        format!("{}/openai", self.base_url)
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Run a relay on an ephemeral port. The listener is bound before this
/// returns, so requests can be sent immediately.
pub async fn start_relay(config: RelayConfig) -> TestRelay {
    let upstream = UpstreamClient::with_http_client(&config.upstream, client());
    let server = RelayServer::with_upstream(config, upstream);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestRelay {
        base_url: format!("http://{}", addr),
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
