//! Local stand-in for the planning service.
//!
//! Runs an axum server on `127.0.0.1:0` inside its own thread and runtime, so it
//! works from plain `#[test]` functions (CLI tests) as well as `#[tokio::test]`.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::future::IntoFuture;
use std::net::{Ipv4Addr, SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::oneshot;

const PLAN_TRIP_PATH: &str = "/plan-trip";

/// Canned answer for `POST /plan-trip`
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    /// Held before answering, to keep a request outstanding
    pub delay: Duration,
}

impl MockReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// The placeholder two-day itinerary the reference service returns
    pub fn itinerary(origin: &str, destination: &str) -> Self {
        Self::json(
            200,
            json!({
                "itinerary": [
                    { "day": 1, "summary": format!("Fly from {} to {}", origin, destination) },
                    { "day": 2, "summary": format!("Explore {}", destination) }
                ]
            }),
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn server_error() -> Self {
        Self::json(500, json!({ "detail": "Internal Server Error" }))
    }
}

/// A request as the mock received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub raw_body: String,
}

impl RecordedRequest {
    /// Body parsed as JSON, if it is JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.raw_body).ok()
    }
}

struct MockState {
    reply: Mutex<MockReply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockPlanningService {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl MockPlanningService {
    /// Start serving `reply` for every `POST /plan-trip`.
    ///
    /// # Panics
    /// Panics if the local listener or runtime cannot be created.
    pub fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            reply: Mutex::new(reply),
            requests: Mutex::new(Vec::new()),
        });

        let listener =
            StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("Failed to bind mock service");
        listener
            .set_nonblocking(true)
            .expect("Failed to configure mock listener");
        let addr = listener.local_addr().expect("Failed to read mock address");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server_state = state.clone();

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt mock listener");
                let app = Router::new()
                    .fallback(record_and_reply)
                    .with_state(server_state);

                tokio::select! {
                    result = axum::serve(listener, app).into_future() => {
                        if let Err(err) = result {
                            eprintln!("Mock planning service stopped: {}", err);
                        }
                    }
                    _ = shutdown_rx => {}
                }
            });
        });

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Base URL to configure the client with (no trailing slash)
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn set_reply(&self, reply: MockReply) {
        *self.state.reply.lock().expect("mock reply lock poisoned") = reply;
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.state
            .requests
            .lock()
            .expect("mock request log poisoned")
            .len()
    }
}

impl Drop for MockPlanningService {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn record_and_reply(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .expect("mock request log poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            content_type,
            raw_body: String::from_utf8_lossy(&body).to_string(),
        });

    if method != Method::POST || uri.path() != PLAN_TRIP_PATH {
        return StatusCode::NOT_FOUND.into_response();
    }

    let reply = state.reply.lock().expect("mock reply lock poisoned").clone();
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_base_url() -> String {
    let listener =
        StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{}", addr)
}
