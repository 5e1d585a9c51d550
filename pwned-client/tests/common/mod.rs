//! In-process stand-in for the breach API.
//!
//! The service runs on its own tokio runtime thread and answers canned
//! responses keyed by path and query. Every request it receives is recorded
//! so tests can assert on what actually went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use pwned_client::{ClientConfig, HttpClient, PwnedClient};

/// Path prefix the mock serves the API under.
pub const API_ROOT: &str = "/api/v2/";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path_and_query: String,
    pub user_agent: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<String, (StatusCode, Vec<u8>)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockService {
    base_url: String,
    state: MockState,
}

impl MockService {
    pub fn start() -> Self {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let state = MockState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self { base_url: format!("http://{addr}{API_ROOT}"), state }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answers `path` (relative to the API root, query included) with `status` and `body`.
    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.respond_bytes(path, status, body.as_bytes());
    }

    /// Like [`respond`](Self::respond), for bodies that are not valid UTF-8.
    pub fn respond_bytes(&self, path: &str, status: u16, body: &[u8]) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(format!("{API_ROOT}{path}"), (status, body.to_vec()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> PwnedClient {
        PwnedClient::from_config(ClientConfig::default().base_url(self.base_url.clone()))
            .unwrap()
            .with_http_client(local_http())
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Vec<u8>) {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str().to_string()).unwrap_or_default();
    let header_text = |name: header::HeaderName| {
        headers.get(name).and_then(|value| value.to_str().ok()).map(String::from)
    };

    let recorded = RecordedRequest {
        method,
        path_and_query: path_and_query.clone(),
        user_agent: header_text(header::USER_AGENT),
        content_type: header_text(header::CONTENT_TYPE),
        body,
    };
    state.requests.lock().unwrap().push(recorded);

    let routes = state.routes.lock().unwrap();
    match routes.get(&path_and_query) {
        Some((status, body)) => (*status, body.clone()),
        None => (StatusCode::NOT_FOUND, Vec::new()),
    }
}

/// HTTP client that ignores proxy settings from the environment.
pub fn local_http() -> HttpClient {
    HttpClient::builder().no_proxy().timeout(Duration::from_secs(5)).build().unwrap()
}

/// Returns a base URL nothing is listening on.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{API_ROOT}")
}
