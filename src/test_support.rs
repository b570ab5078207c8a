//! In-process mock backend for client tests.
//!
//! Binds an Axum fallback handler on `127.0.0.1:0`, answers each request from
//! a table of canned `(method, path) -> (status, body)` replies, and records
//! every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::ClientConfig;
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::Role;

#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Default)]
struct MockState {
    replies: HashMap<(String, String), (u16, String)>,
    recorded: Mutex<Vec<Recorded>>,
}

pub(crate) struct MockBackend {
    base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Start a backend answering `(method, path, status, body)` entries.
    /// Unlisted routes answer `404 {"message": "Not Found"}`.
    pub async fn start(routes: &[(&str, &str, u16, &str)]) -> Self {
        let replies = routes
            .iter()
            .map(|(method, path, status, body)| {
                (((*method).to_owned(), (*path).to_owned()), (*status, (*body).to_owned()))
            })
            .collect();
        let state = Arc::new(MockState { replies, recorded: Mutex::new(Vec::new()) });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{addr}"), state }
    }

    pub fn client(&self) -> NeuDevClient {
        NeuDevClient::new(&ClientConfig::new(&self.base_url).unwrap()).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(State(state): State<Arc<MockState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_owned();

    state.recorded.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: parts.uri.query().map(ToOwned::to_owned),
        headers: parts.headers.clone(),
        body: bytes.to_vec(),
    });

    let (status, body) = state
        .replies
        .get(&(method, path))
        .cloned()
        .unwrap_or((404, r#"{"message":"Not Found"}"#.to_owned()));
    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Client aimed at a port nothing listens on.
pub(crate) fn unreachable_client() -> NeuDevClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    NeuDevClient::new(&ClientConfig::new(&format!("http://{addr}")).unwrap()).unwrap()
}

pub(crate) fn teacher_session() -> Session {
    Session::new("teacher-token", Some(Role::Teacher), Some(7))
}

pub(crate) fn student_session() -> Session {
    Session::new("student-token", Some(Role::Student), Some(21))
}

/// Session with every credential stripped.
pub(crate) fn tokenless_session() -> Session {
    Session::new("", None, None)
}
