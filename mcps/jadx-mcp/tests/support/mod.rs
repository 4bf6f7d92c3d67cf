//! Stub Jadx plugin for integration tests
//!
//! An axum app on 127.0.0.1 serving `POST /invoke` and `GET /tools`. Every
//! request is recorded and answered with the same canned status and body.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

struct Reply {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    addr: SocketAddr,
    reply: Arc<Reply>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Reply `200 OK` with the given JSON body
    pub async fn json(body: Value) -> Self {
        Self::start(200, "application/json", body.to_string()).await
    }

    pub async fn start(status: u16, content_type: &'static str, body: String) -> Self {
        let reply = Arc::new(Reply {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/invoke", post(record))
            .route("/tools", get(record))
            .with_state(reply.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            reply,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.reply.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(reply): State<Arc<Reply>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    reply.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: body.to_vec(),
    });

    (
        reply.status,
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body.clone(),
    )
}

/// URL of a local port nobody listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A bound port that never accepts, so connections open but nothing answers.
/// Keep the listener alive for as long as the URL is used.
pub async fn silent_url() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{addr}"))
}
