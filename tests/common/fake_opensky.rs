//! Fake OpenSky `states/all` server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /api/states/all` with whatever [`Reply`] the test
//! configured, and records the query string of every request.
//!
//! # Example
//!
//! ```rust,no_run
//! let upstream = FakeOpenSky::start().await.unwrap();
//! upstream.reply_with(Reply::Json(israel_turkey_payload())).await;
//!
//! // Point the client at upstream.states_url()
//! ```

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the fake answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a JSON body.
    Json(serde_json::Value),
    /// 200 with an arbitrary (possibly non-JSON) body.
    Body(String),
    /// The given status and an empty body.
    Status(StatusCode),
    /// Wait, then answer with the JSON body.
    Delayed(Duration, serde_json::Value),
}

struct FakeState {
    reply: Reply,
    requests: Vec<HashMap<String, String>>,
}

/// Handle to the running fake upstream.
pub struct FakeOpenSky {
    addr: SocketAddr,
    state: Arc<Mutex<FakeState>>,
}

impl FakeOpenSky {
    /// Start on a random port, answering `{"states": []}` until told otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(FakeState {
            reply: Reply::Json(serde_json::json!({ "time": 1_700_000_100, "states": [] })),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/states/all", get(states_all))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full endpoint URL, suitable as the client's base URL.
    pub fn states_url(&self) -> String {
        format!("http://{}/api/states/all", self.addr)
    }

    pub async fn reply_with(&self, reply: Reply) {
        self.state.lock().await.reply = reply;
    }

    /// Query parameters of every request received so far.
    pub async fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().await.requests.clone()
    }
}

/// A loopback URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/states/all")
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn states_all(
    State(state): State<Arc<Mutex<FakeState>>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let reply = {
        let mut state = state.lock().await;
        state.requests.push(query);
        state.reply.clone()
    };

    match reply {
        Reply::Json(body) => axum::Json(body).into_response(),
        Reply::Body(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            body,
        )
            .into_response(),
        Reply::Status(status) => status.into_response(),
        Reply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            axum::Json(body).into_response()
        }
    }
}
