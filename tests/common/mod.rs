//! Stand-in for the re-invite endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use github_reinvite::{Catalog, Organization, ReinviteClient};
use serde_json::Value;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

/// A running mock endpoint that answers every POST with a canned response.
pub struct MockEndpoint {
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockEndpoint {
    /// Serve `body` with `status` on `/api/reinvite`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/reinvite", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/api/reinvite"),
            received,
        }
    }

    /// Serve a JSON value with HTTP 200.
    pub async fn json(body: Value) -> Self {
        Self::start(200, body.to_string()).await
    }

    pub fn client(&self) -> ReinviteClient {
        ReinviteClient::new(self.url.clone()).unwrap()
    }

    /// Request bodies received so far
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<MockState>, Json(body): Json<Value>) -> (StatusCode, String) {
    state.received.lock().unwrap().push(body);
    (state.status, state.body.clone())
}

/// Built-in course organization
pub fn course() -> Organization {
    Catalog::builtin().organization("18-341").unwrap().clone()
}

/// A URL nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/reinvite")
}
