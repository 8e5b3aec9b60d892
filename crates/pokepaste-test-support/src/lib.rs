//! Test helpers: an in-process stand-in for the pokepast.es `/create` endpoint.

use anyhow::Context as _;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse as _, Response};
use axum::routing::any;
use hyper::ext::ReasonPhrase;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How the stub answers every request.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// `303 See Other` with `Location: <path>`.
    Created { location: String },
    /// `303 See Other` without a `Location` header.
    SeeOtherWithoutLocation,
    /// Any other status with an empty body.
    Status(u16),
    /// A status sent with a non-standard reason phrase.
    StatusWithReason { code: u16, reason: String },
}

impl StubReply {
    pub fn created(location: impl Into<String>) -> Self {
        Self::Created {
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded form fields, in body order.
    #[must_use]
    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[must_use]
    pub fn form_value(&self, key: &str) -> Option<String> {
        self.form()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A paste host bound to an ephemeral localhost port. Shuts down on drop.
pub struct StubPasteHost {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubPasteHost {
    /// Start the stub.
    ///
    /// # Errors
    ///
    /// Returns an error if binding a localhost port fails.
    pub async fn spawn(reply: StubReply) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/{*path}", any(record_and_reply))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind stub paste host")?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        tokio::spawn(async move { server.await });

        Ok(Self {
            base_url: format!("http://{addr}"),
            requests,
            shutdown: Some(shutdown_tx),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl Drop for StubPasteHost {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn record_and_reply(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().push(RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.reply {
        StubReply::Created { location } => {
            (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
        }
        StubReply::SeeOtherWithoutLocation => StatusCode::SEE_OTHER.into_response(),
        StubReply::Status(code) => status(code).into_response(),
        StubReply::StatusWithReason { code, reason } => {
            let mut resp = status(code).into_response();
            if let Ok(phrase) = ReasonPhrase::try_from(reason) {
                resp.extensions_mut().insert(phrase);
            }
            resp
        }
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
