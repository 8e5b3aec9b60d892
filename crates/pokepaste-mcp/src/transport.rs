//! Outbound HTTP for paste creation.
//!
//! The submitter only sees [`PasteTransport`]; the production implementation is
//! [`ReqwestTransport`], tests plug in a recording double.

use crate::error::Result;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The parts of an HTTP response the submitter interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteResponse {
    pub status: u16,
    pub status_text: String,
    /// Raw `Location` header, if any.
    pub location: Option<String>,
}

#[async_trait]
pub trait PasteTransport: Send + Sync {
    /// POST an urlencoded form to `url` without following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PokepasteError::Transport`] when no response was received.
    async fn post_form(&self, url: &str, body: String) -> Result<PasteResponse>;
}

/// `reqwest`-backed transport with redirects disabled.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client that never follows redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PasteTransport for ReqwestTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<PasteResponse> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        // hyper only keeps the wire reason phrase when it differs from the canonical one.
        let status_text = resp
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(PasteResponse {
            status: status.as_u16(),
            status_text,
            location,
        })
    }
}
