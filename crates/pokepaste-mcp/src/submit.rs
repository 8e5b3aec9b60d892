//! Paste submission: render a team, POST it to the paste host and read back the paste URL.
//!
//! The host signals success with `303 See Other` plus a `Location` path. That redirect is the
//! answer, not something to follow.

use crate::error::{PokepasteError, Result};
use crate::team::TeamSubmission;
use crate::transport::{PasteResponse, PasteTransport};
use pokepaste_sets::{PokemonSet, export_set};
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "https://pokepast.es";

/// Blank line between export blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

const SEE_OTHER: u16 = 303;

/// Render every set in order, one blank line between blocks.
#[must_use]
pub fn render_team(sets: &[PokemonSet]) -> String {
    sets.iter()
        .map(export_set)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Urlencoded form body: `paste` first, then whichever metadata fields are present.
#[must_use]
pub fn encode_form(paste: &str, team: &TeamSubmission) -> String {
    let mut form = url::form_urlencoded::Serializer::new(String::new());
    form.append_pair("paste", paste);
    for (key, value) in team.metadata() {
        form.append_pair(key, value);
    }
    form.finish()
}

/// Creates pastes on a pokepast.es-compatible host.
#[derive(Clone)]
pub struct PasteSubmitter {
    base_url: String,
    transport: Arc<dyn PasteTransport>,
}

impl std::fmt::Debug for PasteSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteSubmitter")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PasteSubmitter {
    /// `base_url` is scheme + host (a trailing `/` is dropped).
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn PasteTransport>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn create_url(&self) -> String {
        format!("{}/create", self.base_url)
    }

    /// Upload `team` and return the absolute paste URL.
    ///
    /// Exactly one request is made; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`PokepasteError::Transport`] if the request could not complete
    /// - [`PokepasteError::SubmissionFailed`] if the host did not answer `303` with a `Location`
    pub async fn submit(&self, team: &TeamSubmission) -> Result<String> {
        let paste = render_team(&team.pokemon);
        let body = encode_form(&paste, team);

        let resp = self.transport.post_form(&self.create_url(), body).await?;
        match self.paste_url(&resp) {
            Ok(url) => {
                info!(status = resp.status, url = %url, "paste created");
                Ok(url)
            }
            Err(e) => {
                warn!(
                    status = resp.status,
                    status_text = %resp.status_text,
                    "paste host rejected submission"
                );
                Err(e)
            }
        }
    }

    /// Interpret the paste host's answer.
    ///
    /// # Errors
    ///
    /// Returns [`PokepasteError::SubmissionFailed`] unless the response is `303` with a
    /// `Location` header.
    pub fn paste_url(&self, resp: &PasteResponse) -> Result<String> {
        match (resp.status, resp.location.as_deref()) {
            (SEE_OTHER, Some(location)) => Ok(format!("{}{location}", self.base_url)),
            _ => Err(PokepasteError::SubmissionFailed {
                status: resp.status,
                status_text: resp.status_text.clone(),
            }),
        }
    }
}
