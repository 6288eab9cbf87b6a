use std::sync::Arc;

use crate::chat::selector::ResponseSelector;
use crate::config::Config;
use crate::documents::session::SessionStore;
use crate::simplify::simplifier::{CannedSimplifier, DocumentSimplifier};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Keyword rule table for chat replies.
    pub selector: Arc<ResponseSelector>,
    /// Pluggable simplifier. Default: CannedSimplifier.
    pub simplifier: Arc<dyn DocumentSimplifier>,
    /// Uploaded-document sessions, owned by the callers that open and close them.
    pub sessions: SessionStore,
}

impl AppState {
    /// Default wiring: keyword selector, canned simplifier, empty session store.
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        AppState {
            config,
            selector: Arc::new(ResponseSelector::default()),
            simplifier: Arc::new(CannedSimplifier),
            sessions,
        }
    }
}
