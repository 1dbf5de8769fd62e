//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use vitrine_store::RecordStore;

use crate::config::Config;
use crate::session::SessionGate;

/// State shared across all HTTP handlers.
///
/// There is deliberately no cross-request cache of store data: every
/// request re-fetches what it needs, so navigating away and back always
/// shows the store's current contents.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Client for the hosted record store.
    pub store: Arc<RecordStore>,
    /// Admin session tokens.
    pub sessions: Arc<SessionGate>,
}
