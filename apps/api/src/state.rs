use std::sync::Arc;

use crate::config::Config;
use crate::ner::EntityTagger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity tagger for the name fallback. Loaded once at startup, read-only.
    pub tagger: Arc<dyn EntityTagger>,
}
