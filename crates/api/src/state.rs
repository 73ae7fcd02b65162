use std::sync::Arc;

use videohub_store::VideoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The video catalogue. Each router owns its own store instance.
    pub store: Arc<VideoStore>,
}

impl AppState {
    pub fn new(store: VideoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the state a fresh process starts with.
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.seed_sample_video {
            Self::new(VideoStore::seeded())
        } else {
            Self::new(VideoStore::new())
        }
    }
}
