//! Application state management
//!
//! This module contains the shared application state the presentation layer
//! threads through every call, instead of the page-global session the
//! original portal relied on.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppResult;
use crate::store::RecordStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Record store holding every persisted collection
    pub store: RecordStore,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state from an already-open store
    pub fn new(store: RecordStore, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, config }),
        }
    }

    /// Open the record store described by the configuration
    pub fn open(config: Config) -> AppResult<Self> {
        let store = RecordStore::open(&config.storage)?;
        Ok(Self::new(store, config))
    }

    /// Get a reference to the record store
    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
