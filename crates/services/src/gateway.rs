//! # Persistence Gateway
//!
//! Reads and writes the whole `AppState` document under one storage key.
//! Loading never fails: any problem degrades to the seed state.

use domains::{seed, AppState, KeyValueStore};
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};

/// Key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "arunika_lms_state_v2";

pub struct StateGateway<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StateGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hydrates the state, falling back to the seed when the document is
    /// missing, unreadable, or malformed.
    pub fn load(&self) -> AppState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no saved state, using seed");
                return seed::initial_state();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read saved state, using seed");
                return seed::initial_state();
            }
        };

        match parse_document(&raw) {
            Ok(state) => {
                debug!(key = %self.key, courses = state.courses.len(), "hydrated saved state");
                state
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to parse saved state, using seed");
                seed::initial_state()
            }
        }
    }

    /// Replaces the stored document with `state` in full.
    pub fn save(&self, state: &AppState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, bytes = raw.len(), "state committed");
        Ok(())
    }

    /// The stored document as-is, if any.
    pub fn export(&self) -> Result<Option<String>> {
        Ok(self.store.get(&self.key)?)
    }

    /// Parses `raw` and stores it. Unlike `load`, a malformed document is an
    /// error here and leaves storage untouched.
    pub fn import(&self, raw: &str) -> Result<AppState> {
        let state = parse_document(raw)?;
        self.save(&state)?;
        info!(key = %self.key, courses = state.courses.len(), "state imported");
        Ok(state)
    }

    /// Overwrites storage with the seed state.
    pub fn reset(&self) -> Result<AppState> {
        let state = seed::initial_state();
        self.save(&state)?;
        info!(key = %self.key, "state reset to seed");
        Ok(state)
    }
}

/// Decodes a stored document. A document without a brand name is rejected
/// like any other malformed one.
fn parse_document(raw: &str) -> Result<AppState> {
    let state: AppState = serde_json::from_str(raw)?;
    if state.config.brand_name.trim().is_empty() {
        return Err(ServiceError::InvalidDocument("config.brandName is empty".into()));
    }
    Ok(state)
}
