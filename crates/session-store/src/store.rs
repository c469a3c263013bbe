//! In-memory session-scoped key/value storage.

use crate::error::SessionError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Key under which the submitter's first name is stored.
pub const FIRST_NAME_KEY: &str = "firstName";

/// Key under which the submitted phone number is stored.
pub const PHONE_NUMBER_KEY: &str = "phoneNumber";

/// Session-scoped string store.
///
/// Holds the handoff values between the form phase and the challenge
/// phase. Nothing survives process teardown.
#[derive(Clone, Default)]
pub struct SessionStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any existing one.
    pub async fn set(&self, key: &str, value: &str) {
        let mut items = self.items.write().await;
        items.insert(key.to_string(), value.to_string());
        debug!("Session set {}", key);
    }

    /// Get a value by key.
    pub async fn get(&self, key: &str) -> Option<String> {
        let items = self.items.read().await;
        items.get(key).cloned()
    }

    /// Remove a value; returns whether it existed.
    pub async fn remove(&self, key: &str) -> bool {
        let mut items = self.items.write().await;
        items.remove(key).is_some()
    }

    /// Drop every stored value.
    pub async fn clear(&self) {
        let mut items = self.items.write().await;
        items.clear();
    }

    /// Number of stored values.
    pub async fn len(&self) -> usize {
        let items = self.items.read().await;
        items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Serialize the whole session to JSON.
    pub async fn snapshot(&self) -> Result<String, SessionError> {
        let items = self.items.read().await;
        Ok(serde_json::to_string(&*items)?)
    }

    /// Replace the session contents from a JSON snapshot.
    pub async fn restore(&self, snapshot: &str) -> Result<(), SessionError> {
        let parsed: HashMap<String, String> = serde_json::from_str(snapshot)?;
        let mut items = self.items.write().await;
        *items = parsed;
        Ok(())
    }
}
