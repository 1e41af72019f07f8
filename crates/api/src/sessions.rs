//! In-memory store for booking wizard sessions.
//!
//! Sessions are deliberately not persisted: a booking attempt lives
//! exactly as long as the visitor's interaction (or this process), and
//! the completed "submission" is nothing but the WhatsApp deep-link
//! handoff. Restarting the server discards every in-flight wizard, which
//! matches the original's client-local lifetime.

use std::collections::HashMap;

use estudio12_core::booking::WizardSession;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Concurrent map of live wizard sessions, keyed by session id.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, WizardSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session and return a snapshot of it.
    pub async fn create(&self) -> WizardSession {
        let session = WizardSession::new();
        let snapshot = session.clone();
        self.sessions.write().await.insert(session.id, session);
        snapshot
    }

    /// Snapshot a session by id.
    pub async fn get(&self, id: Uuid) -> Option<WizardSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Run a closure against a session under the write lock. Returns
    /// `None` when the session does not exist.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardSession) -> T,
    ) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estudio12_core::booking::{DraftPatch, WizardStep};

    #[tokio::test]
    async fn create_and_get_roundtrip() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let created = store.create().await;
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.step(), WizardStep::Artist);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn with_session_mutates_in_place() {
        let store = SessionStore::new();
        let created = store.create().await;

        store
            .with_session(created.id, |session| {
                session.apply(DraftPatch {
                    name: Some("Ana".to_string()),
                    ..DraftPatch::default()
                });
            })
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.draft().name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
        assert!(store.with_session(Uuid::new_v4(), |_| ()).await.is_none());
    }
}
