use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Identity claims kept after a Google login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct SessionData {
    pub user: Option<SessionUser>,
    /// CSRF state for an OAuth round trip in progress.
    pub oauth_state: Option<String>,
}

struct SessionEntry {
    data: SessionData,
    last_seen: Instant,
}

/// Server-side sessions keyed by the opaque id in the session cookie.
///
/// Entries idle longer than the TTL are dropped. At capacity the oldest
/// anonymous session goes first, then the oldest overall.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Returns a live session and refreshes its idle timer.
    pub async fn get(&self, id: &str) -> Option<SessionData> {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        let expired = match sessions.get_mut(id) {
            Some(entry) if now.duration_since(entry.last_seen) < self.ttl => {
                entry.last_seen = now;
                return Some(entry.data.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            sessions.remove(id);
        }
        None
    }

    /// Returns the id of a live session, or creates an empty one.
    /// Unknown or expired ids are never reused.
    pub async fn ensure(&self, id: Option<&str>) -> String {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        let ttl = self.ttl;
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < ttl);

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = now;
                return id.to_string();
            }
        }

        while sessions.len() >= self.max_sessions {
            let victim = sessions
                .iter()
                .filter(|(_, entry)| entry.data.user.is_none())
                .min_by_key(|(_, entry)| entry.last_seen)
                .or_else(|| sessions.iter().min_by_key(|(_, entry)| entry.last_seen))
                .map(|(key, _)| key.clone());
            match victim {
                Some(key) => {
                    sessions.remove(&key);
                    tracing::debug!("session store full, evicted oldest session");
                }
                None => break,
            }
        }

        let new_id = Uuid::new_v4().to_string();
        sessions.insert(
            new_id.clone(),
            SessionEntry {
                data: SessionData::default(),
                last_seen: now,
            },
        );
        new_id
    }

    /// Applies `f` to an existing session. Unknown ids are ignored.
    pub async fn update<F>(&self, id: &str, f: F)
    where
        F: FnOnce(&mut SessionData),
    {
        if let Some(entry) = self.sessions.lock().await.get_mut(id) {
            entry.last_seen = Instant::now();
            f(&mut entry.data);
        }
    }

    /// Removes and returns the pending OAuth state, so it can be used once.
    pub async fn take_oauth_state(&self, id: &str) -> Option<String> {
        self.sessions
            .lock()
            .await
            .get_mut(id)
            .and_then(|entry| entry.data.oauth_state.take())
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.lock().await.remove(id).is_some()
    }

    /// Drops a session that never completed a login; signed-in sessions stay.
    pub async fn discard_if_anonymous(&self, id: &str) {
        let mut sessions = self.sessions.lock().await;
        if sessions.get(id).is_some_and(|entry| entry.data.user.is_none()) {
            sessions.remove(id);
        }
    }

    pub async fn size(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            sub: "1234".to_string(),
            email: Some("ada@example.com".to_string()),
            name: Some("Ada".to_string()),
            picture: None,
        }
    }

    #[tokio::test]
    async fn test_ensure_creates_once() {
        let store = SessionStore::new();

        let id = store.ensure(None).await;
        let again = store.ensure(Some(&id)).await;

        assert_eq!(id, again);
        assert_eq!(store.size().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_gets_fresh_session() {
        let store = SessionStore::new();

        let id = store.ensure(Some("forged")).await;

        assert_ne!(id, "forged");
        assert!(store.get("forged").await.is_none());
    }

    #[tokio::test]
    async fn test_forged_ids_do_not_grow_past_capacity() {
        let store = SessionStore::with_limits(DEFAULT_SESSION_TTL, 16);

        for i in 0..1000 {
            store.ensure(Some(&format!("forged-{i}"))).await;
        }

        assert_eq!(store.size().await, 16);
    }

    #[tokio::test]
    async fn test_eviction_prefers_anonymous_sessions() {
        let store = SessionStore::with_limits(DEFAULT_SESSION_TTL, 2);
        let signed_in = store.ensure(None).await;
        store.update(&signed_in, |data| data.user = Some(user())).await;

        for _ in 0..10 {
            store.ensure(None).await;
        }

        assert_eq!(store.size().await, 2);
        assert_eq!(store.get(&signed_in).await.unwrap().user, Some(user()));
    }

    #[tokio::test]
    async fn test_expired_sessions_are_dropped() {
        let store = SessionStore::with_limits(Duration::ZERO, 100);
        let id = store.ensure(None).await;

        assert!(store.get(&id).await.is_none());
        assert_eq!(store.size().await, 0);

        store.ensure(None).await;
        store.ensure(None).await;
        assert_eq!(store.size().await, 1);
    }

    #[tokio::test]
    async fn test_update_ignores_unknown_ids() {
        let store = SessionStore::new();

        store.update("ghost", |data| data.user = Some(user())).await;

        assert_eq!(store.size().await, 0);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let store = SessionStore::new();
        let id = store.ensure(None).await;

        store.update(&id, |data| data.user = Some(user())).await;
        assert_eq!(store.get(&id).await.unwrap().user, Some(user()));

        assert!(store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
        assert!(!store.remove(&id).await);
    }

    #[tokio::test]
    async fn test_discard_keeps_signed_in_sessions() {
        let store = SessionStore::new();
        let pending = store.ensure(None).await;
        let signed_in = store.ensure(None).await;
        store.update(&signed_in, |data| data.user = Some(user())).await;

        store.discard_if_anonymous(&pending).await;
        store.discard_if_anonymous(&signed_in).await;

        assert!(store.get(&pending).await.is_none());
        assert!(store.get(&signed_in).await.is_some());
    }

    #[tokio::test]
    async fn test_oauth_state_is_single_use() {
        let store = SessionStore::new();
        let id = store.ensure(None).await;
        store
            .update(&id, |data| data.oauth_state = Some("xyz".to_string()))
            .await;

        assert_eq!(store.take_oauth_state(&id).await, Some("xyz".to_string()));
        assert_eq!(store.take_oauth_state(&id).await, None);
    }
}
