//! Conversation session storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Turn;

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// A single conversation session.
///
/// Cloning a session is cheap; clones share the same turn list.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Conversation turns, oldest first.
    turns: RwLock<Vec<Turn>>,
    /// Session creation time.
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

/// Serializable snapshot of a session.
#[derive(Debug, Serialize)]
pub struct SessionState {
    pub id: String,
    pub turns: Vec<Turn>,
    pub created_at: String,    // RFC3339
    pub last_activity: String, // RFC3339
}

impl Session {
    /// Create a new session with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                turns: RwLock::new(Vec::new()),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    #[must_use]
    pub fn to_state(&self) -> SessionState {
        SessionState {
            id: self.inner.id.clone(),
            turns: self.turns(),
            created_at: self.inner.created_at.to_rfc3339(),
            last_activity: self.last_activity().to_rfc3339(),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Add a user turn to the conversation.
    pub fn add_user_turn(&self, content: impl Into<String>) {
        self.add_turn(Turn::user(content));
    }

    /// Add an assistant turn to the conversation.
    pub fn add_assistant_turn(&self, content: impl Into<String>) {
        self.add_turn(Turn::assistant(content));
    }

    /// Append a turn to the conversation.
    pub fn add_turn(&self, turn: Turn) {
        let mut guard = self
            .inner
            .turns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.push(turn);
        drop(guard);
        self.touch();
    }

    /// Append a turn and return the conversation including it.
    ///
    /// Both happen under one write lock, so concurrent callers each see a
    /// distinct, complete history.
    #[must_use]
    pub fn push_turn(&self, turn: Turn) -> Vec<Turn> {
        let mut guard = self
            .inner
            .turns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.push(turn);
        let snapshot = guard.clone();
        drop(guard);
        self.touch();
        snapshot
    }

    /// Get all turns in the conversation.
    #[must_use]
    pub fn turns(&self) -> Vec<Turn> {
        self.inner
            .turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of turns in the conversation.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.inner
            .turns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the conversation has not started yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turn_count() == 0
    }

    fn last_activity(&self) -> DateTime<Utc> {
        *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Update the last activity timestamp.
    pub fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        // A negative difference means clock skew; treat as fresh.
        (Utc::now() - self.last_activity())
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store for sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        self.create_with_id(Uuid::new_v4().to_string())
    }

    /// Create a new session with a specific ID, replacing any existing one.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> Session {
        let id = id.into();
        let session = Session::new(id.clone());
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_session_lifecycle() {
        let session = Session::new("test-123".to_string());

        assert_eq!(session.id(), "test-123");
        assert!(session.is_empty());

        session.add_user_turn("What is renormalization?");
        assert_eq!(session.turn_count(), 1);

        session.add_assistant_turn("A way of handling **infinities**.");
        assert_eq!(session.turn_count(), 2);

        let turns = session.turns();
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();

        assert!(store.is_empty());

        let session = store.create();
        assert_eq!(store.len(), 1);

        let retrieved = store.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());

        // Clones share the same turn list.
        retrieved.add_user_turn("hello");
        assert_eq!(session.turn_count(), 1);

        store.remove(session.id());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        let _fresh = store.create();

        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT), 0);
        assert_eq!(store.len(), 1);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_millis(1)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_touch_keeps_session_alive() {
        let store = SessionStore::new();
        let session = store.create();

        std::thread::sleep(Duration::from_millis(40));
        session.touch();

        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_millis(30)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_pushes_see_distinct_histories() {
        let session = Session::new("race".to_string());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = session.clone();
                std::thread::spawn(move || session.push_turn(Turn::user(format!("q{i}"))))
            })
            .collect();
        let mut lengths: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().len())
            .collect();
        lengths.sort_unstable();

        // Exactly one caller saw itself as the first turn.
        assert_eq!(lengths, (1..=8).collect::<Vec<_>>());
        assert_eq!(session.turn_count(), 8);
    }

    #[test]
    fn test_state_snapshot() {
        let store = SessionStore::new();
        let session = store.create_with_id("fixed");
        session.add_user_turn("hi");

        let state = session.to_state();
        assert_eq!(state.id, "fixed");
        assert_eq!(state.turns, vec![Turn::user("hi")]);
        assert!(DateTime::parse_from_rfc3339(&state.created_at).is_ok());
    }
}
