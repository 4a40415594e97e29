//! Session Store
//!
//! Maps opaque user identifiers to their sessions. A session is created
//! lazily on a user's first event and every later call returns the same
//! one. Each session sits behind its own mutex, held by the dispatcher for
//! the duration of one operation, so two rapid-fire events from the same
//! user can never interleave mutations.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;

use super::{Limits, Session};

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
    limits: Limits,
}

impl SessionStore {
    pub fn new(limits: Limits) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            limits,
        }
    }

    /// Fetch the session for `user_id`, creating it on first use.
    pub async fn get_or_create(&self, user_id: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(user_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock: a user's first two events can race
        // to this point, and both must end up with the same root.
        if let Some(session) = sessions.get(user_id) {
            return session.clone();
        }

        info!(user = user_id, "creating session");
        let session = Arc::new(Mutex::new(Session::new(self.limits)));
        sessions.insert(user_id.to_string(), session.clone());
        session
    }

    /// Number of sessions created so far.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
