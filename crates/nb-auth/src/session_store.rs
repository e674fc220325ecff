//! In-memory session registry.

use crate::Session;

use nb_core::User;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, info};
use tokio::sync::RwLock;

/// Shared map of token -> session. Clones share the same map.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Session lifetime in seconds, for cookie Max-Age.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Create and register a session after a verified login.
    pub async fn create(&self, user: &User, id_token: &str) -> Session {
        let session = Session::new(user, id_token, self.ttl);

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        info!(
            "Session created for user {} ({})",
            user.id, session.display_name
        );

        session
    }

    /// Resolve a token. Expired sessions are dropped on access.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let now = Utc::now();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions.remove(token).is_some() {
            debug!("Expired session dropped");
        }
        None
    }

    /// Remove a session at logout. Returns whether it existed.
    pub async fn remove(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
