//! Server-side session records keyed by an opaque client-held token.
//!
//! Expiry is absolute from creation (no refresh-on-activity). Expired entries
//! are reaped lazily when they are next read; there is no background sweep.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

use super::user::User;

pub const SESSION_COOKIE: &str = "vitrine_session";

/// The identity a request resolves to: one session, one user.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
    pub expires_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a session for the user and returns the opaque token.
    pub async fn create(&self, user: &User) -> String {
        let token = new_token();
        let session = Session {
            user_id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            expires_at: OffsetDateTime::now_utc() + self.ttl,
        };
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    /// Resolves a token to its session, removing it if the TTL has elapsed.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > OffsetDateTime::now_utc() => {
                Some(session.clone())
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    pub async fn destroy(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}

fn new_token() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}
