use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;

/// A chat session issued by the welcome endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Reserved for the last favourite lookups; nothing reads it yet
    pub recommendation_history: [Option<String>; 2],
}

impl Session {
    /// Mints a session with a fresh random UUID v4 token.
    pub fn issue() -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            recommendation_history: [None, None],
        }
    }
}

/// Registry of issued session tokens, shared by every request
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    async fn register(&self, session: Session) -> Result<()>;
    async fn is_valid(&self, token: &str) -> Result<bool>;
    async fn get(&self, token: &str) -> Result<Option<Session>>;
}

/// Process-lifetime registry backed by a concurrent map
#[derive(Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register(&self, session: Session) -> Result<()> {
        self.sessions.insert(session.token.clone(), session);
        Ok(())
    }

    async fn is_valid(&self, token: &str) -> Result<bool> {
        Ok(self.sessions.contains_key(token))
    }

    async fn get(&self, token: &str) -> Result<Option<Session>> {
        Ok(self.sessions.get(token).map(|entry| entry.clone()))
    }
}
