use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Session data that survives restarts: bearer token and last known email
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    #[serde(default, rename = "auth_token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, rename = "user_email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Durable storage for the session
///
/// The client calls [`TokenStore::store`] with an empty session on logout and
/// whenever the backend answers the profile request with 401.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<StoredSession, ApiError>;
    fn store(&self, session: &StoredSession) -> Result<(), ApiError>;
}

/// Keeps the session in process memory only
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: Mutex<StoredSession>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            session: Mutex::new(StoredSession {
                token: Some(token.to_string()),
                email: None,
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<StoredSession, ApiError> {
        self.session
            .lock()
            .map(|s| s.clone())
            .map_err(|e| ApiError::Storage(e.to_string()))
    }

    fn store(&self, session: &StoredSession) -> Result<(), ApiError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        *guard = session.clone();
        Ok(())
    }
}
