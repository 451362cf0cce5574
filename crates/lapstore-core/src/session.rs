//! Login session state: the bearer token plus a cached user profile.
//!
//! Lifecycle: set on login, read by every authenticated request, cleared on
//! logout or on any 401. Components receive a [`SessionStore`] instead of
//! reaching for ambient storage, so tests can hand in a fresh
//! [`MemorySession`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Account profile returned by `GET /accounts/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    /// `"customer"` or `"admin"`.
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: String);
    fn profile(&self) -> Option<UserProfile>;
    fn set_profile(&self, profile: UserProfile);
    /// Drops both the token and the cached profile.
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[derive(Debug, Default)]
struct SessionData {
    token: Option<String>,
    profile: Option<UserProfile>,
}

/// Process-local session kept in memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: Mutex<SessionData>,
}

impl MemorySession {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(SessionData {
                token: Some(token.into()),
                profile: None,
            }),
        }
    }

    fn data(&self) -> MutexGuard<'_, SessionData> {
        // Session data stays consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.data().token.clone()
    }

    fn set_token(&self, token: String) {
        self.data().token = Some(token);
    }

    fn profile(&self) -> Option<UserProfile> {
        self.data().profile.clone()
    }

    fn set_profile(&self, profile: UserProfile) {
        self.data().profile = Some(profile);
    }

    fn clear(&self) {
        let mut data = self.data();
        data.token = None;
        data.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 3,
            email: "admin@lapstore.vn".to_string(),
            first_name: None,
            last_name: None,
            phone_number: None,
            shipping_address: None,
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn new_session_is_anonymous() {
        let session = MemorySession::default();
        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());
    }

    #[test]
    fn clear_drops_token_and_profile() {
        let session = MemorySession::with_token("abc");
        session.set_profile(profile());
        assert!(session.is_authenticated());
        session.clear();
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn profile_deserializes_with_missing_optionals() {
        let p: UserProfile =
            serde_json::from_str(r#"{"id": 9, "email": "a@b.vn", "role": "customer"}"#).unwrap();
        assert_eq!(p.id, 9);
        assert!(!p.is_admin());
        assert!(profile().is_admin());
    }
}
