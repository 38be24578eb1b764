//! # Session Persistence
//!
//! The session is two string entries in a key/value store: the bearer token
//! and the JSON-encoded signed-in user. In the browser the store is
//! `localStorage`; tests use [`MemoryStore`].
//!
//! A session counts as authenticated whenever a token is stored. The user
//! record is informational; if it is missing or corrupt the caller simply
//! sees no current user.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::dto::{AuthResponse, UserInfo};
use crate::error::ApiError;
use crate::http::classify_failure;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value storage backing the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used by tests and as a fallback when browser storage is
/// unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persist the token and user from a successful login or registration.
pub fn save_session<S: SessionStore + ?Sized>(store: &S, auth: &AuthResponse) {
    store.set(TOKEN_KEY, &auth.access_token);
    match serde_json::to_string(&auth.user) {
        Ok(user) => store.set(USER_KEY, &user),
        Err(_) => store.remove(USER_KEY),
    }
}

pub fn load_token<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn current_user<S: SessionStore + ?Sized>(store: &S) -> Option<UserInfo> {
    store
        .get(USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn is_authenticated<S: SessionStore + ?Sized>(store: &S) -> bool {
    load_token(store).is_some()
}

pub fn clear_session<S: SessionStore + ?Sized>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Classify a failed response and drop the session when the backend rejected
/// the credentials. The caller only has to send the user to the login page
/// when this returns [`ApiError::Unauthorized`].
pub fn apply_failure<S: SessionStore + ?Sized>(store: &S, status: u16, body: &str) -> ApiError {
    let error = classify_failure(status, body);
    if matches!(error, ApiError::Unauthorized) {
        clear_session(store);
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthResponse {
        AuthResponse {
            access_token: "tok-123".to_string(),
            token_type: "bearer".to_string(),
            user: UserInfo {
                id: "7".to_string(),
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                phone: Some("9876543210".to_string()),
            },
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        assert!(!is_authenticated(&store));

        save_session(&store, &auth());
        assert!(is_authenticated(&store));
        assert_eq!(load_token(&store).as_deref(), Some("tok-123"));
        assert_eq!(current_user(&store), Some(auth().user));
    }

    #[test]
    fn test_clear_session_removes_both_keys() {
        let store = MemoryStore::new();
        save_session(&store, &auth());
        clear_session(&store);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn test_corrupt_user_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");
        assert!(is_authenticated(&store));
        assert_eq!(current_user(&store), None);
    }

    #[test]
    fn test_unauthorized_response_clears_session() {
        let store = MemoryStore::new();
        save_session(&store, &auth());

        let error = apply_failure(&store, 401, r#"{"detail":"Could not validate credentials"}"#);
        assert_eq!(error, ApiError::Unauthorized);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn test_missing_authorization_header_clears_session() {
        let store = MemoryStore::new();
        save_session(&store, &auth());

        let body = r#"{"detail":[{"loc":["header","authorization"],"msg":"field required"}]}"#;
        assert_eq!(apply_failure(&store, 422, body), ApiError::Unauthorized);
        assert!(!is_authenticated(&store));
        assert_eq!(current_user(&store), None);
    }

    #[test]
    fn test_form_error_keeps_session() {
        let store = MemoryStore::new();
        save_session(&store, &auth());

        let body = r#"{"detail":[{"loc":["body","price"],"msg":"value is not a valid float"}]}"#;
        let error = apply_failure(&store, 422, body);
        assert_eq!(
            error,
            ApiError::Status { status: 422, detail: Some("value is not a valid float".to_string()) }
        );
        assert_eq!(load_token(&store).as_deref(), Some("tok-123"));
        assert_eq!(current_user(&store), Some(auth().user));
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(!is_authenticated(&store));
    }
}
