//! Session state management

use leptos::prelude::*;
use shared::{AuthResponse, UserInfo};

use crate::services::auth;

/// Global session context, seeded from local storage at start-up.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub authenticated: RwSignal<bool>,
    pub user: RwSignal<Option<UserInfo>>,
}

impl SessionContext {
    pub fn from_storage() -> Self {
        let authenticated = auth::is_authenticated();
        log::debug!("Session restored, authenticated={}", authenticated);
        Self {
            authenticated: RwSignal::new(authenticated),
            user: RwSignal::new(auth::current_user()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    /// Record a successful login or registration (already persisted).
    pub fn sign_in(&self, response: &AuthResponse) {
        self.user.set(Some(response.user.clone()));
        self.authenticated.set(true);
    }

    pub fn sign_out(&self) {
        auth::logout();
        self.user.set(None);
        self.authenticated.set(false);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::from_storage();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
