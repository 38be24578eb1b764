//! # Authentication Endpoints
//!
//! Login and registration persist the returned token and user so that
//! [`super::api`] attaches the token to later requests.

use shared::error::Result;
use shared::session::{self, clear_session, save_session};
use shared::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

use super::api;
use crate::utils::storage::BrowserStore;

pub async fn login(request: &LoginRequest) -> Result<AuthResponse> {
    log::info!("Attempting login");
    let response: AuthResponse = api::post("/auth/login", request).await?;
    save_session(&BrowserStore::new(), &response);
    log::info!("Login successful for user {}", response.user.id);
    Ok(response)
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse> {
    log::info!("Attempting registration");
    let response: AuthResponse = api::post("/auth/register", request).await?;
    save_session(&BrowserStore::new(), &response);
    Ok(response)
}

pub fn logout() {
    clear_session(&BrowserStore::new());
    log::info!("Logged out");
}

/// The user saved at the last login, if any.
pub fn current_user() -> Option<UserInfo> {
    session::current_user(&BrowserStore::new())
}

pub fn is_authenticated() -> bool {
    session::is_authenticated(&BrowserStore::new())
}
