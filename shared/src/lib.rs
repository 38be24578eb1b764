//! # Shared Marketplace Library
//!
//! Everything the browser application needs that does not touch the browser:
//! the API contract, the request interception rules, session persistence,
//! the route table with its guard, form validation and display formatting.
//! Keeping it target independent means it is unit-tested on the host.
//!
//! ## Structure
//!
//! - **[`dto`]**: Records exchanged with the REST API
//! - **[`http`]**: Bearer header composition and auth-failure detection
//! - **[`session`]**: Token and user persistence over a [`session::SessionStore`]
//! - **[`routes`]**: Application routes and the protected-route guard
//! - **[`validation`]**: Listing, login, signup and photo selection checks
//! - **[`query`]**: Listing search parameters
//! - **[`utils`]**: Price, date and text formatting
//! - **[`constants`]**: Brands, fuel types, owner types, colours, limits
//! - **[`error`]**: [`ApiError`] and [`ValidationError`]
//!
//! ## Usage in the Frontend
//!
//! ```rust
//! use shared::session::{save_session, is_authenticated, MemoryStore};
//! use shared::http::{request_headers, BodyKind};
//! use shared::AuthResponse;
//!
//! let store = MemoryStore::new();
//! let auth: AuthResponse = serde_json::from_str(
//!     r#"{"access_token":"t0k","user":{"id":1,"name":"Ravi","email":"ravi@example.com"}}"#,
//! ).unwrap();
//! save_session(&store, &auth);
//!
//! assert!(is_authenticated(&store));
//! let token = shared::session::load_token(&store);
//! let headers = request_headers(token.as_deref(), BodyKind::Json);
//! assert_eq!(headers[0].1, "Bearer t0k");
//! ```

pub mod constants;
pub mod dto;
pub mod error;
pub mod http;
pub mod query;
pub mod routes;
pub mod session;
pub mod utils;
pub mod validation;

// Re-export commonly used types for convenience
pub use dto::*;
pub use error::{ApiError, ValidationError};
