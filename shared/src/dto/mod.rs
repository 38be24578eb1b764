//! # Data Transfer Objects (DTOs)
//!
//! Records exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration and the signed-in user
//! - [`vehicle`] - Listings, listing pages, create/update payloads, brands
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Identifiers**: accepted as JSON numbers or strings, kept as `String`
//! - **Missing fields**: defaulted where the backend may omit them
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! { "email": "ravi@example.com", "password": "secret1" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer",
//!   "user": { "id": 7, "name": "Ravi", "email": "ravi@example.com", "phone": "9876543210" }
//! }
//! ```

pub mod auth;
mod id;
pub mod vehicle;

pub use auth::*;
pub use vehicle::*;
