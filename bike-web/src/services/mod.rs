//! # Backend API Services
//!
//! ```text
//! services/
//! ├── mod.rs       - Module exports
//! ├── api.rs       - gloo-net wrapper: bearer token, auth-failure redirect
//! ├── auth.rs      - Login, registration, logout
//! └── vehicles.rs  - Listing CRUD, image upload, brand list
//! ```

pub mod api;
pub mod auth;
pub mod vehicles;
