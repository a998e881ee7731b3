//! # Services Module
//!
//! Everything that talks to, or stands in front of, the backend.
//!
//! ```text
//! services/
//! ├── api/              - HTTP client, interceptor and endpoint functions
//! ├── auth.rs           - AuthSession (shared login state) and AuthService
//! └── notifications.rs  - Toast queue shown by the UI
//! ```
//!
//! `ApiClient` reads the token from the same `AuthSession` that `AuthService` writes,
//! so a login immediately applies to every later request.

pub mod api;
pub mod auth;
pub mod notifications;

pub use api::ApiClient;
pub use auth::{AuthService, AuthSession, AuthState};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
