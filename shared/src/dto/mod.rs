//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and the backend via the REST and GraphQL APIs.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, session and password recovery DTOs
//! - [`users`] - User administration DTOs
//! - [`catalog`] - Products, categories and ingredients
//! - [`orders`] - Orders and order statuses
//! - [`envelope`] - Response wrapper and error body
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "ana@pasteleria.com",
//!   "password": "secret123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "message": "Login successful",
//!   "data": {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "user": { "id": 1, "email": "ana@pasteleria.com", "role": "admin", ... }
//!   }
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod orders;
pub mod users;

pub use auth::*;
pub use catalog::*;
pub use envelope::*;
pub use orders::*;
pub use users::*;
