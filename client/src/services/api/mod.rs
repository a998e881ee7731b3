//! # Backend API Client Module
//!
//! HTTP client for the bakery backend. Handles authentication, user administration,
//! the product catalog, inventory and orders.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request execution, gateway trait impls
//! ├── interceptor.rs  - Bearer token attachment rules
//! ├── auth.rs         - /api/auth (login, me, recovery-password)
//! ├── users.rs        - /api/users (paged list, lookups, PATCH, soft delete)
//! ├── products.rs     - /api/v1/products and GraphQL searchProducts
//! ├── categories.rs   - /api/v1/categories
//! ├── ingredients.rs  - /api/v1/ingredients
//! └── orders.rs       - /api/v1/orders and /api/v1/order-statuses
//! ```
//!
//! ## Response Shapes
//!
//! Bodies are decoded through [`shared::ApiEnvelope`], so both `{ success, data }`
//! and bare payloads work. Error bodies are read for `message`/`error`; otherwise the
//! status reason phrase is used.

pub mod auth;
pub mod categories;
pub mod client;
pub mod ingredients;
pub mod interceptor;
pub mod orders;
pub mod products;
pub mod users;

pub use client::ApiClient;
