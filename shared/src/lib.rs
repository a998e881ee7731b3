//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the bakery client and the Pasteleria backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, recovery and session DTOs
//!   - **[`dto::users`]**: User administration DTOs
//!   - **[`dto::catalog`]**: Products, categories and ingredients
//!   - **[`dto::orders`]**: Orders, order items and order statuses
//!   - **[`dto::envelope`]**: The `{ success, data, message }` response wrapper
//! - **[`utils`]**: Shared helpers
//!   - **[`utils::flexible_id`]**: Accept ids as numbers or numeric strings
//!   - **[`utils::format_price`]**: Format prices for display
//!
//! ## Wire Format
//!
//! The backend uses **snake_case** field names, which is also the default `serde` mapping.
//! Optional write fields are omitted from JSON when `None`
//! (using `#[serde(skip_serializing_if = "Option::is_none")]`), so PATCH/PUT payloads only
//! carry the fields that actually changed.
//!
//! Most endpoints wrap their payload:
//!
//! ```text
//! {
//!   "success": true,
//!   "data": [ { "id": 1, "name": "Tres leches", ... } ],
//!   "message": "Products retrieved"
//! }
//! ```
//!
//! but some answer with the bare object. [`ApiEnvelope`] accepts both.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::{ApiEnvelope, Product};
//!
//! let body = r#"{"success":true,"data":[],"message":"ok"}"#;
//! let products: Vec<Product> = serde_json::from_str::<ApiEnvelope<Vec<Product>>>(body)
//!     .unwrap()
//!     .into_data();
//! assert!(products.is_empty());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
