//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form input validation (email, password, amounts)
//! - **[`runtime`]**: Global tokio runtime and `spawn` helper for UI-triggered work
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate helpers (price and timestamp formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
