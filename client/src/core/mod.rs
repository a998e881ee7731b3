//! # Core Abstractions
//!
//! Error types, configuration, logging and the gateway traits everything else is
//! written against.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`config`]**: `ClientConfig` loaded from `BAKERY_*` environment variables
//! - **[`logging`]**: `tracing` subscriber with a daily rolling log file
//! - **[`service`]**: Gateway traits for dependency injection
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use bakery_client::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! Facades hold `Arc<dyn ...>` gateways, so tests swap the HTTP client for mocks:
//!
//! ```rust,ignore
//! let products: Arc<dyn CrudGateway<Product>> = Arc::new(api_client.clone());
//! let products: Arc<dyn CrudGateway<Product>> = Arc::new(MockProducts::default());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::{AuthGateway, CatalogSearch, CrudGateway, EntityLabels, ManagedEntity, UserDirectory};
