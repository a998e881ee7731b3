//! # Bakery Client - Library Root
//!
//! Native desktop client for the bakery backend: an admin dashboard for managing
//! users, products, categories, ingredients and orders, and a customer storefront with
//! a cart and checkout. This library crate contains every module used by the binary
//! crate (`main.rs`).
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bakery-client (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui_extras    - Tables                               │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client with cookie store        │
//! │  tracing        - Structured logging                   │
//! └────────────────────────────────────────────────────────┘
//!          │ REST (/api/v1) and GraphQL
//!          ▼
//! ┌─────────────────┐
//! │  Bakery backend │
//! └─────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (BakeryApp, events, handlers, edit buffers)
//!   │   ├── routing (routes and guards)
//!   │   └── facades (screen state + actions)
//!   │       └── services (ApiClient, AuthService, NotificationCenter)
//!   │           └── core (errors, config, gateway traits)
//!   │
//!   └── ui (screens, widgets, theme)
//! ```
//!
//! ## Core Concepts
//!
//! ### Gateways and Facades
//!
//! Facades are written against the traits in [`core::service`]. Production code hands
//! them the [`services::ApiClient`]; tests hand them in-memory gateways. Facade state
//! lives behind `Arc<RwLock<_>>` and the UI reads cloned snapshots every frame.
//!
//! ### Session
//!
//! [`services::AuthSession`] is shared by the auth service and the HTTP interceptor:
//! a login attaches the bearer token to every later request, and a 401 clears it.
//! [`routing::Router`] re-runs the route guards every tick, so a cleared session sends
//! the user back to the login screen.

pub mod app;
pub mod core;
pub mod facades;
pub mod routing;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{AppEvent, BakeryApp};
pub use core::{AppError, Result};
