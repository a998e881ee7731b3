//! # Event Handlers
//!
//! User action handlers. Each one validates on the main thread, then hands the async
//! part to [`Tasks`](crate::app::Tasks).

pub mod admin;
pub mod auth;
pub mod customer;
pub mod navigation;
