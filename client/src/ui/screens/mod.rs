//! # Screens
//!
//! One module per route.

pub mod admin;
pub mod customer;
pub mod login;
