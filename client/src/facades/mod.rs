//! # Facades
//!
//! Screen-facing state containers. Each facade owns the observable state of one
//! screen, calls the gateways in [`crate::core::service`], and reports outcomes
//! through the [`NotificationCenter`](crate::services::NotificationCenter).
//!
//! - **[`entity`]**: Generic list/detail/edit/delete facade for admin screens
//! - **[`entities`]**: Labels, search fields and filters for every managed resource
//! - **[`orders`]**: Order management plus the order-status catalog
//! - **[`dashboard`]**: Admin tabs and overview counters
//! - **[`customer`]**: Storefront catalog, cart and checkout

pub mod customer;
pub mod dashboard;
pub mod entities;
pub mod entity;
pub mod orders;

pub use customer::{CartItem, CustomerDashboardFacade, CustomerState, PendingOrder};
pub use dashboard::{
    AdminDashboardFacade, DashboardState, DashboardStateStore, DashboardStats, DashboardStatsLoader, DashboardTab,
};
pub use entities::{OrderFilter, ProductFilter, StatusFilter, UserFilter};
pub use entity::{EntityFacade, ManagementState};
pub use orders::OrderManagementFacade;
