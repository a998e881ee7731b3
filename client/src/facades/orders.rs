//! Order management: the generic order facade plus the status catalog used to label
//! and filter orders.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{Order, OrderStatus};

use super::entity::EntityFacade;
use crate::core::error::Result;
use crate::core::service::CrudGateway;
use crate::services::notifications::NotificationCenter;

#[derive(Clone)]
pub struct OrderManagementFacade {
    orders: EntityFacade<Order>,
    status_gateway: Arc<dyn CrudGateway<OrderStatus>>,
    statuses: Arc<RwLock<Vec<OrderStatus>>>,
}

impl OrderManagementFacade {
    pub fn new(
        orders: Arc<dyn CrudGateway<Order>>,
        statuses: Arc<dyn CrudGateway<OrderStatus>>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            orders: EntityFacade::new(orders, notifications),
            status_gateway: statuses,
            statuses: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The underlying order list facade (CRUD, modals, search, status filter).
    pub fn orders(&self) -> &EntityFacade<Order> {
        &self.orders
    }

    /// Load orders. The status catalog is fetched first when still empty, so rows never
    /// render without their status names.
    pub async fn load(&self) -> Result<()> {
        if self.statuses.read().is_empty() {
            self.load_statuses().await;
        }
        self.orders.load().await
    }

    /// Fetch the status catalog. Failures are logged only.
    pub async fn load_statuses(&self) {
        match self.status_gateway.list().await {
            Ok(statuses) => {
                tracing::debug!(count = statuses.len(), "Order statuses loaded");
                *self.statuses.write() = statuses;
            }
            Err(e) => tracing::warn!(error = %e, "Error loading order statuses"),
        }
    }

    pub fn statuses(&self) -> Vec<OrderStatus> {
        self.statuses.read().clone()
    }

    pub fn status_name(&self, status_id: i64) -> Option<String> {
        self.statuses
            .read()
            .iter()
            .find(|status| status.id == status_id)
            .map(|status| status.status_name.clone())
    }

    pub fn reset(&self) {
        self.orders.reset();
        self.statuses.write().clear();
    }
}
