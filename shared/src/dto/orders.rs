//! Order DTOs: orders, order items and order statuses.

use serde::{Deserialize, Serialize};

use crate::utils::{flexible_id, flexible_number};

/// Status id the backend assigns to freshly placed orders ("pending").
pub const PENDING_STATUS_ID: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "flexible_id::option")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "flexible_id::option")]
    pub order_id: Option<i64>,
    #[serde(with = "flexible_id")]
    pub product_id: i64,
    pub quantity: u32,
    #[serde(with = "flexible_number")]
    pub price_per_unit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(with = "flexible_id")]
    pub id: i64,
    #[serde(with = "flexible_id")]
    pub user_id: i64,
    #[serde(with = "flexible_id")]
    pub status_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(with = "flexible_number")]
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

/// Line of an order being placed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemDraft {
    pub product_id: i64,
    pub quantity: u32,
    pub price_per_unit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub user_id: i64,
    pub status_id: i64,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub items: Vec<OrderItemDraft>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatus {
    #[serde(with = "flexible_id")]
    pub id: i64,
    pub status_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatusDraft {
    pub status_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
}
