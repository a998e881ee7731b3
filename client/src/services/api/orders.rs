//! # Order Endpoints
//!
//! Orders (`/api/v1/orders`) and the order-status catalog (`/api/v1/order-statuses`).

use reqwest::Method;
use shared::{Order, OrderDraft, OrderPatch, OrderStatus, OrderStatusDraft, OrderStatusPatch};

use super::client::ApiClient;
use crate::core::error::Result;

fn orders_url(client: &ApiClient, suffix: &str) -> String {
    client.config().v1_url(&format!("/orders{}", suffix))
}

fn statuses_url(client: &ApiClient, suffix: &str) -> String {
    client.config().v1_url(&format!("/order-statuses{}", suffix))
}

pub async fn list_orders(client: &ApiClient) -> Result<Vec<Order>> {
    client.send(client.request(Method::GET, &orders_url(client, ""))).await
}

pub async fn get_order(client: &ApiClient, id: i64) -> Result<Order> {
    client
        .send(client.request(Method::GET, &orders_url(client, &format!("/{}", id))))
        .await
}

/// Place an order with its line items.
#[tracing::instrument(skip(client, draft), fields(user_id = draft.user_id, items = draft.items.len()))]
pub async fn create_order(client: &ApiClient, draft: &OrderDraft) -> Result<Order> {
    client
        .send(client.request(Method::POST, &orders_url(client, "")).json(draft))
        .await
}

#[tracing::instrument(skip(client, patch))]
pub async fn update_order(client: &ApiClient, id: i64, patch: &OrderPatch) -> Result<Order> {
    client
        .send(client.request(Method::PUT, &orders_url(client, &format!("/{}", id))).json(patch))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_order(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, &orders_url(client, &format!("/{}", id))))
        .await
}

pub async fn list_order_statuses(client: &ApiClient) -> Result<Vec<OrderStatus>> {
    client.send(client.request(Method::GET, &statuses_url(client, ""))).await
}

pub async fn get_order_status(client: &ApiClient, id: i64) -> Result<OrderStatus> {
    client
        .send(client.request(Method::GET, &statuses_url(client, &format!("/{}", id))))
        .await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.status_name))]
pub async fn create_order_status(client: &ApiClient, draft: &OrderStatusDraft) -> Result<OrderStatus> {
    client
        .send(client.request(Method::POST, &statuses_url(client, "")).json(draft))
        .await
}

#[tracing::instrument(skip(client, patch))]
pub async fn update_order_status(client: &ApiClient, id: i64, patch: &OrderStatusPatch) -> Result<OrderStatus> {
    client
        .send(client.request(Method::PUT, &statuses_url(client, &format!("/{}", id))).json(patch))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_order_status(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, &statuses_url(client, &format!("/{}", id))))
        .await
}
