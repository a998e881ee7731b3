//! # User Endpoints
//!
//! User administration under `/api/users` (not versioned). Deleting a user is a soft
//! delete on the backend: the account is deactivated.

use reqwest::{Method, Url};
use shared::{ApiEnvelope, UpdateUserDto, User, UserDraft, UserQuery, UserStatus};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

fn users_url(client: &ApiClient, suffix: &str) -> String {
    client.config().api_url(&format!("/api/users{}", suffix))
}

/// One page of users, optionally filtered by role and active flag.
#[tracing::instrument(skip(client))]
pub async fn list_users(client: &ApiClient, query: &UserQuery) -> Result<Vec<User>> {
    let url = users_url(client, "");
    let envelope: ApiEnvelope<Vec<User>> = client
        .send_raw(client.request(Method::GET, &url).query(&query.to_pairs()))
        .await?;

    if let Some(pagination) = envelope.pagination() {
        tracing::debug!(
            total = pagination.total,
            total_pages = pagination.total_pages,
            "Users page loaded"
        );
    }
    Ok(envelope.into_data())
}

pub async fn get_user(client: &ApiClient, id: i64) -> Result<User> {
    let url = users_url(client, &format!("/{}", id));
    client.send(client.request(Method::GET, &url)).await
}

/// Look a user up by email. The address is percent-encoded as a single path segment.
pub async fn get_user_by_email(client: &ApiClient, email: &str) -> Result<User> {
    let mut url = Url::parse(&users_url(client, "/email"))
        .map_err(|e| AppError::Config(format!("Invalid users URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Config("Users URL cannot have path segments".to_string()))?
        .push(email.trim());

    client.send(client.request(Method::GET, url.as_str())).await
}

/// Online/offline status of a user.
pub async fn get_user_status(client: &ApiClient, id: i64) -> Result<UserStatus> {
    let url = users_url(client, &format!("/{}/status", id));
    client.send(client.request(Method::GET, &url)).await
}

#[tracing::instrument(skip(client, draft), fields(email = %draft.email, role = %draft.role))]
pub async fn create_user(client: &ApiClient, draft: &UserDraft) -> Result<User> {
    let url = users_url(client, "");
    client.send(client.request(Method::POST, &url).json(draft)).await
}

/// Partial update (`PATCH`).
#[tracing::instrument(skip(client, patch))]
pub async fn update_user(client: &ApiClient, id: i64, patch: &UpdateUserDto) -> Result<User> {
    let url = users_url(client, &format!("/{}", id));
    client.send(client.request(Method::PATCH, &url).json(patch)).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<()> {
    let url = users_url(client, &format!("/{}", id));
    client.send_empty(client.request(Method::DELETE, &url)).await
}
