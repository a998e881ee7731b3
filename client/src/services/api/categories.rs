//! Category endpoints (`/api/v1/categories`).

use reqwest::Method;
use shared::{Category, CategoryDraft, CategoryPatch};

use super::client::ApiClient;
use crate::core::error::Result;

fn categories_url(client: &ApiClient, suffix: &str) -> String {
    client.config().v1_url(&format!("/categories{}", suffix))
}

pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>> {
    client.send(client.request(Method::GET, &categories_url(client, ""))).await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_category(client: &ApiClient, draft: &CategoryDraft) -> Result<Category> {
    client
        .send(client.request(Method::POST, &categories_url(client, "")).json(draft))
        .await
}

#[tracing::instrument(skip(client, patch))]
pub async fn update_category(client: &ApiClient, id: i64, patch: &CategoryPatch) -> Result<Category> {
    client
        .send(client.request(Method::PUT, &categories_url(client, &format!("/{}", id))).json(patch))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_category(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, &categories_url(client, &format!("/{}", id))))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::client::tests::test_client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_category_posts_draft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/categories"))
            .and(body_json(serde_json::json!({ "name": "Cakes", "description": "Layered" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "success": true,
                "data": { "id": 4, "name": "Cakes", "description": "Layered" },
                "message": "created"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let draft = CategoryDraft {
            name: "Cakes".to_string(),
            description: Some("Layered".to_string()),
        };
        let created = create_category(&client, &draft).await.unwrap();
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn test_delete_category() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/categories/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        delete_category(&client, 4).await.unwrap();
    }
}
