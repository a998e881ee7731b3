//! Ingredient inventory endpoints (`/api/v1/ingredients`).

use reqwest::Method;
use shared::{Ingredient, IngredientDraft, IngredientPatch};

use super::client::ApiClient;
use crate::core::error::Result;

fn ingredients_url(client: &ApiClient, suffix: &str) -> String {
    client.config().v1_url(&format!("/ingredients{}", suffix))
}

pub async fn list_ingredients(client: &ApiClient) -> Result<Vec<Ingredient>> {
    client.send(client.request(Method::GET, &ingredients_url(client, ""))).await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_ingredient(client: &ApiClient, draft: &IngredientDraft) -> Result<Ingredient> {
    client
        .send(client.request(Method::POST, &ingredients_url(client, "")).json(draft))
        .await
}

#[tracing::instrument(skip(client, patch))]
pub async fn update_ingredient(client: &ApiClient, id: i64, patch: &IngredientPatch) -> Result<Ingredient> {
    client
        .send(client.request(Method::PUT, &ingredients_url(client, &format!("/{}", id))).json(patch))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_ingredient(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, &ingredients_url(client, &format!("/{}", id))))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::client::tests::test_client;
    use shared::IngredientUnit;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_and_update_ingredients() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ingredients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": 1, "name": "Flour", "stock_quantity": "2.5", "unit": "kg" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/ingredients/1"))
            .and(body_partial_json(serde_json::json!({ "unit": "g" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "id": 1, "name": "Flour", "stock_quantity": 2500, "unit": "g" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let items = list_ingredients(&client).await.unwrap();
        assert_eq!(items[0].stock_quantity, 2.5);
        assert_eq!(items[0].unit, IngredientUnit::Kg);

        let patch = IngredientPatch {
            unit: Some(IngredientUnit::G),
            ..IngredientPatch::default()
        };
        let updated = update_ingredient(&client, 1, &patch).await.unwrap();
        assert_eq!(updated.stock_quantity, 2500.0);
    }
}
