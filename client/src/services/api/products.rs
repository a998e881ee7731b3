//! # Product Endpoints
//!
//! REST CRUD under `/api/v1/products` plus the GraphQL `searchProducts` query used by
//! the storefront search box.

use reqwest::Method;
use serde::Deserialize;
use shared::{Product, ProductDraft, ProductPatch};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const SEARCH_PRODUCTS_QUERY: &str = r#"
query SearchProducts($search: String!) {
  searchProducts(search: $search) {
    id
    name
    description
    price
    category_id
    created_at
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchProductsData {
    search_products: Vec<Product>,
}

fn products_url(client: &ApiClient, suffix: &str) -> String {
    client.config().v1_url(&format!("/products{}", suffix))
}

/// Full catalog (public).
pub async fn list_products(client: &ApiClient) -> Result<Vec<Product>> {
    client.send(client.request(Method::GET, &products_url(client, ""))).await
}

pub async fn get_product(client: &ApiClient, id: i64) -> Result<Product> {
    client
        .send(client.request(Method::GET, &products_url(client, &format!("/{}", id))))
        .await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_product(client: &ApiClient, draft: &ProductDraft) -> Result<Product> {
    client
        .send(client.request(Method::POST, &products_url(client, "")).json(draft))
        .await
}

#[tracing::instrument(skip(client, patch))]
pub async fn update_product(client: &ApiClient, id: i64, patch: &ProductPatch) -> Result<Product> {
    client
        .send(client.request(Method::PUT, &products_url(client, &format!("/{}", id))).json(patch))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_product(client: &ApiClient, id: i64) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, &products_url(client, &format!("/{}", id))))
        .await
}

/// Search products by name or description.
///
/// Sent to the GraphQL endpoint, which never receives the bearer token. A response
/// carrying `errors` fails with the first error's message.
#[tracing::instrument(skip(client))]
pub async fn search_products(client: &ApiClient, term: &str) -> Result<Vec<Product>> {
    let body = serde_json::json!({
        "query": SEARCH_PRODUCTS_QUERY,
        "variables": { "search": term },
    });

    let url = client.config().graphql_url();
    let response: GraphQlResponse<SearchProductsData> = client
        .send_raw(client.request(Method::POST, &url).json(&body))
        .await?;

    if let Some(error) = response.errors.into_iter().next() {
        tracing::warn!(error = %error.message, "GraphQL search failed");
        return Err(AppError::Api {
            status: 200,
            message: error.message,
        });
    }

    let products = response
        .data
        .map(|data| data.search_products)
        .unwrap_or_default();
    tracing::debug!(results = products.len(), "Product search finished");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::client::tests::test_client;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn product_json(id: i64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id.to_string(),
            "name": name,
            "description": "Fresh",
            "price": "12.50",
            "category_id": "2",
            "created_at": "2024-05-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_products_wrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [product_json(1, "Brownie"), product_json(2, "Tres leches")],
                "message": "ok"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let products = list_products(&client).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 12.5);
        assert_eq!(products[1].category_id, 2);
    }

    #[tokio::test]
    async fn test_get_product_wrapped_and_bare() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": product_json(7, "Flan")
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products/8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_json(8, "Alfajor")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let flan = get_product(&client, 7).await.unwrap();
        assert_eq!((flan.id, flan.name.as_str()), (7, "Flan"));
        assert_eq!(get_product(&client, 8).await.unwrap().name, "Alfajor");
    }

    #[tokio::test]
    async fn test_update_product_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/products/7"))
            .and(body_partial_json(serde_json::json!({ "price": 15.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": product_json(7, "Flan") })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let patch = ProductPatch {
            price: Some(15.0),
            ..ProductPatch::default()
        };
        assert_eq!(update_product(&client, 7, &patch).await.unwrap().name, "Flan");
    }

    #[tokio::test]
    async fn test_search_products_via_graphql_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(serde_json::json!({ "variables": { "search": "choc" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "searchProducts": [product_json(3, "Chocolate cake")] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let user = crate::services::auth::tests::user_with_role(1, shared::Role::Customer);
        client.session().establish("secret".to_string(), user);

        let results = search_products(&client, "choc").await.unwrap();
        assert_eq!(results[0].name, "Chocolate cake");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_search_products_graphql_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{ "message": "search must not be empty" }]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = search_products(&client, "").await.unwrap_err();
        assert_eq!(err.user_message(), "search must not be empty");
    }
}
