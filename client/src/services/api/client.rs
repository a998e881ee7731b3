//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every request goes through [`ApiClient::request`], which applies the bearer-token
//! interceptor, and is executed by [`ApiClient::execute`], which logs it under a
//! request id and turns non-success statuses into [`AppError`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    ApiEnvelope, Category, CategoryDraft, CategoryPatch, ErrorResponse, Ingredient, IngredientDraft,
    IngredientPatch, LoginRequest, LoginResponse, MeResponse, Order, OrderDraft, OrderPatch,
    OrderStatus, OrderStatusDraft, OrderStatusPatch, Product, ProductDraft, ProductPatch,
    RecoveryPasswordRequest, RecoveryPasswordResponse, RegisterRequest, UpdateUserDto, User,
    UserDraft, UserQuery, UserStatus,
};
use uuid::Uuid;

use super::{auth, categories, ingredients, interceptor, orders, products, users};
use crate::core::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{AuthGateway, CatalogSearch, CrudGateway, UserDirectory};
use crate::services::auth::AuthSession;

/// HTTP client for the bakery backend.
///
/// Cloning is cheap: the connection pool, configuration and session are shared.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    config: Arc<ClientConfig>,
    session: AuthSession,
}

impl ApiClient {
    /// Create a client with the configured timeout and a cookie store, so the
    /// backend's session cookie is sent back like a browser would.
    pub fn new(config: ClientConfig, session: AuthSession) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Start a request with the interceptor applied.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let token = self.session.token();
        interceptor::authorize(
            self.client.request(method, url),
            url,
            token.as_deref(),
            &self.config.graphql_url(),
        )
    }

    /// Send a request; non-success statuses become errors.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        let request_id = Uuid::new_v4();
        let method = request.method().clone();
        let url = request.url().clone();
        let start = Instant::now();

        tracing::debug!(%request_id, %method, %url, "Sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(%request_id, %method, %url, error = %e, "Network error");
            AppError::from(e)
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(%request_id, status = status.as_u16(), duration_ms, "Request succeeded");
            Ok(response)
        } else {
            let error = error_from_response(response).await;
            tracing::warn!(
                %request_id,
                %method,
                %url,
                status = status.as_u16(),
                duration_ms,
                error = %error,
                "Request failed"
            );
            Err(error)
        }
    }

    /// Send and decode a body that may or may not be wrapped in `{ success, data }`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let envelope: ApiEnvelope<T> = self.send_raw(builder).await?;
        Ok(envelope.into_data())
    }

    /// Send and decode the body as-is.
    pub(crate) async fn send_raw<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Decode(e.to_string())
        })
    }

    /// Send a request whose response body is irrelevant.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await.map(|_| ())
    }
}

/// Build an [`AppError`] from a non-success response.
///
/// The message comes from the JSON body (`message`, then `error`), falling back to
/// the status' reason phrase. 401 and 403 map to [`AppError::Unauthorized`].
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|error| error.text().map(str::to_string))
        .unwrap_or_else(|| fallback_message(status));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(message),
        _ => AppError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        auth::login(self, &request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<LoginResponse> {
        auth::register(self, &request).await
    }

    async fn me(&self) -> Result<MeResponse> {
        auth::me(self).await
    }

    async fn recovery_password(&self, request: RecoveryPasswordRequest) -> Result<RecoveryPasswordResponse> {
        auth::recovery_password(self, &request).await
    }
}

#[async_trait]
impl CrudGateway<User> for ApiClient {
    async fn list(&self) -> Result<Vec<User>> {
        let query = UserQuery {
            limit: self.config.users_page_size,
            ..UserQuery::default()
        };
        users::list_users(self, &query).await
    }

    async fn create(&self, draft: UserDraft) -> Result<User> {
        users::create_user(self, &draft).await
    }

    async fn update(&self, id: i64, patch: UpdateUserDto) -> Result<User> {
        users::update_user(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        users::delete_user(self, id).await
    }
}

#[async_trait]
impl UserDirectory for ApiClient {
    async fn user_status(&self, id: i64) -> Result<UserStatus> {
        users::get_user_status(self, id).await
    }

    async fn user_by_email(&self, email: &str) -> Result<User> {
        users::get_user_by_email(self, email).await
    }
}

#[async_trait]
impl CrudGateway<Product> for ApiClient {
    async fn list(&self) -> Result<Vec<Product>> {
        products::list_products(self).await
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        products::create_product(self, &draft).await
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product> {
        products::update_product(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        products::delete_product(self, id).await
    }
}

#[async_trait]
impl CatalogSearch for ApiClient {
    async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
        products::search_products(self, term).await
    }
}

#[async_trait]
impl CrudGateway<Category> for ApiClient {
    async fn list(&self) -> Result<Vec<Category>> {
        categories::list_categories(self).await
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category> {
        categories::create_category(self, &draft).await
    }

    async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category> {
        categories::update_category(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        categories::delete_category(self, id).await
    }
}

#[async_trait]
impl CrudGateway<Ingredient> for ApiClient {
    async fn list(&self) -> Result<Vec<Ingredient>> {
        ingredients::list_ingredients(self).await
    }

    async fn create(&self, draft: IngredientDraft) -> Result<Ingredient> {
        ingredients::create_ingredient(self, &draft).await
    }

    async fn update(&self, id: i64, patch: IngredientPatch) -> Result<Ingredient> {
        ingredients::update_ingredient(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        ingredients::delete_ingredient(self, id).await
    }
}

#[async_trait]
impl CrudGateway<Order> for ApiClient {
    async fn list(&self) -> Result<Vec<Order>> {
        orders::list_orders(self).await
    }

    async fn create(&self, draft: OrderDraft) -> Result<Order> {
        orders::create_order(self, &draft).await
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Order> {
        orders::update_order(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        orders::delete_order(self, id).await
    }
}

#[async_trait]
impl CrudGateway<OrderStatus> for ApiClient {
    async fn list(&self) -> Result<Vec<OrderStatus>> {
        orders::list_order_statuses(self).await
    }

    async fn create(&self, draft: OrderStatusDraft) -> Result<OrderStatus> {
        orders::create_order_status(self, &draft).await
    }

    async fn update(&self, id: i64, patch: OrderStatusPatch) -> Result<OrderStatus> {
        orders::update_order_status(self, id, &patch).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        orders::delete_order_status(self, id).await
    }
}
