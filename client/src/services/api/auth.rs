//! # Authentication Endpoints
//!
//! Login, registration, session check and password recovery.

use reqwest::Method;
use shared::{
    LoginRequest, LoginResponse, MeResponse, RecoveryPasswordRequest, RecoveryPasswordResponse, RegisterRequest,
};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let url = client.config().api_url("/api/auth/login");
    let result: Result<LoginResponse> = client
        .send_raw(client.request(Method::POST, &url).json(request))
        .await;

    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login request succeeded"),
        Err(e) => tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis(), "Login failed"),
    }
    result
}

/// Create a customer account. The answer has the login shape; the token may be absent.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<LoginResponse> {
    let url = client.config().api_url("/api/auth/register");
    let result: Result<LoginResponse> = client
        .send_raw(client.request(Method::POST, &url).json(request))
        .await;

    match &result {
        Ok(response) => tracing::info!(user_id = ?response.user().map(|u| u.id), "Registration succeeded"),
        Err(e) => tracing::warn!(error = %e, "Registration failed"),
    }
    result
}

/// Current user according to the backend session.
pub async fn me(client: &ApiClient) -> Result<MeResponse> {
    let url = client.config().api_url("/api/auth/me");
    client.send_raw(client.request(Method::GET, &url)).await
}

/// Ask the backend to email a password reset link.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn recovery_password(
    client: &ApiClient,
    request: &RecoveryPasswordRequest,
) -> Result<RecoveryPasswordResponse> {
    let url = client.config().api_url("/api/auth/recovery-password");
    client
        .send_raw(client.request(Method::POST, &url).json(request))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::api::client::tests::test_client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_posts_credentials_without_token() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "success": true,
            "message": "ok",
            "data": {
                "token": "jwt",
                "user": { "id": 1, "email": "ana@bakery.test", "role": "admin" }
            }
        });
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(serde_json::json!({ "email": "ana@bakery.test", "password": "secret1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let user = crate::services::auth::tests::user_with_role(5, shared::Role::Customer);
        client.session().establish("stale".to_string(), user);

        let response = login(
            &client,
            &LoginRequest {
                email: "ana@bakery.test".to_string(),
                password: "secret1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.token(), Some("jwt"));
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = login(
            &client,
            &LoginRequest {
                email: "ana@bakery.test".to_string(),
                password: "wrong!".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err, AppError::Unauthorized("Invalid credentials".to_string()));
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            first_name: "Leo".to_string(),
            last_name: "Ruiz".to_string(),
            email: "leo@bakery.test".to_string(),
            phone_number: None,
            password: "secret1".to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn test_register_posts_account_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(body_json(serde_json::json!({
                "first_name": "Leo",
                "last_name": "Ruiz",
                "email": "leo@bakery.test",
                "password": "secret1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "success": true,
                "message": "User registered",
                "data": {
                    "token": "jwt-new",
                    "user": { "id": "12", "email": "leo@bakery.test", "role": "customer" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let user = crate::services::auth::tests::user_with_role(5, shared::Role::Admin);
        client.session().establish("admin-token".to_string(), user);

        let response = register(&client, &registration()).await.unwrap();

        assert_eq!(response.token(), Some("jwt-new"));
        assert_eq!(response.user().map(|u| u.id), Some(12));
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(serde_json::json!({ "message": "Email already registered" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = register(&client, &registration()).await.unwrap_err();

        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[tokio::test]
    async fn test_me_and_recovery() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "id": "2", "email": "c@bakery.test", "role": "customer" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/recovery-password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Recovery email sent"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let me = me(&client).await.unwrap();
        assert_eq!(me.user.map(|u| u.id), Some(2));

        let recovery = recovery_password(
            &client,
            &RecoveryPasswordRequest {
                email: "c@bakery.test".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(recovery.message, "Recovery email sent");
    }
}
