//! # Authentication State
//!
//! [`AuthSession`] is the single source of truth for "who is logged in". It is shared
//! (cheaply cloned) between the HTTP interceptor, the route guards and the facades.
//! [`AuthService`] performs the login, registration, recovery and session-check calls
//! and updates it.
//!
//! The token lives in memory only. Restarting the client starts logged out unless the
//! backend still accepts the session cookie, which [`AuthService::check_authentication`]
//! detects through `GET /api/auth/me`.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, RecoveryPasswordRequest, RecoveryPasswordResponse, RegisterRequest, Role, User};

use crate::core::error::{AppError, Result};
use crate::core::service::AuthGateway;

/// Snapshot of the authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Shared, thread-safe authentication state.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    inner: Arc<RwLock<AuthState>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.inner.read().user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated
    }

    /// Store a fresh login.
    pub fn establish(&self, token: String, user: User) {
        let mut state = self.inner.write();
        state.token = Some(token);
        state.user = Some(user);
        state.is_authenticated = true;
    }

    /// Store a user recovered from the backend session; any token in memory is kept.
    pub fn restore(&self, user: User) {
        let mut state = self.inner.write();
        state.user = Some(user);
        state.is_authenticated = true;
    }

    pub fn clear(&self) {
        *self.inner.write() = AuthState::default();
    }
}

/// Login, logout and session checks.
#[derive(Clone)]
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    session: AuthSession,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGateway>, session: AuthSession) -> Self {
        Self { gateway, session }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Authenticate and store the session.
    ///
    /// A response without both token and user is rejected and leaves the state untouched.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: LoginRequest) -> Result<User> {
        let response = self.gateway.login(credentials).await?;

        let (token, user) = response.into_session().ok_or_else(|| {
            tracing::warn!("Login response carried no session");
            AppError::Unauthorized("Invalid server response".to_string())
        })?;

        tracing::info!(user_id = user.id, role = %user.role, "Login successful");
        self.session.establish(token, user.clone());
        Ok(user)
    }

    /// Create an account. The new user still has to sign in; the session is not touched.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, mut request: RegisterRequest) -> Result<Option<User>> {
        request.email = request.email.trim().to_string();
        let response = self.gateway.register(request).await?;
        Ok(response.user().cloned())
    }

    pub async fn recovery_password(&self, email: &str) -> Result<RecoveryPasswordResponse> {
        self.gateway
            .recovery_password(RecoveryPasswordRequest {
                email: email.trim().to_string(),
            })
            .await
    }

    /// Clear the session. Navigation back to the login screen is the router's job.
    pub fn logout(&self) {
        if let Some(user) = self.session.user() {
            tracing::info!(user_id = user.id, "Logging out");
        }
        self.session.clear();
    }

    /// Ask the backend whether the current session is still valid.
    ///
    /// Returns `true` and stores the user when `/me` answers with one. Any failure, or an
    /// answer without a user, clears the session and returns `false`.
    pub async fn check_authentication(&self) -> bool {
        match self.gateway.me().await {
            Ok(response) => match response.user {
                Some(user) => {
                    tracing::debug!(user_id = user.id, "Session restored");
                    self.session.restore(user);
                    true
                }
                None => {
                    self.session.clear();
                    false
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "No active session");
                self.session.clear();
                false
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.user()
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session.role() == Some(role)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{LoginResponse, MeResponse, SessionPayload};

    pub(crate) fn user_with_role(id: i64, role: Role) -> User {
        User {
            id,
            email: format!("user{}@bakery.test", id),
            first_name: "Ana".to_string(),
            last_name: "Paz".to_string(),
            phone_number: None,
            role,
            is_active: Some(true),
            created_at: None,
            updated_at: None,
            last_seen: None,
        }
    }

    /// Auth gateway returning canned answers.
    #[derive(Default)]
    pub(crate) struct MockAuthGateway {
        pub login: Mutex<Option<Result<LoginResponse>>>,
        pub me: Mutex<Option<Result<MeResponse>>>,
        pub recovery_requests: Mutex<Vec<String>>,
        pub registered: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthGateway for MockAuthGateway {
        async fn login(&self, _request: LoginRequest) -> Result<LoginResponse> {
            self.login
                .lock()
                .take()
                .unwrap_or_else(|| Err(AppError::Unauthorized("Invalid credentials".to_string())))
        }

        async fn me(&self) -> Result<MeResponse> {
            self.me
                .lock()
                .take()
                .unwrap_or_else(|| Err(AppError::Unauthorized("No session".to_string())))
        }

        async fn register(&self, request: RegisterRequest) -> Result<LoginResponse> {
            self.registered.lock().push(request.email);
            Ok(LoginResponse::Direct(SessionPayload {
                token: Some("fresh".to_string()),
                user: Some(user_with_role(20, Role::Customer)),
            }))
        }

        async fn recovery_password(&self, request: RecoveryPasswordRequest) -> Result<RecoveryPasswordResponse> {
            self.recovery_requests.lock().push(request.email);
            Ok(RecoveryPasswordResponse {
                success: true,
                message: "Email sent".to_string(),
            })
        }
    }

    pub(crate) fn logged_in_service(role: Role) -> AuthService {
        let session = AuthSession::new();
        session.establish("token-1".to_string(), user_with_role(1, role));
        AuthService::new(Arc::new(MockAuthGateway::default()), session)
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "ana@bakery.test".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let gateway = MockAuthGateway::default();
        *gateway.login.lock() = Some(Ok(LoginResponse::Direct(SessionPayload {
            token: Some("jwt".to_string()),
            user: Some(user_with_role(3, Role::Admin)),
        })));
        let service = AuthService::new(Arc::new(gateway), AuthSession::new());

        let user = service.login(credentials()).await.unwrap();

        assert_eq!(user.id, 3);
        assert!(service.is_authenticated());
        assert!(service.is_admin());
        assert_eq!(service.token().as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_login_without_token_is_rejected() {
        let gateway = MockAuthGateway::default();
        *gateway.login.lock() = Some(Ok(LoginResponse::Direct(SessionPayload {
            token: None,
            user: Some(user_with_role(3, Role::Admin)),
        })));
        let service = AuthService::new(Arc::new(gateway), AuthSession::new());

        let err = service.login(credentials()).await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
        assert!(!service.is_authenticated());
        assert_eq!(service.session().snapshot(), AuthState::default());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let service = AuthService::new(Arc::new(MockAuthGateway::default()), AuthSession::new());
        assert!(service.login(credentials()).await.is_err());
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_check_authentication_restores_user() {
        let gateway = MockAuthGateway::default();
        *gateway.me.lock() = Some(Ok(MeResponse {
            user: Some(user_with_role(9, Role::Customer)),
        }));
        let service = AuthService::new(Arc::new(gateway), AuthSession::new());

        assert!(service.check_authentication().await);
        assert!(service.has_role(Role::Customer));
        assert_eq!(service.token(), None);
    }

    #[tokio::test]
    async fn test_check_authentication_failure_clears_session() {
        let service = logged_in_service(Role::Admin);
        assert!(!service.check_authentication().await);
        assert!(!service.is_authenticated());
        assert_eq!(service.current_user(), None);
    }

    #[tokio::test]
    async fn test_check_authentication_without_user_clears_session() {
        let gateway = MockAuthGateway::default();
        *gateway.me.lock() = Some(Ok(MeResponse { user: None }));
        let session = AuthSession::new();
        session.establish("t".to_string(), user_with_role(1, Role::Admin));
        let service = AuthService::new(Arc::new(gateway), session);

        assert!(!service.check_authentication().await);
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_leaves_session_alone() {
        let gateway = Arc::new(MockAuthGateway::default());
        let service = AuthService::new(gateway.clone(), AuthSession::new());

        let user = service
            .register(RegisterRequest {
                first_name: "Leo".to_string(),
                last_name: "Ruiz".to_string(),
                email: " leo@bakery.test ".to_string(),
                phone_number: None,
                password: "secret1".to_string(),
                role: None,
            })
            .await
            .unwrap();

        assert_eq!(user.map(|u| u.id), Some(20));
        assert_eq!(gateway.registered.lock().as_slice(), ["leo@bakery.test"]);
        assert!(!service.is_authenticated());
        assert_eq!(service.token(), None);
    }

    #[tokio::test]
    async fn test_recovery_password_trims_email() {
        let gateway = Arc::new(MockAuthGateway::default());
        let service = AuthService::new(gateway.clone(), AuthSession::new());

        let response = service.recovery_password("  ana@bakery.test ").await.unwrap();

        assert!(response.success);
        assert_eq!(gateway.recovery_requests.lock().as_slice(), ["ana@bakery.test"]);
    }

    #[test]
    fn test_logout_clears_everything() {
        let service = logged_in_service(Role::Customer);
        service.logout();
        assert_eq!(service.session().snapshot(), AuthState::default());
        assert!(!service.is_admin());
    }
}
