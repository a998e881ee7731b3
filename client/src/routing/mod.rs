//! # Routing
//!
//! Three screens, each protected by a guard chain:
//!
//! | Route                | Path                  | Guards                  |
//! |----------------------|-----------------------|-------------------------|
//! | `Login`              | `/login`              | login                   |
//! | `AdminDashboard`     | `/admin/dashboard`    | auth, role(admin)       |
//! | `CustomerDashboard`  | `/customer/dashboard` | auth, role(customer)    |
//!
//! Unknown paths resolve to the login screen.

pub mod guards;

use shared::Role;

use crate::services::auth::AuthService;
pub use guards::{Guard, GuardOutcome};

/// Upper bound on redirects followed by a single navigation.
const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Login,
    AdminDashboard,
    CustomerDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::AdminDashboard => "/admin/dashboard",
            Route::CustomerDashboard => "/customer/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Route {
        match path.trim().trim_end_matches('/') {
            "/admin" | "/admin/dashboard" => Route::AdminDashboard,
            "/customer" | "/customer/dashboard" => Route::CustomerDashboard,
            _ => Route::Login,
        }
    }

    pub fn guards(&self) -> &'static [Guard] {
        match self {
            Route::Login => &[Guard::Login],
            Route::AdminDashboard => &[Guard::Auth, Guard::Role(&[Role::Admin])],
            Route::CustomerDashboard => &[Guard::Auth, Guard::Role(&[Role::Customer])],
        }
    }

    /// Landing screen for a role; `None` for roles the client does not serve.
    pub fn dashboard_for(role: Role) -> Option<Route> {
        match role {
            Role::Admin => Some(Route::AdminDashboard),
            Role::Customer => Some(Route::CustomerDashboard),
            Role::Unknown => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Current screen plus guarded navigation.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `target`, following guard redirects. Returns the landing route.
    pub fn navigate(&mut self, target: Route, auth: &AuthService) -> Route {
        let mut target = target;

        'redirects: for _ in 0..MAX_REDIRECTS {
            for guard in target.guards() {
                match guard.check(auth.session()) {
                    GuardOutcome::Allow => {}
                    GuardOutcome::Redirect(next) => {
                        tracing::debug!(from = %target, to = %next, "Navigation redirected");
                        target = next;
                        continue 'redirects;
                    }
                    GuardOutcome::LogoutAndAllow => {
                        tracing::warn!("Session with unknown role, logging out");
                        auth.logout();
                    }
                    GuardOutcome::LogoutAndRedirect(next) => {
                        tracing::warn!("Session with unknown role, logging out");
                        auth.logout();
                        target = next;
                        continue 'redirects;
                    }
                }
            }

            self.current = target;
            return target;
        }

        tracing::error!(target = %target, "Too many redirects, falling back to login");
        auth.logout();
        self.current = Route::Login;
        Route::Login
    }

    pub fn navigate_path(&mut self, path: &str, auth: &AuthService) -> Route {
        self.navigate(Route::from_path(path), auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::tests::{logged_in_service, MockAuthGateway};
    use crate::services::auth::AuthSession;
    use std::sync::Arc;

    fn logged_out() -> AuthService {
        AuthService::new(Arc::new(MockAuthGateway::default()), AuthSession::new())
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/admin"), Route::AdminDashboard);
        assert_eq!(Route::from_path("/admin/"), Route::AdminDashboard);
        assert_eq!(Route::from_path("/customer/dashboard"), Route::CustomerDashboard);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/nowhere"), Route::Login);
    }

    #[test]
    fn test_logged_out_user_lands_on_login() {
        let auth = logged_out();
        let mut router = Router::new();
        assert_eq!(router.navigate(Route::AdminDashboard, &auth), Route::Login);
        assert_eq!(router.navigate_path("/customer", &auth), Route::Login);
    }

    #[test]
    fn test_admin_is_kept_on_admin_dashboard() {
        let auth = logged_in_service(Role::Admin);
        let mut router = Router::new();
        assert_eq!(router.navigate(Route::Login, &auth), Route::AdminDashboard);
        assert_eq!(router.navigate(Route::CustomerDashboard, &auth), Route::AdminDashboard);
        assert_eq!(router.current(), Route::AdminDashboard);
    }

    #[test]
    fn test_customer_is_kept_on_customer_dashboard() {
        let auth = logged_in_service(Role::Customer);
        let mut router = Router::new();
        assert_eq!(router.navigate(Route::AdminDashboard, &auth), Route::CustomerDashboard);
    }

    #[test]
    fn test_unknown_role_is_logged_out() {
        let auth = logged_in_service(Role::Unknown);
        let mut router = Router::new();
        assert_eq!(router.navigate(Route::AdminDashboard, &auth), Route::Login);
        assert!(!auth.is_authenticated());

        let auth = logged_in_service(Role::Unknown);
        assert_eq!(router.navigate(Route::Login, &auth), Route::Login);
        assert!(!auth.is_authenticated());
    }
}
