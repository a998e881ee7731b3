//! Route guards.
//!
//! Guards only inspect the session and describe what should happen; the
//! [`Router`](super::Router) applies redirects and performs the logout.

use shared::Role;

use super::Route;
use crate::services::auth::AuthSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
    /// Session has an unusable role: clear it, then let the navigation through.
    LogoutAndAllow,
    /// Session has an unusable role: clear it and go elsewhere.
    LogoutAndRedirect(Route),
}

/// A guard attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Auth,
    Login,
    Role(&'static [Role]),
}

impl Guard {
    pub fn check(&self, session: &AuthSession) -> GuardOutcome {
        match self {
            Guard::Auth => auth_guard(session),
            Guard::Login => login_guard(session),
            Guard::Role(allowed) => role_guard(allowed, session),
        }
    }
}

/// Only authenticated sessions pass.
pub fn auth_guard(session: &AuthSession) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(Route::Login)
    }
}

/// Keeps authenticated users away from the login screen.
pub fn login_guard(session: &AuthSession) -> GuardOutcome {
    if !session.is_authenticated() {
        return GuardOutcome::Allow;
    }
    match session.role().and_then(Route::dashboard_for) {
        Some(dashboard) => GuardOutcome::Redirect(dashboard),
        None => GuardOutcome::LogoutAndAllow,
    }
}

/// Only sessions whose role is in `allowed` pass; others go to their own dashboard.
pub fn role_guard(allowed: &[Role], session: &AuthSession) -> GuardOutcome {
    if !session.is_authenticated() {
        return GuardOutcome::Redirect(Route::Login);
    }

    let role = session.role();
    if role.is_some_and(|role| allowed.contains(&role)) {
        return GuardOutcome::Allow;
    }

    match role.and_then(Route::dashboard_for) {
        Some(dashboard) => GuardOutcome::Redirect(dashboard),
        None => GuardOutcome::LogoutAndRedirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::tests::user_with_role;

    fn session_with(role: Option<Role>) -> AuthSession {
        let session = AuthSession::new();
        if let Some(role) = role {
            session.establish("t".to_string(), user_with_role(1, role));
        }
        session
    }

    #[test]
    fn test_auth_guard() {
        assert_eq!(auth_guard(&session_with(None)), GuardOutcome::Redirect(Route::Login));
        assert_eq!(auth_guard(&session_with(Some(Role::Customer))), GuardOutcome::Allow);
    }

    #[test]
    fn test_login_guard() {
        assert_eq!(login_guard(&session_with(None)), GuardOutcome::Allow);
        assert_eq!(
            login_guard(&session_with(Some(Role::Admin))),
            GuardOutcome::Redirect(Route::AdminDashboard)
        );
        assert_eq!(
            login_guard(&session_with(Some(Role::Customer))),
            GuardOutcome::Redirect(Route::CustomerDashboard)
        );
        assert_eq!(login_guard(&session_with(Some(Role::Unknown))), GuardOutcome::LogoutAndAllow);
    }

    #[test]
    fn test_role_guard() {
        let admins: &[Role] = &[Role::Admin];
        assert_eq!(role_guard(admins, &session_with(None)), GuardOutcome::Redirect(Route::Login));
        assert_eq!(role_guard(admins, &session_with(Some(Role::Admin))), GuardOutcome::Allow);
        assert_eq!(
            role_guard(admins, &session_with(Some(Role::Customer))),
            GuardOutcome::Redirect(Route::CustomerDashboard)
        );
        assert_eq!(
            role_guard(admins, &session_with(Some(Role::Unknown))),
            GuardOutcome::LogoutAndRedirect(Route::Login)
        );
        assert_eq!(
            role_guard(&[Role::Admin, Role::Customer], &session_with(Some(Role::Customer))),
            GuardOutcome::Allow
        );
    }
}
