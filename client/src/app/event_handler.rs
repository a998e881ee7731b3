//! # Event Handler
//!
//! Applies [`AppEvent`]s from background tasks on the main thread. Each event is
//! handled in full before the next one, so router and form updates never interleave.

use shared::User;

use crate::app::{AppEvent, BakeryApp};
use crate::core::error::AppError;
use crate::routing::Route;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for BakeryApp {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionChecked(authenticated) => {
                self.handle_session_checked(authenticated);
            }
            AppEvent::LoginFinished(result) => {
                self.handle_login_finished(result);
            }
            AppEvent::RecoveryFinished(result) => {
                let (sent, message) = self.recovery.finish(&result);
                if sent {
                    self.notifications.success("Email sent", &message);
                } else {
                    self.notifications.error("Error", &message);
                }
            }
            AppEvent::UserStatusLoaded { user_id, result } => {
                self.user_status.apply(user_id, result);
            }
            AppEvent::CheckoutFinished(placed) => {
                if placed {
                    self.checkout.special_instructions.clear();
                }
            }
        }
    }
}

impl BakeryApp {
    fn handle_session_checked(&mut self, authenticated: bool) {
        self.session_checked = true;
        tracing::info!(authenticated, "Session check finished");
        if authenticated {
            // The login guard forwards an authenticated user to their dashboard.
            self.navigate(Route::Login);
        }
    }

    fn handle_login_finished(&mut self, result: Result<User, AppError>) {
        match result {
            Ok(user) => match Route::dashboard_for(user.role) {
                Some(dashboard) => {
                    self.login.succeed();
                    self.navigate(dashboard);
                }
                None => {
                    tracing::warn!(user_id = user.id, role = %user.role, "Login with unsupported role");
                    self.auth.logout();
                    self.login.reject_role();
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Login failed");
                self.login.fail(&err);
            }
        }
    }
}
