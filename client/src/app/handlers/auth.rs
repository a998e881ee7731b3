//! # Authentication Handlers
//!
//! Handlers for login, password recovery, the startup session check and logout.

use crate::app::{AppEvent, BakeryApp, LoginForm, RecoveryForm, Tasks};
use crate::routing::Route;
use crate::services::AuthService;

/// Ask `/me` whether a cookie session is still alive.
pub(crate) fn handle_session_check(auth: &AuthService, tasks: &Tasks) {
    let auth = auth.clone();
    tasks.report(async move { AppEvent::SessionChecked(auth.check_authentication().await) });
}

/// Handle login button click
///
/// Internal handler function - use [`BakeryApp::handle_login_submit`] instead.
pub(crate) fn handle_login_submit(auth: &AuthService, form: &mut LoginForm, tasks: &Tasks) {
    let Some(credentials) = form.begin_submit() else {
        return;
    };

    let auth = auth.clone();
    tasks.report(async move { AppEvent::LoginFinished(auth.login(credentials).await) });
}

pub(crate) fn handle_recovery_submit(auth: &AuthService, form: &mut RecoveryForm, tasks: &Tasks) {
    let Some(email) = form.begin_submit() else {
        return;
    };

    let auth = auth.clone();
    tasks.report(async move { AppEvent::RecoveryFinished(auth.recovery_password(&email).await) });
}

/// Clear the session, reset every screen and go back to the login screen.
pub(crate) fn handle_logout(app: &mut BakeryApp) {
    app.admin.dashboard.logout();
    app.reset_screens();
    app.navigate(Route::Login);
}
