//! # Application Events
//!
//! Results of background work that the main thread has to act on: anything that touches
//! the router or the login screen's form state comes back through here.

use shared::{RecoveryPasswordResponse, User, UserStatus};

use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup `/me` check finished
    SessionChecked(bool),
    /// Login request finished
    LoginFinished(Result<User, AppError>),
    /// Password recovery request finished
    RecoveryFinished(Result<RecoveryPasswordResponse, AppError>),
    /// Online status for the user shown in the detail modal
    UserStatusLoaded {
        user_id: i64,
        result: Result<UserStatus, AppError>,
    },
    /// Customer checkout finished; `true` when the order was placed
    CheckoutFinished(bool),
}
