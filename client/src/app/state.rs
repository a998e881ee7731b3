//! # Application State Types
//!
//! Screen-local state owned by the main thread: the login and recovery forms, the
//! checkout notes and the online status shown in the user detail modal. Shared
//! business state lives in the facades.

use shared::{LoginRequest, RecoveryPasswordResponse, UserStatus};

use crate::core::error::{AppError, Result};
use crate::utils::validation::{validate_email, validate_password};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your credentials.";
pub const INVALID_ROLE_MESSAGE: &str = "Invalid user role";
pub const RECOVERY_SENT_MESSAGE: &str = "A recovery link has been sent to your email.";
pub const RECOVERY_FAILED_MESSAGE: &str = "Error sending the recovery email.";

/// Login screen form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest> {
        validate_email(&self.email).into_result()?;
        validate_password(&self.password).into_result()?;
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Validate and mark the form busy. Returns `None` while a request is in flight
    /// or when validation fails (the message is stored in `error`).
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_loading {
            return None;
        }
        match self.validate() {
            Ok(request) => {
                self.is_loading = true;
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    pub fn fail(&mut self, err: &AppError) {
        self.is_loading = false;
        self.error = Some(
            err.server_message()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(LOGIN_FAILED_MESSAGE)
                .to_string(),
        );
    }

    pub fn reject_role(&mut self) {
        self.is_loading = false;
        self.error = Some(INVALID_ROLE_MESSAGE.to_string());
    }

    pub fn succeed(&mut self) {
        self.is_loading = false;
        self.error = None;
        self.password.clear();
        self.show_password = false;
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }
}

/// Password recovery modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveryForm {
    pub open: bool,
    pub email: String,
    pub is_sending: bool,
    pub error: Option<String>,
}

impl RecoveryForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_sending {
            return None;
        }
        match validate_email(&self.email).into_result() {
            Ok(()) => {
                self.is_sending = true;
                self.error = None;
                Some(self.email.trim().to_string())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    /// Apply the backend answer. Returns the toast text and whether it reports success.
    /// The modal closes only on a successful answer.
    pub fn finish(&mut self, result: &Result<RecoveryPasswordResponse>) -> (bool, String) {
        self.is_sending = false;
        match result {
            Ok(response) if response.success => {
                self.close();
                (true, RECOVERY_SENT_MESSAGE.to_string())
            }
            Ok(response) => {
                let message = if response.message.trim().is_empty() {
                    RECOVERY_FAILED_MESSAGE.to_string()
                } else {
                    response.message.clone()
                };
                (false, message)
            }
            Err(err) => {
                let message = err
                    .server_message()
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or(RECOVERY_FAILED_MESSAGE)
                    .to_string();
                (false, message)
            }
        }
    }
}

/// Online status of the user open in the detail modal
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OnlineStatus {
    #[default]
    Unknown,
    Loading,
    Loaded(UserStatus),
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStatusView {
    pub user_id: Option<i64>,
    pub status: OnlineStatus,
}

impl UserStatusView {
    /// Start tracking `user_id`. Returns `false` when it is already tracked.
    pub fn track(&mut self, user_id: i64) -> bool {
        if self.user_id == Some(user_id) {
            return false;
        }
        self.user_id = Some(user_id);
        self.status = OnlineStatus::Loading;
        true
    }

    /// Results for a user that is no longer shown are dropped.
    pub fn apply(&mut self, user_id: i64, result: Result<UserStatus>) {
        if self.user_id != Some(user_id) {
            return;
        }
        self.status = match result {
            Ok(status) => OnlineStatus::Loaded(status),
            Err(err) => {
                tracing::debug!(user_id, error = %err, "User status unavailable");
                OnlineStatus::Failed
            }
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Customer checkout panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub special_instructions: String,
    pub catalog_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_login() -> LoginForm {
        LoginForm {
            email: " ana@bakery.test ".to_string(),
            password: "secret1".to_string(),
            ..LoginForm::default()
        }
    }

    #[test]
    fn test_login_validation_messages() {
        let mut form = LoginForm::default();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Email is required"));

        form.email = "ana@bakery.test".to_string();
        form.password = "123".to_string();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Password must be at least 6 characters"));
        assert!(!form.is_loading);
    }

    #[test]
    fn test_login_submit_trims_email_and_blocks_double_submit() {
        let mut form = filled_login();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.email, "ana@bakery.test");
        assert!(form.is_loading);
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_login_failure_prefers_server_message() {
        let mut form = filled_login();
        form.begin_submit();
        form.fail(&AppError::Unauthorized("Invalid credentials".to_string()));
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        assert!(!form.is_loading);

        form.fail(&AppError::Network("connection refused".to_string()));
        assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED_MESSAGE));

        form.reject_role();
        assert_eq!(form.error.as_deref(), Some(INVALID_ROLE_MESSAGE));
    }

    #[test]
    fn test_login_success_clears_password() {
        let mut form = filled_login();
        form.toggle_password();
        form.begin_submit();
        form.succeed();
        assert!(form.password.is_empty());
        assert!(!form.show_password);
        assert_eq!(form.email, " ana@bakery.test ");
    }

    #[test]
    fn test_recovery_flow() {
        let mut form = RecoveryForm::default();
        form.open();
        form.email = "not-an-email".to_string();
        assert!(form.begin_submit().is_none());
        assert!(form.error.is_some());

        form.email = "ana@bakery.test".to_string();
        assert_eq!(form.begin_submit().as_deref(), Some("ana@bakery.test"));

        let failed = form.finish(&Err(AppError::Api {
            status: 404,
            message: "Unknown email".to_string(),
        }));
        assert_eq!(failed, (false, "Unknown email".to_string()));
        assert!(form.open);

        form.begin_submit();
        let sent = form.finish(&Ok(RecoveryPasswordResponse {
            success: true,
            message: String::new(),
        }));
        assert_eq!(sent, (true, RECOVERY_SENT_MESSAGE.to_string()));
        assert_eq!(form, RecoveryForm::default());
    }

    #[test]
    fn test_user_status_ignores_stale_results() {
        let mut view = UserStatusView::default();
        assert!(view.track(7));
        assert!(!view.track(7));

        view.apply(
            3,
            Ok(UserStatus {
                id: 3,
                is_online: true,
                last_seen: None,
            }),
        );
        assert_eq!(view.status, OnlineStatus::Loading);

        view.apply(7, Err(AppError::Network("down".to_string())));
        assert_eq!(view.status, OnlineStatus::Failed);
    }
}
