//! Validation utilities for form input

use crate::core::error::{AppError, Result};

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) => Err(AppError::Validation(message)),
            None => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Invalid email format");
    }

    let domain = parts[1];
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate login password
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }

    ValidationResult::ok()
}

pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::err(format!("{} is required", field))
    } else {
        ValidationResult::ok()
    }
}

/// Parse a non-negative decimal amount typed by the user ("12.50", "12,50").
pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err(AppError::Validation(format!("{} cannot be negative", field))),
        Err(_) => Err(AppError::Validation(format!("{} must be a number", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("  user@domain.co.uk ").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a b@example.com").is_valid);
        assert!(!validate_email("a@b@example.com").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret").is_valid);
        assert_eq!(
            validate_password("short").error.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(validate_password("").error.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_required_and_amounts() {
        assert!(!validate_required("Name", "   ").is_valid);
        assert!(validate_required("Name", "Flan").into_result().is_ok());

        assert_eq!(parse_amount("Price", "12,50").unwrap(), 12.5);
        assert!(parse_amount("Price", "-1").is_err());
        assert!(parse_amount("Price", "abc").is_err());
        assert_eq!(
            parse_amount("Price", "").unwrap_err(),
            AppError::Validation("Price is required".to_string())
        );
    }
}
