//! Input validation helpers shared by the API layer.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate an email address (RFC 5322 syntax via the `validator` crate).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email address".into()))
    }
}

/// Validate that a required text field is present and non-blank.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a password meets minimum strength requirements.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_email() {
        assert!(validate_email("jana@example.com").is_ok());
    }

    #[test]
    fn rejects_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn rejects_blank_required_field() {
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "Babička").is_ok());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long-enough-password").is_ok());
    }
}
