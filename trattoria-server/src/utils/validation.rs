//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen as reasonable UX caps; the document store itself
//! enforces no length limits.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names and similar short identity fields
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, source labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free-form text: special requests, contact messages
pub const MAX_NOTE_LEN: usize = 2000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that an optional email, if present, is syntactically valid.
pub fn validate_optional_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    if let Some(email) = value {
        if email.len() > MAX_EMAIL_LEN {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {MAX_EMAIL_LEN})",
                email.len()
            )));
        }
        if !email.validate_email() {
            return Err(AppError::validation(format!(
                "{field} is not a valid email address"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("Ana", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_accepts_none() {
        assert!(validate_optional_text(&None, "requests", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("window seat".into()), "requests", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn optional_email_checks_syntax() {
        assert!(validate_optional_email(&None, "email").is_ok());
        assert!(validate_optional_email(&Some("ana@example.com".into()), "email").is_ok());
        assert!(validate_optional_email(&Some("not-an-email".into()), "email").is_err());
    }
}
