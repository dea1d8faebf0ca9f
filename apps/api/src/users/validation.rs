use crate::errors::AppError;
use crate::models::user::UserPayload;

/// Column length of `name` and `email` in the users table. Over-length input
/// is rejected here instead of surfacing as a store-level truncation error.
pub const MAX_FIELD_LEN: usize = 100;

/// Checks a create/update request body before any store round-trip:
/// both fields present, non-empty, and within the column length.
pub fn validate_payload(payload: &UserPayload) -> Result<(String, String), AppError> {
    let name = required_field(payload.name.as_deref(), "name")?;
    let email = required_field(payload.email.as_deref(), "email")?;
    Ok((name, email))
}

/// Store-side check on already-extracted fields, so the data access layer
/// rejects bad input even when called without going through a handler.
pub fn validate_fields(name: &str, email: &str) -> Result<(), AppError> {
    required_field(Some(name), "name")?;
    required_field(Some(email), "email")?;
    Ok(())
}

fn required_field(value: Option<&str>, field: &str) -> Result<String, AppError> {
    let value = value.unwrap_or("").trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!(
            "Field '{field}' is required and must not be empty"
        )));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(AppError::Validation(format!(
            "Field '{field}' must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, email: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let (name, email) =
            validate_payload(&payload(Some("Alice Johnson"), Some("alice@example.com"))).unwrap();
        assert_eq!(name, "Alice Johnson");
        assert_eq!(email, "alice@example.com");
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = validate_payload(&payload(None, Some("alice@example.com"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_missing_email_rejected() {
        let err = validate_payload(&payload(Some("Alice"), None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = validate_payload(&payload(Some(""), Some("alice@example.com"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_whitespace_only_email_rejected() {
        let err = validate_payload(&payload(Some("Alice"), Some("   "))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let (name, _) =
            validate_payload(&payload(Some("  Alice  "), Some("alice@example.com"))).unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_over_length_name_rejected() {
        let long = "a".repeat(MAX_FIELD_LEN + 1);
        let err = validate_payload(&payload(Some(&long), Some("a@b.com"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_max_length_name_allowed() {
        let exact = "a".repeat(MAX_FIELD_LEN);
        assert!(validate_payload(&payload(Some(&exact), Some("a@b.com"))).is_ok());
    }

    #[test]
    fn test_validate_fields_rejects_empty() {
        assert!(validate_fields("", "a@b.com").is_err());
        assert!(validate_fields("Alice", "").is_err());
        assert!(validate_fields("Alice", "a@b.com").is_ok());
    }
}
