//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} is invalid: {reason}")]
    Invalid { field_name: &'static str, reason: String },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate an optional string is non-empty if present.
pub fn require_non_empty_if_present(
    value: &Option<String>,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if let Some(v) = value {
        require_non_empty(v, field_name)?;
    }
    Ok(())
}

/// Unwraps a field that a create request must carry.
pub fn require_present<T>(value: Option<T>, field_name: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Empty { field_name })
}

/// Parses a keyword field (kind, type, ...) into its enum.
pub fn parse_keyword<T>(value: &str, field_name: &'static str) -> Result<T, ValidationError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ValidationError::Invalid {
        field_name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paradox_wheel_domain::MeritKind;

    #[test]
    fn blank_strings_are_empty() {
        assert!(matches!(
            require_non_empty("   ", "name"),
            Err(ValidationError::Empty { field_name: "name" })
        ));
        assert!(require_non_empty_if_present(&None, "name").is_ok());
        assert!(require_non_empty_if_present(&Some(String::new()), "name").is_err());
    }

    #[test]
    fn keywords_report_the_field() {
        let err = parse_keyword::<MeritKind>("virtue", "kind").unwrap_err();
        assert!(err.to_string().starts_with("kind is invalid"));
        assert_eq!(parse_keyword::<MeritKind>("Flaw", "kind").unwrap(), MeritKind::Flaw);
    }
}
