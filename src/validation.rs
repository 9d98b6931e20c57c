// Validation utilities module
// Custom validation functions for domain-specific rules, used from the
// request DTO derives

use validator::ValidationError;

/// Rejects strings that are empty or whitespace-only.
/// "   " would survive a plain min-length check.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blank_strings_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_non_blank_strings_accepted() {
        assert!(validate_not_blank("Dr. X").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_always_rejected(s in "[ \t\n]{0,20}") {
            prop_assert!(validate_not_blank(&s).is_err());
        }
    }
}
