//! Domain-level errors.
//!
//! Field validation failures raised before the registry is mutated.
//! The `Display` output of every variant is a fixed message that callers
//! match on, so the texts must not change.

use thiserror::Error;

/// Precondition violated by a registry operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Missing or empty user name on creation
    #[error("Name could not be empty or null")]
    EmptyName,

    /// Missing birth date on creation
    #[error("Date of birth could not be null")]
    MissingBirthDate,

    /// Birthday check on a missing user or a user without a birth date
    #[error("User or date of birth is null")]
    MissingUserOrBirthDate,

    /// Birthday check without a date to compare against
    #[error("Compare date must not be null")]
    MissingCompareDate,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(FieldError::EmptyName.to_string(), "Name could not be empty or null");
        assert_eq!(
            FieldError::MissingBirthDate.to_string(),
            "Date of birth could not be null"
        );
        assert_eq!(
            FieldError::MissingUserOrBirthDate.to_string(),
            "User or date of birth is null"
        );
        assert_eq!(
            FieldError::MissingCompareDate.to_string(),
            "Compare date must not be null"
        );
    }
}
