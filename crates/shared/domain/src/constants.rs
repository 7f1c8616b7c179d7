//! Domain-level constants.
//!
//! These constants define business rules and input formats.

// =============================================================================
// Dates
// =============================================================================

/// Calendar date format accepted and printed everywhere (ISO 8601, no time)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder printed for a user without a birth date
pub const UNKNOWN_BIRTH_DATE: &str = "unknown";

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

/// Check if a name satisfies the length requirement
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH
}
