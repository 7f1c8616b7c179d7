//! User domain entity.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, UNKNOWN_BIRTH_DATE};

/// Registered person: a name and a calendar birth date.
///
/// Two users are equal when both the name and the birth date are equal.
/// The birth date is optional at the type level because records without one
/// can be constructed; the registry refuses to create such records and the
/// birthday check rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    name: String,
    birth_date: Option<NaiveDate>,
}

impl User {
    /// Create a user record without validating it
    pub fn new(name: impl Into<String>, birth_date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Check whether `date` falls on this user's birthday.
    ///
    /// Only month and day-of-month are compared; the year is ignored.
    /// Returns `None` when the user has no birth date.
    pub fn has_birthday_on(&self, date: NaiveDate) -> Option<bool> {
        self.birth_date.map(|born| is_anniversary(born, date))
    }
}

/// Check whether `date` has the same month and day-of-month as `born`.
pub fn is_anniversary(born: NaiveDate, date: NaiveDate) -> bool {
    born.month() == date.month() && born.day() == date.day()
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.birth_date {
            Some(date) => write!(f, "{} ({})", self.name, date.format(DATE_FORMAT)),
            None => write!(f, "{} ({})", self.name, UNKNOWN_BIRTH_DATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_equality_uses_name_and_birth_date() {
        let alex = User::new("Alex", Some(date(1989, 2, 4)));
        assert_eq!(alex, User::new("Alex", Some(date(1989, 2, 4))));
        assert_ne!(alex, User::new("Alex", Some(date(1990, 2, 4))));
        assert_ne!(alex, User::new("Ann", Some(date(1989, 2, 4))));
        assert_ne!(alex, User::new("Alex", None));
    }

    #[test]
    fn test_has_birthday_on_ignores_year() {
        let alex = User::new("Alex", Some(date(1989, 2, 4)));
        assert_eq!(alex.has_birthday_on(date(2024, 2, 4)), Some(true));
        assert_eq!(alex.has_birthday_on(date(1989, 4, 2)), Some(false));
        assert_eq!(alex.has_birthday_on(date(1989, 2, 5)), Some(false));
    }

    #[test]
    fn test_leap_day_only_matches_leap_day() {
        let leap = User::new("Leap", Some(date(2000, 2, 29)));
        assert_eq!(leap.has_birthday_on(date(2024, 2, 29)), Some(true));
        assert_eq!(leap.has_birthday_on(date(2023, 2, 28)), Some(false));
        assert_eq!(leap.has_birthday_on(date(2023, 3, 1)), Some(false));
    }

    #[test]
    fn test_is_anniversary() {
        assert!(is_anniversary(date(1989, 2, 4), date(1989, 2, 4)));
        assert!(is_anniversary(date(1989, 2, 4), date(2031, 2, 4)));
        assert!(!is_anniversary(date(1989, 2, 4), date(1989, 4, 2)));
        assert!(!is_anniversary(date(2000, 2, 29), date(2001, 3, 1)));
    }

    #[test]
    fn test_has_birthday_on_without_birth_date() {
        let user = User::new("Alex", None);
        assert_eq!(user.has_birthday_on(date(2024, 2, 4)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            User::new("Alex", Some(date(1989, 2, 4))).to_string(),
            "Alex (1989-02-04)"
        );
        assert_eq!(User::new("Ann", None).to_string(), "Ann (unknown)");
    }

    #[test]
    fn test_serde_uses_iso_dates() {
        let alex = User::new("Alex", Some(date(1989, 2, 4)));
        let json = serde_json::to_string(&alex).unwrap();
        assert_eq!(json, r#"{"name":"Alex","birth_date":"1989-02-04"}"#);

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alex);
    }
}
