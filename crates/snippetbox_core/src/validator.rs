//! Field validation accumulator and reusable predicate rules.
//!
//! A [`Validator`] is created fresh for each submitted form. Rules are plain
//! predicates; callers feed their results into [`Validator::check_field`].

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Per-field and form-level failures collected by a [`Validator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub field_errors: BTreeMap<String, String>,
    pub non_field_errors: Vec<String>,
}

impl ValidationErrors {
    /// Whether no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// First message recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.field_errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        for message in &self.non_field_errors {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

/// Accumulates validation failures keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    /// Record `message` under `field` when `ok` is false.
    ///
    /// Only the first failure per field is kept; later failures for the same
    /// field are ignored so the earliest (most basic) message wins.
    pub fn check_field(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_field_error(field, message);
        }
    }

    /// Record a failure under `field` unless one is already present.
    pub fn add_field_error(&mut self, field: &str, message: &str) {
        self.errors
            .field_errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Record a failure that is not tied to a single field.
    pub fn add_non_field_error(&mut self, message: &str) {
        self.errors.non_field_errors.push(message.to_string());
    }

    /// Whether no failures have been recorded.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Borrow the recorded failures.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consume the validator, keeping only its failures.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Convert the accumulated state into a result.
    ///
    /// # Returns
    /// `Ok(())` when valid.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] carrying every recorded failure.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.valid() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// `true` when `value` contains something other than whitespace.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `true` when `value` has at most `limit` characters (not bytes).
pub fn max_chars(value: &str, limit: usize) -> bool {
    value.chars().count() <= limit
}

/// `true` when `value` has at least `limit` characters (not bytes).
pub fn min_chars(value: &str, limit: usize) -> bool {
    value.chars().count() >= limit
}

/// `true` when `value` equals one of `permitted`.
pub fn permitted_value<T: PartialEq>(value: T, permitted: &[T]) -> bool {
    permitted.contains(&value)
}

/// `true` when `value` matches `pattern`.
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Pattern for plausible email addresses (W3C HTML5 `type=email` grammar).
pub fn email_rx() -> &'static Regex {
    static EMAIL_RX: OnceLock<Regex> = OnceLock::new();
    EMAIL_RX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_empty_and_whitespace() {
        assert!(!not_blank(""));
        assert!(!not_blank("   \t\n"));
        assert!(not_blank("x"));
        assert!(not_blank("  x  "));
    }

    #[test]
    fn max_chars_boundary_is_inclusive() {
        let exact = "a".repeat(100);
        let over = "a".repeat(101);
        assert!(max_chars(&exact, 100));
        assert!(!max_chars(&over, 100));
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let multibyte = "é".repeat(100);
        assert_eq!(multibyte.len(), 200);
        assert!(max_chars(&multibyte, 100));
        assert!(min_chars(&multibyte, 100));
        assert!(!min_chars("short", 8));
    }

    #[test]
    fn permitted_value_matches_membership() {
        assert!(!permitted_value(5, &[1, 7, 365]));
        assert!(permitted_value(7, &[1, 7, 365]));
        assert!(permitted_value("b", &["a", "b"]));
    }

    #[test]
    fn email_rx_accepts_addresses_and_rejects_garbage() {
        for ok in ["alice@example.com", "a.b+tag@sub.example.org", "x@localhost"] {
            assert!(matches(ok, email_rx()), "should match: {}", ok);
        }
        for bad in ["", "alice", "alice@", "@example.com", "a b@example.com"] {
            assert!(!matches(bad, email_rx()), "should not match: {}", bad);
        }
    }

    #[test]
    fn check_field_keeps_first_message_per_field() {
        let mut validator = Validator::default();
        validator.check_field(true, "title", "unused");
        assert!(validator.valid());

        validator.check_field(false, "title", "This field cannot be blank");
        validator.check_field(false, "title", "This field cannot be more than 100 characters long");
        validator.check_field(false, "content", "This field cannot be blank");

        assert!(!validator.valid());
        let errors = validator.errors();
        assert_eq!(errors.field("title"), Some("This field cannot be blank"));
        assert_eq!(errors.field("content"), Some("This field cannot be blank"));
        assert_eq!(errors.field_errors.len(), 2);
    }

    #[test]
    fn non_field_errors_make_validator_invalid() {
        let mut validator = Validator::default();
        validator.add_non_field_error("Email or password is incorrect");
        assert!(!validator.valid());
        assert_eq!(
            validator.errors().to_string(),
            "Email or password is incorrect"
        );
    }

    #[test]
    fn into_result_wraps_errors() {
        assert!(Validator::default().into_result().is_ok());

        let mut validator = Validator::default();
        validator.check_field(false, "expires", "This field must equal 1, 7 or 365");
        match validator.into_result() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.field("expires"), Some("This field must equal 1, 7 or 365"));
                assert_eq!(errors.to_string(), "expires: This field must equal 1, 7 or 365");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
