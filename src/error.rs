//! Fail-fast validation errors
//!
//! This module provides [`InvalidEvaluationError`], the error returned by the
//! fail-fast entry points of a [`Validator`](crate::Validator)
//! (`valid_or_fail`, `compare_or_fail` and their keyed variants).
//!
//! # Examples
//!
//! ```
//! use stillcheck::{InvalidEvaluationError, RuleChain, Validator};
//!
//! let mut validator = Validator::new();
//! validator.required("Required");
//!
//! let err: InvalidEvaluationError = validator.valid_or_fail("").unwrap_err();
//! assert_eq!(err.message(), "Required");
//! assert_eq!(err.value(), Some(""));
//! assert_eq!(err.to_string(), "Required");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The first failing rule of a fail-fast evaluation
///
/// Carries the failing rule's message, the offending input and, when the
/// caller used one of the `*_for` entry points, the key identifying the
/// logical field that was being validated.
///
/// `Display` prints only the message, so the error can be surfaced to end
/// users directly.
///
/// # Examples
///
/// ```
/// use stillcheck::InvalidEvaluationError;
///
/// let err = InvalidEvaluationError::new("Required", None).with_key("email");
///
/// assert_eq!(err.message(), "Required");
/// assert_eq!(err.value(), None);
/// assert_eq!(err.key(), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEvaluationError {
    message: String,
    value: Option<String>,
    key: Option<String>,
}

impl InvalidEvaluationError {
    /// Create a new error from a failure message and the offending input.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillcheck::InvalidEvaluationError;
    ///
    /// let err = InvalidEvaluationError::new("Not match", Some("abc"));
    /// assert_eq!(err.value(), Some("abc"));
    /// assert_eq!(err.key(), None);
    /// ```
    pub fn new(message: impl Into<String>, value: Option<&str>) -> Self {
        InvalidEvaluationError {
            message: message.into(),
            value: value.map(str::to_owned),
            key: None,
        }
    }

    /// Attach the key of the field being validated.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The failure message of the rule that rejected the input.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rejected input, `None` when the input was absent.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The field key, if the evaluation was keyed.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for InvalidEvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for InvalidEvaluationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_value() {
        let err = InvalidEvaluationError::new("Required", None);
        assert_eq!(err.message(), "Required");
        assert_eq!(err.value(), None);
        assert_eq!(err.key(), None);
    }

    #[test]
    fn test_new_with_empty_value() {
        let err = InvalidEvaluationError::new("Required", Some(""));
        assert_eq!(err.value(), Some(""));
    }

    #[test]
    fn test_with_key() {
        let err = InvalidEvaluationError::new("Email invalid", Some("nope")).with_key("email");
        assert_eq!(err.key(), Some("email"));
        assert_eq!(err.value(), Some("nope"));
    }

    #[test]
    fn test_display_is_message() {
        let err = InvalidEvaluationError::new("5 or more characters are required", Some("abc"))
            .with_key("password");
        assert_eq!(err.to_string(), "5 or more characters are required");
    }

    #[test]
    fn test_into_message() {
        let err = InvalidEvaluationError::new("Not match", Some("a"));
        assert_eq!(err.into_message(), "Not match");
    }

    #[test]
    fn test_error_trait() {
        let err = InvalidEvaluationError::new("Required", None);
        let boxed: Box<dyn StdError> = Box::new(err.clone());

        assert!(boxed.source().is_none());
        assert!(boxed.downcast_ref::<InvalidEvaluationError>().is_some());
        assert_eq!(boxed.to_string(), err.message());
    }

    #[test]
    fn test_eq() {
        let a = InvalidEvaluationError::new("m", Some("v")).with_key("k");
        let b = InvalidEvaluationError::new("m", Some("v")).with_key("k");
        let c = InvalidEvaluationError::new("m", Some("v"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
