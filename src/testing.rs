//! Testing utilities
//!
//! Helpers for testing code that builds validators: a callback recorder and
//! assertion macros. With the `proptest` feature enabled, this module also
//! provides strategies for generating inputs.
//!
//! # Examples
//!
//! ## Recording callback messages
//!
//! ```rust
//! use stillcheck::testing::RecordingHandler;
//! use stillcheck::{RuleChain, Validator};
//!
//! let recorder = RecordingHandler::new();
//! let mut validator = Validator::new();
//! validator.required(None);
//! validator.set_on_invalid_evaluation(recorder.handler());
//!
//! validator.is_valid("");
//! assert_eq!(recorder.messages(), ["Required"]);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use stillcheck::{assert_fails_with, assert_invalid, assert_valid, RuleChain, Validator};
//!
//! let mut validator = Validator::new();
//! validator.min_length(3, None);
//!
//! assert_valid!(validator, "abc");
//! assert_invalid!(validator, "ab");
//! assert_fails_with!(validator, "ab", "3 or more characters are required");
//! ```

use std::sync::{Arc, Mutex, PoisonError};

/// Records every message passed to a validator callback.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends each message it receives to this recorder.
    pub fn handler(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let messages = Arc::clone(&self.messages);
        move |message: &str| {
            messages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message.to_owned());
        }
    }

    /// The recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded messages.
    pub fn count(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget all recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Assert that a validator accepts an input.
///
/// Panics with the failing rule's message otherwise.
///
/// # Example
///
/// ```rust
/// use stillcheck::{assert_valid, RuleChain, Validator};
///
/// let mut validator = Validator::new();
/// validator.email(None);
/// assert_valid!(validator, "jealmesa@gmail.com");
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $input:expr) => {{
        let input = $input;
        if let Err(err) = $validator.valid_or_fail(input) {
            panic!(
                "Expected {:?} to be valid, got failure: {}",
                input,
                err.message()
            );
        }
    }};
}

/// Assert that a validator rejects an input.
///
/// # Example
///
/// ```rust
/// use stillcheck::{assert_invalid, RuleChain, Validator};
///
/// let mut validator = Validator::new();
/// validator.email(None);
/// assert_invalid!(validator, "example@mail");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $input:expr) => {{
        let input = $input;
        if $validator.valid_or_fail(input).is_ok() {
            panic!("Expected {:?} to be invalid, got success", input);
        }
    }};
}

/// Assert that a validator rejects an input with a specific message.
///
/// # Example
///
/// ```rust
/// use stillcheck::{assert_fails_with, RuleChain, Validator};
///
/// let mut validator = Validator::new();
/// validator.required(None);
/// assert_fails_with!(validator, None, "Required");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($validator:expr, $input:expr, $expected:expr) => {{
        let input = $input;
        match $validator.valid_or_fail(input) {
            Err(err) => assert_eq!(err.message(), $expected),
            Ok(()) => panic!(
                "Expected {:?} to fail with {:?}, got success",
                input, $expected
            ),
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A strategy producing inputs that satisfy
/// [`number_pattern`](crate::predicate::number_pattern) for `pattern`.
///
/// Each `x`/`X` placeholder becomes a random digit; every other character is
/// copied.
///
/// # Example
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use stillcheck::predicate::number_pattern;
/// use stillcheck::testing::number_pattern_input;
///
/// proptest! {
///     #[test]
///     fn phone_numbers_match(input in number_pattern_input("+xx (xxx) xxx-xx-xx")) {
///         prop_assert!(number_pattern("+xx (xxx) xxx-xx-xx", Some(input.as_str())));
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn number_pattern_input(pattern: &str) -> impl Strategy<Value = String> {
    let chars: Vec<BoxedStrategy<char>> = pattern
        .chars()
        .map(|p| match p {
            'x' | 'X' => proptest::char::range('0', '9').boxed(),
            c => Just(c).boxed(),
        })
        .collect();
    chars.prop_map(|chars| chars.into_iter().collect::<String>())
}
