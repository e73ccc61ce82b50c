//! The rule-chain engine
//!
//! A [`Validator`] holds an ordered chain of [`Rule`]s and evaluates inputs
//! against it. Evaluation stops at the first rule that rejects the input.
//!
//! Two reporting channels are available and never mixed within one call:
//!
//! - **Callback channel**: [`is_valid`](Validator::is_valid) and
//!   [`is_match`](Validator::is_match) return a `bool` and pass the failing
//!   message to the optional on-invalid-evaluation callback.
//! - **Error channel**: [`valid_or_fail`](Validator::valid_or_fail) and
//!   [`compare_or_fail`](Validator::compare_or_fail) return
//!   `Result<(), InvalidEvaluationError>`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use stillcheck::Validator;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut validator = Validator::new();
//! validator
//!     .rule("too short", |s: Option<&str>| s.is_some_and(|s| s.len() >= 3))
//!     .set_on_invalid_evaluation(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));
//!
//! assert!(!validator.is_valid("ab"));
//! assert!(validator.is_valid("abcd"));
//! assert_eq!(*seen.lock().unwrap(), ["too short"]);
//! ```
//!
//! # Sharing
//!
//! `Validator` is `Send + Sync`. Evaluation takes `&self`; changing the
//! callback or the chain takes `&mut self`, so configuration cannot race
//! with evaluation.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::chain::RuleChain;
use crate::error::InvalidEvaluationError;
use crate::messages::Messages;
use crate::rule::{Predicate, Rule};

/// Callback invoked with the message of a failed evaluation.
pub type InvalidEvaluationHandler = Arc<dyn Fn(&str) + Send + Sync>;

static ENGLISH: LazyLock<Arc<Messages>> = LazyLock::new(|| Arc::new(Messages::english()));

/// An ordered chain of rules with short-circuit evaluation.
///
/// Rules are evaluated in insertion order. The chain is only ever appended
/// to; rules are never removed, reordered or deduplicated.
///
/// Cloning (or [`copy`](Validator::copy)) shares the rule chain. Appending to
/// either instance afterwards copies the chain first, so rules appended after
/// the copy are never visible to the other instance. The callback, mismatch
/// message and message table are independent per instance.
#[derive(Clone)]
pub struct Validator {
    rules: Arc<Vec<Rule>>,
    on_invalid_evaluation: Option<InvalidEvaluationHandler>,
    not_match_message: Option<String>,
    messages: Arc<Messages>,
}

impl Validator {
    /// Create an empty validator using the English message table.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, Arc::clone(&ENGLISH))
    }

    /// Create an empty validator whose built-in rules and mismatch message
    /// come from `messages`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::{Messages, RuleChain, Validator};
    ///
    /// let mut validator = Validator::with_messages(Messages::spanish());
    /// validator.required(None);
    ///
    /// let err = validator.valid_or_fail(None).unwrap_err();
    /// assert_eq!(err.message(), "Requerido");
    /// assert_eq!(validator.not_match_message(), "No coinciden");
    /// ```
    pub fn with_messages(messages: Messages) -> Self {
        Self::from_parts(Vec::new(), None, Arc::new(messages))
    }

    /// Create a validator seeded with an existing chain and callback.
    pub fn with_rules(
        rules: Vec<Rule>,
        on_invalid_evaluation: Option<InvalidEvaluationHandler>,
    ) -> Self {
        Self::from_parts(rules, on_invalid_evaluation, Arc::clone(&ENGLISH))
    }

    pub(crate) fn from_parts(
        rules: Vec<Rule>,
        on_invalid_evaluation: Option<InvalidEvaluationHandler>,
        messages: Arc<Messages>,
    ) -> Self {
        Validator {
            rules: Arc::new(rules),
            on_invalid_evaluation,
            not_match_message: None,
            messages,
        }
    }

    /// Create a [`ValidatorBuilder`](crate::ValidatorBuilder).
    pub fn builder() -> crate::ValidatorBuilder {
        crate::ValidatorBuilder::new()
    }

    /// Append a rule built from `message` and `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::Validator;
    ///
    /// let mut validator = Validator::new();
    /// validator
    ///     .rule("no spaces", |s: Option<&str>| s.is_some_and(|s| !s.contains(' ')))
    ///     .rule("lowercase", |s: Option<&str>| s.is_some_and(|s| s == s.to_lowercase()));
    ///
    /// assert_eq!(validator.len(), 2);
    /// assert!(validator.is_valid("slug"));
    /// assert!(!validator.is_valid("Slug"));
    /// ```
    pub fn rule<P>(&mut self, message: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate + 'static,
    {
        self.push(Rule::new(message, predicate))
    }

    /// Append an existing rule.
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        Arc::make_mut(&mut self.rules).push(rule);
        self
    }

    /// Set the callback that receives failure messages.
    pub fn set_on_invalid_evaluation<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_invalid_evaluation = Some(Arc::new(handler));
        self
    }

    /// Remove the failure callback; failures are then reported only by the
    /// boolean results.
    pub fn clear_on_invalid_evaluation(&mut self) -> &mut Self {
        self.on_invalid_evaluation = None;
        self
    }

    /// The current failure callback.
    pub fn on_invalid_evaluation(&self) -> Option<&InvalidEvaluationHandler> {
        self.on_invalid_evaluation.as_ref()
    }

    /// Set the message reported when a comparison fails.
    ///
    /// The message overrides the table's `compare` entry, including after
    /// [`set_messages`](Validator::set_messages).
    pub fn set_not_match_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.not_match_message = Some(message.into());
        self
    }

    /// The message reported when a comparison fails.
    pub fn not_match_message(&self) -> &str {
        self.not_match_message
            .as_deref()
            .unwrap_or(&self.messages.compare)
    }

    /// Replace the message table.
    ///
    /// Rules already in the chain keep their messages; rules added afterwards
    /// take their defaults from `messages`. Unless a custom mismatch message
    /// was set, the mismatch message follows the new table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::{Messages, RuleChain, Validator};
    ///
    /// let mut validator = Validator::new();
    /// validator.required(None);
    /// validator.set_messages(Messages::spanish()).min_length(3, None);
    ///
    /// assert_eq!(validator.valid_or_fail("").unwrap_err().message(), "Required");
    /// assert_eq!(
    ///     validator.valid_or_fail("ab").unwrap_err().message(),
    ///     "Se requiere 3 o más caracteres"
    /// );
    /// assert_eq!(validator.not_match_message(), "No coinciden");
    /// ```
    pub fn set_messages(&mut self, messages: Messages) -> &mut Self {
        self.messages = Arc::new(messages);
        self
    }

    /// The rules of the chain, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A new validator sharing this chain, with its own callback, mismatch
    /// message and message table. Same as `clone()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::{RuleChain, Validator};
    ///
    /// let mut base = Validator::new();
    /// base.required(None);
    ///
    /// let mut strict = base.copy();
    /// strict.min_length(8, None).set_not_match_message("Passwords differ");
    ///
    /// assert_eq!(base.len(), 1);
    /// assert_eq!(strict.len(), 2);
    /// assert_eq!(base.not_match_message(), "Not match");
    /// ```
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn first_failure(&self, input: Option<&str>) -> Option<&Rule> {
        let found = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| !rule.validate(input));

        match found {
            Some((_index, rule)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = _index,
                    failure = rule.message(),
                    "rule rejected input"
                );
                Some(rule)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(rules = self.rules.len(), "input passed rule chain");
                None
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Some(handler) = &self.on_invalid_evaluation {
            handler(message);
        }
    }

    fn mismatch(&self, input: Option<&str>, compare: Option<&str>) -> bool {
        let mismatch = input != compare;
        #[cfg(feature = "tracing")]
        {
            if mismatch {
                tracing::debug!(failure = self.not_match_message(), "compared values differ");
            }
        }
        mismatch
    }

    /// Evaluate `input` against the chain.
    ///
    /// Returns `false` at the first rule that rejects the input, after passing
    /// that rule's message to the callback. Later rules are not evaluated.
    /// Returns `true` without invoking the callback when every rule passes or
    /// the chain is empty.
    pub fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        match self.first_failure(input.into()) {
            Some(rule) => {
                self.notify(rule.message());
                false
            }
            None => true,
        }
    }

    /// Compare `input` with `compare`, then evaluate `input` against the chain.
    ///
    /// When the two differ (`None` and `Some("")` are different values), the
    /// callback receives the mismatch message. The chain is evaluated either
    /// way, and its outcome alone is returned; a mismatched input that also
    /// fails a rule therefore triggers the callback twice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use stillcheck::{RuleChain, Validator};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let mut validator = Validator::new();
    /// validator.required(None);
    /// validator.set_on_invalid_evaluation(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));
    ///
    /// assert!(validator.is_match("secret", "secreT"));
    /// assert!(!validator.is_match("", "secret"));
    /// assert_eq!(*seen.lock().unwrap(), ["Not match", "Not match", "Required"]);
    /// ```
    pub fn is_match<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        compare: impl Into<Option<&'a str>>,
    ) -> bool {
        let input = input.into();
        if self.mismatch(input, compare.into()) {
            self.notify(self.not_match_message());
        }
        self.is_valid(input)
    }

    /// Evaluate `input` against the chain, failing at the first rejecting rule.
    ///
    /// The error carries the rule's message and the input. The callback is
    /// not invoked.
    pub fn valid_or_fail<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
    ) -> Result<(), InvalidEvaluationError> {
        let input = input.into();
        match self.first_failure(input) {
            Some(rule) => Err(InvalidEvaluationError::new(rule.message(), input)),
            None => Ok(()),
        }
    }

    /// Like [`valid_or_fail`](Validator::valid_or_fail), tagging the error
    /// with the key of the field being validated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::{RuleChain, Validator};
    ///
    /// let mut validator = Validator::new();
    /// validator.email(None);
    ///
    /// let err = validator.valid_or_fail_for("email", "nope").unwrap_err();
    /// assert_eq!(err.key(), Some("email"));
    /// assert_eq!(err.message(), "Email invalid");
    /// ```
    pub fn valid_or_fail_for<'a>(
        &self,
        key: impl Into<String>,
        input: impl Into<Option<&'a str>>,
    ) -> Result<(), InvalidEvaluationError> {
        self.valid_or_fail(input).map_err(|err| err.with_key(key))
    }

    /// Fail with the mismatch message if `input` differs from `compare`;
    /// otherwise evaluate `input` like [`valid_or_fail`](Validator::valid_or_fail).
    ///
    /// Unlike [`is_match`](Validator::is_match), a mismatch stops here and
    /// the chain is not evaluated.
    pub fn compare_or_fail<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        compare: impl Into<Option<&'a str>>,
    ) -> Result<(), InvalidEvaluationError> {
        let input = input.into();
        if self.mismatch(input, compare.into()) {
            return Err(InvalidEvaluationError::new(
                self.not_match_message(),
                input,
            ));
        }
        self.valid_or_fail(input)
    }

    /// Like [`compare_or_fail`](Validator::compare_or_fail), tagging the
    /// error with the key of the field being validated.
    pub fn compare_or_fail_for<'a>(
        &self,
        key: impl Into<String>,
        input: impl Into<Option<&'a str>>,
        compare: impl Into<Option<&'a str>>,
    ) -> Result<(), InvalidEvaluationError> {
        self.compare_or_fail(input, compare)
            .map_err(|err| err.with_key(key))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleChain for Validator {
    fn push_rule(&mut self, rule: Rule) {
        self.push(rule);
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field(
                "on_invalid_evaluation",
                &self.on_invalid_evaluation.as_ref().map(|_| "<callback>"),
            )
            .field("not_match_message", &self.not_match_message())
            .finish_non_exhaustive()
    }
}
