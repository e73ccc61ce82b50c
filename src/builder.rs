//! Builder for validators
//!
//! [`ValidatorBuilder`] registers rules the same way a
//! [`Validator`] does (it implements [`RuleChain`]) and freezes the result
//! with [`build`](ValidatorBuilder::build).
//!
//! # Example
//!
//! ```rust
//! use stillcheck::{RuleChain, ValidatorBuilder};
//!
//! let phone = ValidatorBuilder::new()
//!     .required(None)
//!     .number_pattern("+xx (xxx) xxx-xx-xx", None)
//!     .build();
//!
//! assert!(phone.is_valid("+58 (412) 756-41-79"));
//! assert!(!phone.is_valid("+58 412 7564179"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::chain::RuleChain;
use crate::messages::Messages;
use crate::rule::{Predicate, Rule};
use crate::validator::{InvalidEvaluationHandler, Validator};

/// Fluent construction of a [`Validator`].
///
/// Every method returns `&mut Self`, so a whole configuration can be written
/// as one chain ending in [`build`](ValidatorBuilder::build). A builder can
/// be built several times; each validator gets its own copy of the chain.
#[derive(Clone)]
pub struct ValidatorBuilder {
    rules: Vec<Rule>,
    on_invalid_evaluation: Option<InvalidEvaluationHandler>,
    not_match_message: Option<String>,
    messages: Arc<Messages>,
}

impl ValidatorBuilder {
    /// Create a builder using the English message table.
    pub fn new() -> Self {
        Self::with_messages(Messages::english())
    }

    /// Create a builder whose built-in rules and mismatch message come from
    /// `messages`.
    pub fn with_messages(messages: Messages) -> Self {
        ValidatorBuilder {
            rules: Vec::new(),
            on_invalid_evaluation: None,
            not_match_message: None,
            messages: Arc::new(messages),
        }
    }

    /// Create a builder seeded with an existing chain and callback, using
    /// the English message table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillcheck::{Rule, RuleChain, ValidatorBuilder};
    ///
    /// let base = vec![Rule::new("Required", stillcheck::predicate::required)];
    /// let validator = ValidatorBuilder::with_rules(base, None)
    ///     .max_length(3, None)
    ///     .build();
    ///
    /// assert_eq!(validator.len(), 2);
    /// assert!(!validator.is_valid("abcd"));
    /// ```
    pub fn with_rules(
        rules: Vec<Rule>,
        on_invalid_evaluation: Option<InvalidEvaluationHandler>,
    ) -> Self {
        ValidatorBuilder {
            rules,
            on_invalid_evaluation,
            ..Self::new()
        }
    }

    /// Append a rule built from `message` and `predicate`.
    pub fn rule<P>(&mut self, message: impl Into<String>, predicate: P) -> &mut Self
    where
        P: Predicate + 'static,
    {
        self.rules.push(Rule::new(message, predicate));
        self
    }

    /// Set the callback that receives failure messages.
    pub fn on_invalid_evaluation<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_invalid_evaluation = Some(Arc::new(handler));
        self
    }

    /// Override the mismatch message of the table.
    pub fn not_match_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.not_match_message = Some(message.into());
        self
    }

    /// Freeze the configuration into a [`Validator`].
    pub fn build(&self) -> Validator {
        let mut validator = Validator::from_parts(
            self.rules.clone(),
            self.on_invalid_evaluation.clone(),
            Arc::clone(&self.messages),
        );
        if let Some(message) = &self.not_match_message {
            validator.set_not_match_message(message.as_str());
        }
        validator
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleChain for ValidatorBuilder {
    fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("rules", &self.rules)
            .field(
                "on_invalid_evaluation",
                &self.on_invalid_evaluation.as_ref().map(|_| "<callback>"),
            )
            .field("not_match_message", &self.not_match_message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHandler;

    #[test]
    fn test_build_carries_rules_and_callback() {
        let recorder = RecordingHandler::new();
        let validator = ValidatorBuilder::new()
            .rule("error message", |s: Option<&str>| s.is_some_and(|s| !s.is_empty()))
            .on_invalid_evaluation(recorder.handler())
            .build();

        assert!(!validator.is_valid(""));
        assert!(validator.is_valid("a"));
        assert_eq!(recorder.messages(), ["error message"]);
    }

    #[test]
    fn test_builder_uses_table() {
        let validator = ValidatorBuilder::with_messages(Messages::spanish())
            .min_length(3, None)
            .build();

        let err = validator.valid_or_fail("ab").unwrap_err();
        assert_eq!(err.message(), "Se requiere 3 o más caracteres");
        assert_eq!(validator.not_match_message(), "No coinciden");
    }

    #[test]
    fn test_not_match_override() {
        let validator = ValidatorBuilder::new()
            .not_match_message("Passwords differ")
            .build();

        let err = validator.compare_or_fail("a", "b").unwrap_err();
        assert_eq!(err.message(), "Passwords differ");
    }

    #[test]
    fn test_built_validators_are_independent() {
        let mut builder = ValidatorBuilder::new();
        builder.required(None);

        let first = builder.build();
        builder.min_length(3, None);
        let second = builder.build();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_with_rules_seeds_chain_and_callback() {
        let recorder = RecordingHandler::new();
        let handler: InvalidEvaluationHandler = Arc::new(recorder.handler());
        let validator = ValidatorBuilder::with_rules(
            vec![Rule::new("too short", |s: Option<&str>| {
                s.is_some_and(|s| s.len() >= 3)
            })],
            Some(handler),
        )
        .only_letters(None)
        .build();

        assert_eq!(validator.len(), 2);
        assert!(!validator.is_valid("ab"));
        assert!(!validator.is_valid("abc1"));
        assert!(validator.is_valid("abc"));
        assert_eq!(recorder.messages(), ["too short", "Only letters"]);
        assert_eq!(validator.not_match_message(), "Not match");
    }

    #[test]
    fn test_validator_builder_shortcut() {
        let validator = Validator::builder().email(None).build();
        assert!(validator.is_valid("jealmesa@gmail.com"));
        assert!(!validator.is_valid("jealmesa@gmail"));
    }
}
