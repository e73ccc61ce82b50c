//! Rules: a failure message bound to a predicate
//!
//! A [`Rule`] is the leaf component of a validator chain. It pairs the
//! human-readable message reported when the rule rejects an input with the
//! [`Predicate`] that decides acceptance.

use std::fmt;
use std::sync::Arc;

/// A check over an optional string.
///
/// `None` stands for an absent input. Predicates must be total: they return
/// `false` for inputs they reject and never panic.
///
/// Any `Fn(Option<&str>) -> bool + Send + Sync` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use stillcheck::Predicate;
///
/// let non_blank = |s: Option<&str>| s.is_some_and(|s| !s.trim().is_empty());
/// assert!(non_blank.check(Some("x")));
/// assert!(!non_blank.check(Some("   ")));
/// assert!(!non_blank.check(None));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the input satisfies this predicate.
    fn check(&self, input: Option<&str>) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(Option<&str>) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, input: Option<&str>) -> bool {
        self(input)
    }
}

/// An immutable (message, predicate) pair.
///
/// Cloning a rule shares its predicate.
///
/// # Example
///
/// ```rust
/// use stillcheck::Rule;
///
/// let rule = Rule::new("too short", |s: Option<&str>| s.is_some_and(|s| s.len() >= 3));
/// assert_eq!(rule.message(), "too short");
/// assert!(rule.validate(Some("abc")));
/// assert!(!rule.validate(Some("ab")));
/// ```
#[derive(Clone)]
pub struct Rule {
    message: String,
    predicate: Arc<dyn Predicate>,
}

impl Rule {
    /// Create a rule. The message is not inspected; an empty message is allowed.
    pub fn new<P>(message: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Rule {
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The message reported when this rule rejects an input.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate and return its result unchanged.
    #[inline]
    pub fn validate(&self, input: Option<&str>) -> bool {
        self.predicate.check(input)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
