//! Reusable string predicates
//!
//! Every predicate is a pure function of its parameters and an optional
//! input, returning `true` when the input is accepted. `None` stands for an
//! absent input; absent and empty inputs are rejected by every predicate.
//!
//! Predicates can be called standalone or wrapped in a [`Rule`](crate::Rule);
//! the [`RuleChain`](crate::RuleChain) methods do the wrapping and pick the
//! failure message from a [`Messages`](crate::Messages) table.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::predicate::*;
//!
//! assert!(required(Some("hello")));
//! assert!(min_length(3, Some("hello")));
//! assert!(!email(Some("not-an-email")));
//! assert!(number_pattern("xxx-xxxx", Some("555-0199")));
//! ```
//!
//! # Wrapping in a rule
//!
//! ```rust
//! use stillcheck::{predicate, Validator};
//!
//! let mut validator = Validator::new();
//! validator.rule("Three or more vowels", |s: Option<&str>| {
//!     predicate::must_contain_min(3, "aeiou", s)
//! });
//!
//! assert!(validator.is_valid("education"));
//! assert!(!validator.is_valid("rhythm"));
//! ```

mod charset;
mod format;
mod length;
mod numeric;
mod pattern;

pub use charset::{
    must_contain_min, must_contain_one, not_contain, only_alphanumeric, only_letters,
    only_numbers, should_only_contain,
};
pub use format::{
    email, http_link, https_link, ip, ipv4, ipv6, link, name, number, re, time, time12, time24,
    www_link,
};
pub use length::{max_length, min_length, range_length, required, text_length};
pub use numeric::{max_value, min_value, range_value};
pub use pattern::number_pattern;
