//! Convenience rule constructors
//!
//! [`RuleChain`] registers the built-in [`predicate`](crate::predicate)s as
//! rules. It is implemented by both [`Validator`](crate::Validator) and
//! [`ValidatorBuilder`](crate::ValidatorBuilder), so the two expose exactly
//! the same rule set.
//!
//! Every method takes an optional message override. With `None` the message
//! comes from the chain's [`Messages`] table, with the rule's parameters
//! substituted; an explicit message is used verbatim.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::{RuleChain, Validator};
//!
//! let mut password = Validator::new();
//! password
//!     .required(None)
//!     .range_length(8, 64, None)
//!     .must_contain_min(2, "0123456789", "Use at least two digits");
//!
//! assert!(password.is_valid("hunter2hunter2"));
//! assert!(!password.is_valid("hunter2"));
//! ```

use regex::Regex;

use crate::messages::{format_message, Messages};
use crate::predicate;
use crate::rule::{Predicate, Rule};

fn resolve(message: Option<&str>, template: &str, params: &[(&str, &str)]) -> String {
    match message {
        Some(message) => message.to_owned(),
        None => format_message(template, params),
    }
}

/// Registration of the built-in rules.
///
/// Implementors provide storage ([`push_rule`](RuleChain::push_rule)) and the
/// message table ([`messages`](RuleChain::messages)); every other method is
/// provided.
pub trait RuleChain {
    /// Append a rule to the end of the chain.
    fn push_rule(&mut self, rule: Rule);

    /// The table default messages are taken from.
    fn messages(&self) -> &Messages;

    /// Append a rule built from `message` and `predicate`, returning `self`
    /// for chaining.
    fn add_rule<P>(&mut self, message: String, predicate: P) -> &mut Self
    where
        P: Predicate + 'static,
    {
        self.push_rule(Rule::new(message, predicate));
        self
    }

    /// Require a present, non-empty input.
    fn required<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().required, &[]);
        self.add_rule(message, predicate::required)
    }

    /// Require exactly `length` characters. Placeholder: `%length`.
    fn text_length<'a>(&mut self, length: usize, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().text_length,
            &[("length", length.to_string().as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::text_length(length, s)
        })
    }

    /// Require at least `min` characters. Placeholder: `%min`.
    fn min_length<'a>(&mut self, min: usize, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().min_length,
            &[("min", min.to_string().as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| predicate::min_length(min, s))
    }

    /// Require at most `max` characters. Placeholder: `%max`.
    fn max_length<'a>(&mut self, max: usize, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().max_length,
            &[("max", max.to_string().as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| predicate::max_length(max, s))
    }

    /// Require between `min` and `max` characters. Placeholders: `%min`, `%max`.
    fn range_length<'a>(
        &mut self,
        min: usize,
        max: usize,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().range_length,
            &[
                ("min", min.to_string().as_str()),
                ("max", max.to_string().as_str()),
            ],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::range_length(min, max, s)
        })
    }

    /// Require a match of `regex` somewhere in the input. Placeholder: `%regex`.
    fn re<'a>(&mut self, regex: Regex, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().re,
            &[("regex", regex.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| predicate::re(&regex, s))
    }

    /// Require an email address.
    fn email<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().email, &[]);
        self.add_rule(message, predicate::email)
    }

    /// Require a decimal number.
    fn number<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().number, &[]);
        self.add_rule(message, predicate::number)
    }

    /// Require a `www.`, `http://` or `https://` link.
    fn link<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().link, &[]);
        self.add_rule(message, predicate::link)
    }

    /// Require a `www.` link.
    fn www_link<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().www_link, &[]);
        self.add_rule(message, predicate::www_link)
    }

    /// Require an `http://` link.
    fn http_link<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().http_link, &[]);
        self.add_rule(message, predicate::http_link)
    }

    /// Require an `https://` link.
    fn https_link<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().https_link, &[]);
        self.add_rule(message, predicate::https_link)
    }

    /// Require an IPv4 or IPv6 address.
    fn ip<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().ip, &[]);
        self.add_rule(message, predicate::ip)
    }

    /// Require an IPv4 address.
    fn ipv4<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().ipv4, &[]);
        self.add_rule(message, predicate::ipv4)
    }

    /// Require an IPv6 address.
    fn ipv6<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().ipv6, &[]);
        self.add_rule(message, predicate::ipv6)
    }

    /// Require a personal name.
    fn name<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().name, &[]);
        self.add_rule(message, predicate::name)
    }

    /// Require a 12-hour or 24-hour time.
    fn time<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().time, &[]);
        self.add_rule(message, predicate::time)
    }

    /// Require a 12-hour time.
    fn time12<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().time12, &[]);
        self.add_rule(message, predicate::time12)
    }

    /// Require a 24-hour time.
    fn time24<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().time24, &[]);
        self.add_rule(message, predicate::time24)
    }

    /// Require ASCII digits only.
    fn only_numbers<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().only_numbers, &[]);
        self.add_rule(message, predicate::only_numbers)
    }

    /// Require ASCII letters only.
    fn only_letters<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().only_letters, &[]);
        self.add_rule(message, predicate::only_letters)
    }

    /// Require ASCII letters and digits only.
    fn only_alphanumeric<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(message.into(), &self.messages().only_alphanumeric, &[]);
        self.add_rule(message, predicate::only_alphanumeric)
    }

    /// Reject any character of `alphabet`. Placeholder: `%alphabet`.
    fn not_contain<'a>(
        &mut self,
        alphabet: impl Into<String>,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let alphabet = alphabet.into();
        let message = resolve(
            message.into(),
            &self.messages().not_contain,
            &[("alphabet", alphabet.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::not_contain(&alphabet, s)
        })
    }

    /// Accept only characters of `alphabet`. Placeholder: `%alphabet`.
    fn should_only_contain<'a>(
        &mut self,
        alphabet: impl Into<String>,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let alphabet = alphabet.into();
        let message = resolve(
            message.into(),
            &self.messages().should_only_contain,
            &[("alphabet", alphabet.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::should_only_contain(&alphabet, s)
        })
    }

    /// Require at least one character of `alphabet`. Placeholder: `%alphabet`.
    fn must_contain_one<'a>(
        &mut self,
        alphabet: impl Into<String>,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let alphabet = alphabet.into();
        let message = resolve(
            message.into(),
            &self.messages().must_contain_one,
            &[("alphabet", alphabet.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::must_contain_one(&alphabet, s)
        })
    }

    /// Require `min` occurrences of characters of `alphabet`.
    /// Placeholders: `%min`, `%alphabet`.
    fn must_contain_min<'a>(
        &mut self,
        min: usize,
        alphabet: impl Into<String>,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let alphabet = alphabet.into();
        let message = resolve(
            message.into(),
            &self.messages().must_contain_min,
            &[("min", min.to_string().as_str()), ("alphabet", alphabet.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::must_contain_min(min, &alphabet, s)
        })
    }

    /// Require a number not less than `min`. Placeholder: `%min`.
    fn min_value<'a>(&mut self, min: f64, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().min_value,
            &[("min", min.to_string().as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| predicate::min_value(min, s))
    }

    /// Require a number not greater than `max`. Placeholder: `%max`.
    fn max_value<'a>(&mut self, max: f64, message: impl Into<Option<&'a str>>) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().max_value,
            &[("max", max.to_string().as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| predicate::max_value(max, s))
    }

    /// Require a number between `min` and `max`. Placeholders: `%min`, `%max`.
    fn range_value<'a>(
        &mut self,
        min: f64,
        max: f64,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let message = resolve(
            message.into(),
            &self.messages().range_value,
            &[
                ("min", min.to_string().as_str()),
                ("max", max.to_string().as_str()),
            ],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::range_value(min, max, s)
        })
    }

    /// Require the input to follow a numeric template such as
    /// `+xx (xxx) xxx-xx-xx`. Placeholder: `%pattern`.
    fn number_pattern<'a>(
        &mut self,
        pattern: impl Into<String>,
        message: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let pattern = pattern.into();
        let message = resolve(
            message.into(),
            &self.messages().number_pattern,
            &[("pattern", pattern.as_str())],
        );
        self.add_rule(message, move |s: Option<&str>| {
            predicate::number_pattern(&pattern, s)
        })
    }
}
