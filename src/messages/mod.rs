//! Message tables for the built-in rules
//!
//! A [`Messages`] table holds one failure-message template per built-in rule
//! kind. Templates use named `%placeholder` parameters (`%min`, `%max`,
//! `%length`, `%alphabet`, `%pattern`, `%regex`), substituted by
//! [`format_message`] when a rule is registered.
//!
//! English ([`Messages::english`], also the `Default`) and Spanish
//! ([`Messages::spanish`]) tables are provided. Custom tables are plain
//! values: start from one of the provided tables and overwrite fields.
//!
//! # Example
//!
//! ```rust
//! use stillcheck::{Messages, RuleChain, Validator};
//!
//! let mut messages = Messages::english();
//! messages.min_length = "Use at least %min characters".to_string();
//!
//! let mut validator = Validator::with_messages(messages);
//! validator.min_length(8, None);
//!
//! let err = validator.valid_or_fail("short").unwrap_err();
//! assert_eq!(err.message(), "Use at least 8 characters");
//! ```
//!
//! With the `serde` feature enabled, a table can be loaded from any serde
//! format. Missing fields fall back to the English table.

mod en;
mod es;

/// Failure-message templates, one per built-in rule kind.
///
/// Field names match the [`RuleChain`](crate::RuleChain) method that uses
/// them, plus `compare` for the mismatch message of
/// [`Validator::is_match`](crate::Validator::is_match).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(missing_docs)]
pub struct Messages {
    pub required: String,
    pub text_length: String,
    pub min_length: String,
    pub max_length: String,
    pub range_length: String,
    pub re: String,
    pub email: String,
    pub number: String,
    pub link: String,
    pub www_link: String,
    pub http_link: String,
    pub https_link: String,
    pub ip: String,
    pub ipv4: String,
    pub ipv6: String,
    pub name: String,
    pub time: String,
    pub time12: String,
    pub time24: String,
    pub only_numbers: String,
    pub only_letters: String,
    pub only_alphanumeric: String,
    pub not_contain: String,
    pub should_only_contain: String,
    pub must_contain_one: String,
    pub must_contain_min: String,
    pub min_value: String,
    pub max_value: String,
    pub range_value: String,
    pub number_pattern: String,
    pub compare: String,
}

impl Messages {
    /// The English table.
    pub fn english() -> Self {
        en::table()
    }

    /// The Spanish table.
    pub fn spanish() -> Self {
        es::table()
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::english()
    }
}

/// Substitute named `%placeholder` parameters in a template.
///
/// A placeholder is `%` followed by ASCII letters, digits or underscores.
/// Placeholders with no matching parameter, and lone `%` signs, are kept
/// as-is. Substituted values are never rescanned.
///
/// # Example
///
/// ```rust
/// use stillcheck::messages::format_message;
///
/// let msg = format_message(
///     "Between %min and %max characters (100%)",
///     &[("min", "3"), ("max", "5")],
/// );
/// assert_eq!(msg, "Between 3 and 5 characters (100%)");
/// ```
pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) if !name.is_empty() => out.push_str(value),
            _ => {
                out.push('%');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }
    out.push_str(rest);
    out
}
