//! # Stillcheck
//!
//! Chainable string validation with localized messages.
//!
//! A [`Validator`] is an ordered chain of [`Rule`]s. Each rule pairs a
//! failure message with a predicate over an optional string. Evaluation is
//! fail-fast: the first rule that rejects the input decides the outcome and
//! supplies the message.
//!
//! ## Quick Example
//!
//! ```rust
//! use stillcheck::{RuleChain, Validator};
//!
//! let mut password = Validator::new();
//! password
//!     .required(None)
//!     .min_length(8, None)
//!     .must_contain_one("0123456789", Some("At least one digit"));
//!
//! assert!(password.is_valid("correct horse 1"));
//!
//! let err = password.valid_or_fail("hunter2").unwrap_err();
//! assert_eq!(err.message(), "8 or more characters are required");
//!
//! // Confirmation fields compare first, then validate.
//! assert!(password.compare_or_fail("correct horse 1", "correct horse 1").is_ok());
//! assert_eq!(
//!     password.compare_or_fail("correct horse 1", "correct horse 2").unwrap_err().message(),
//!     "Not match"
//! );
//! ```
//!
//! ## Messages
//!
//! Built-in rules take their default message from a [`Messages`] table.
//! English is the default; [`Messages::spanish`] ships as well, and any
//! table can be built by hand or, with the `serde` feature, deserialized.
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`trace` events for failed evaluations.
//! - `serde`: (de)serialize [`Messages`] tables.
//! - `proptest`: input strategies in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod chain;
pub mod error;
pub mod messages;
pub mod predicate;
pub mod rule;
pub mod testing;
pub mod validator;

// Re-exports
pub use builder::ValidatorBuilder;
pub use chain::RuleChain;
pub use error::InvalidEvaluationError;
pub use messages::Messages;
pub use rule::{Predicate, Rule};
pub use validator::{InvalidEvaluationHandler, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::ValidatorBuilder;
    pub use crate::chain::RuleChain;
    pub use crate::error::InvalidEvaluationError;
    pub use crate::messages::Messages;
    pub use crate::rule::{Predicate, Rule};
    pub use crate::validator::{InvalidEvaluationHandler, Validator};
}
