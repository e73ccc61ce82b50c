//! Numeric-range predicates
//!
//! Inputs must first be well-formed numbers (see [`number`]); bounds are
//! inclusive.

use super::format::number;

fn parse(input: Option<&str>) -> Option<f64> {
    input
        .filter(|s| number(Some(*s)))
        .and_then(|s| s.parse::<f64>().ok())
}

/// Check that the input is a number not less than `min`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(min_value(2.5, Some("2.5")));
/// assert!(min_value(2.5, Some("30")));
/// assert!(!min_value(2.5, Some("2.49")));
/// assert!(!min_value(2.5, Some("2,5")));
/// ```
pub fn min_value(min: f64, input: Option<&str>) -> bool {
    parse(input).is_some_and(|v| v >= min)
}

/// Check that the input is a number not greater than `max`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(max_value(2.5, Some("-30")));
/// assert!(!max_value(2.5, Some("2.51")));
/// ```
pub fn max_value(max: f64, input: Option<&str>) -> bool {
    parse(input).is_some_and(|v| v <= max)
}

/// Check that the input is a number between `min` and `max` (inclusive).
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(range_value(1.0, 10.0, Some("10")));
/// assert!(!range_value(1.0, 10.0, Some("10.01")));
/// ```
pub fn range_value(min: f64, max: f64, input: Option<&str>) -> bool {
    parse(input).is_some_and(|v| v >= min && v <= max)
}
