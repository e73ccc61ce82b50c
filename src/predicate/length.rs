//! Presence and length predicates
//!
//! Lengths are counted in `char`s, so `"día"` has length 3.

/// Check that the input is present and non-empty.
///
/// Whitespace counts as content.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(required(Some("xxx")));
/// assert!(required(Some(" ")));
/// assert!(!required(Some("")));
/// assert!(!required(None));
/// ```
#[inline]
pub fn required(input: Option<&str>) -> bool {
    input.is_some_and(|s| !s.is_empty())
}

fn char_len(input: Option<&str>) -> Option<usize> {
    input.filter(|s| !s.is_empty()).map(|s| s.chars().count())
}

/// Check that the input has exactly `length` characters.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(text_length(3, Some("123")));
/// assert!(!text_length(3, Some("12")));
/// assert!(!text_length(3, Some("1234")));
/// ```
pub fn text_length(length: usize, input: Option<&str>) -> bool {
    char_len(input).is_some_and(|len| len == length)
}

/// Check that the input has at least `min` characters.
///
/// An absent or empty input never satisfies a length check, even with `min == 0`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(min_length(3, Some("1234")));
/// assert!(!min_length(3, Some("12")));
/// assert!(!min_length(0, Some("")));
/// ```
pub fn min_length(min: usize, input: Option<&str>) -> bool {
    char_len(input).is_some_and(|len| len >= min)
}

/// Check that the input has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(max_length(3, Some("12")));
/// assert!(!max_length(3, Some("1234")));
/// assert!(!max_length(3, None));
/// ```
pub fn max_length(max: usize, input: Option<&str>) -> bool {
    char_len(input).is_some_and(|len| len <= max)
}

/// Check that the input length is between `min` and `max` (inclusive).
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(range_length(3, 5, Some("1234")));
/// assert!(!range_length(3, 5, Some("12")));
/// assert!(!range_length(3, 5, Some("123456")));
/// ```
pub fn range_length(min: usize, max: usize, input: Option<&str>) -> bool {
    char_len(input).is_some_and(|len| len >= min && len <= max)
}
