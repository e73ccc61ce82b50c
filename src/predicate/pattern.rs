//! Fixed-template predicates

use super::charset::only_numbers;

/// Check that the input follows a fixed numeric template.
///
/// The input must have as many characters as `pattern`. Where the pattern has
/// an `x` or `X` placeholder, the input must have a digit or that same
/// placeholder character; every other position must match the pattern
/// exactly.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// let phone = "+xx (xxx) xxx-xx-xx";
/// assert!(number_pattern(phone, Some("+58 (412) 756-41-79")));
/// assert!(number_pattern(phone, Some("+xx (xxx) xxx-xx-xx")));
/// assert!(!number_pattern(phone, Some("+58 (412) 756-41-7 ")));
/// assert!(!number_pattern(phone, Some("+58 (412) 756-41-79 ")));
/// ```
pub fn number_pattern(pattern: &str, input: Option<&str>) -> bool {
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return false;
    };
    if input.chars().count() != pattern.chars().count() {
        return false;
    }

    let mut buf = [0u8; 4];
    pattern.chars().zip(input.chars()).all(|(p, c)| match p {
        'x' | 'X' => c == p || only_numbers(Some(&*c.encode_utf8(&mut buf))),
        _ => c == p,
    })
}
