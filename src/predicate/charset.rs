//! Character-set predicates
//!
//! The `alphabet` parameters are plain strings; every `char` of the alphabet
//! is a member of the set. Order and repetition in the alphabet do not matter.

fn non_empty(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.is_empty())
}

fn all_chars(input: Option<&str>, f: impl Fn(char) -> bool) -> bool {
    non_empty(input).is_some_and(|s| s.chars().all(f))
}

/// Check that the input only contains ASCII digits.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(only_numbers(Some("123456789")));
/// assert!(!only_numbers(Some("1.00")));
/// ```
pub fn only_numbers(input: Option<&str>) -> bool {
    all_chars(input, |c| c.is_ascii_digit())
}

/// Check that the input only contains ASCII letters.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(only_letters(Some("aAbB")));
/// assert!(!only_letters(Some("a-")));
/// ```
pub fn only_letters(input: Option<&str>) -> bool {
    all_chars(input, |c| c.is_ascii_alphabetic())
}

/// Check that the input only contains ASCII letters and digits.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(only_alphanumeric(Some("0123abc")));
/// assert!(!only_alphanumeric(Some("a b")));
/// ```
pub fn only_alphanumeric(input: Option<&str>) -> bool {
    all_chars(input, |c| c.is_ascii_alphanumeric())
}

/// Check that no character of `alphabet` appears in the input.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(not_contain("01234567", Some("@nic89")));
/// assert!(!not_contain("01234567", Some("text4")));
/// assert!(!not_contain("01234567", None));
/// ```
pub fn not_contain(alphabet: &str, input: Option<&str>) -> bool {
    all_chars(input, |c| !alphabet.contains(c))
}

/// Check that every character of the input appears in `alphabet`.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(should_only_contain("abc", Some("cab")));
/// assert!(!should_only_contain("abc", Some("abd")));
/// ```
pub fn should_only_contain(alphabet: &str, input: Option<&str>) -> bool {
    all_chars(input, |c| alphabet.contains(c))
}

/// Check that at least one character of `alphabet` appears in the input.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(must_contain_one("!@#", Some("secret!")));
/// assert!(!must_contain_one("!@#", Some("secret")));
/// ```
pub fn must_contain_one(alphabet: &str, input: Option<&str>) -> bool {
    non_empty(input).is_some_and(|s| s.chars().any(|c| alphabet.contains(c)))
}

/// Check that characters of `alphabet` occur at least `min` times in the
/// input, counting repetitions.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(must_contain_min(3, "abc", Some("aabbcc")));
/// assert!(!must_contain_min(3, "abc", Some("ab")));
/// ```
pub fn must_contain_min(min: usize, alphabet: &str, input: Option<&str>) -> bool {
    non_empty(input).is_some_and(|s| s.chars().filter(|c| alphabet.contains(*c)).count() >= min)
}
