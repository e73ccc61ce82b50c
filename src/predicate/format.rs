//! Format predicates: email, numbers, links, IP addresses, names and times

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

use super::length::required;

const HOST: &str = r"(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}";
const PORT: &str = r"(?::[0-9]{1,5})?";
const PATH: &str = r"(?:[/?#]\S*)?";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("email regex is valid")
});

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+)?$").expect("number regex is valid"));

static WWW_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^www\.{HOST}{PORT}{PATH}$")).expect("www link regex is valid")
});

static HTTP_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^http://{HOST}{PORT}{PATH}$")).expect("http link regex is valid")
});

static HTTPS_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^https://{HOST}{PORT}{PATH}$")).expect("https link regex is valid")
});

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+(?: [a-zA-Z]+)*$").expect("name regex is valid"));

static TIME12_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0?[1-9]|1[0-2]):[0-5][0-9] ?[aApP][mM]$").expect("time12 regex is valid")
});

static TIME24_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time24 regex is valid")
});

fn matches(regex: &Regex, input: Option<&str>) -> bool {
    input.is_some_and(|s| !s.is_empty() && regex.is_match(s))
}

/// Check that the input contains a match of `regex`.
///
/// The search is unanchored; add `^`/`$` to the pattern to match the whole input.
/// Absent and empty inputs are rejected.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use stillcheck::predicate::*;
///
/// let digits = Regex::new(r"^[0-9]+$").unwrap();
/// assert!(re(&digits, Some("123")));
/// assert!(!re(&digits, Some("12a")));
/// assert!(!re(&digits, None));
/// ```
pub fn re(regex: &Regex, input: Option<&str>) -> bool {
    required(input) && matches(regex, input)
}

/// Check that the input is an email address.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(email(Some("jealmesa@gmail.com")));
/// assert!(!email(Some("example@mail")));
/// ```
pub fn email(input: Option<&str>) -> bool {
    matches(&EMAIL_REGEX, input)
}

/// Check that the input is a decimal number.
///
/// An optional leading sign and an optional fractional part are accepted;
/// thousands separators are not.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(number(Some("-12345.6789")));
/// assert!(!number(Some("12345,6789")));
/// assert!(!number(Some("123.456.789")));
/// ```
pub fn number(input: Option<&str>) -> bool {
    matches(&NUMBER_REGEX, input)
}

/// Check that the input is a `www.` link.
pub fn www_link(input: Option<&str>) -> bool {
    matches(&WWW_LINK_REGEX, input)
}

/// Check that the input is an `http://` link.
pub fn http_link(input: Option<&str>) -> bool {
    matches(&HTTP_LINK_REGEX, input)
}

/// Check that the input is an `https://` link.
pub fn https_link(input: Option<&str>) -> bool {
    matches(&HTTPS_LINK_REGEX, input)
}

/// Check that the input is a `www.`, `http://` or `https://` link.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(link(Some("www.google.com")));
/// assert!(link(Some("https://google.com/api/auth?name=Name")));
/// assert!(!link(Some("google.com")));
/// ```
pub fn link(input: Option<&str>) -> bool {
    www_link(input) || http_link(input) || https_link(input)
}

/// Check that the input is a dotted-quad IPv4 address.
pub fn ipv4(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.parse::<Ipv4Addr>().is_ok())
}

/// Check that the input is a textual IPv6 address.
pub fn ipv6(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.parse::<Ipv6Addr>().is_ok())
}

/// Check that the input is an IPv4 or IPv6 address.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(ip(Some("192.168.0.109")));
/// assert!(ip(Some("ffff::ffff")));
/// assert!(!ip(Some("10.0.0.256")));
/// ```
pub fn ip(input: Option<&str>) -> bool {
    ipv4(input) || ipv6(input)
}

/// Check that the input is a personal name: ASCII-letter words separated by
/// single spaces.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(name(Some("maria de jose")));
/// assert!(!name(Some(" jesus")));
/// assert!(!name(Some("1jose")));
/// ```
pub fn name(input: Option<&str>) -> bool {
    matches(&NAME_REGEX, input)
}

/// Check that the input is a 12-hour time such as `1:00 pm` or `01:00AM`.
pub fn time12(input: Option<&str>) -> bool {
    matches(&TIME12_REGEX, input)
}

/// Check that the input is a 24-hour time such as `00:00` or `23:59`.
pub fn time24(input: Option<&str>) -> bool {
    matches(&TIME24_REGEX, input)
}

/// Check that the input is a 12-hour or 24-hour time.
///
/// # Example
///
/// ```rust
/// use stillcheck::predicate::*;
///
/// assert!(time(Some("23:59")));
/// assert!(time(Some("12:59 am")));
/// assert!(!time(Some("13:00 am")));
/// ```
pub fn time(input: Option<&str>) -> bool {
    time12(input) || time24(input)
}
