//! Built-in rules exercised through both `Validator` and `ValidatorBuilder`
//!
//! Every rule gets the same checks: rejected inputs (absent input always
//! included), accepted inputs, the message passed to the callback and the
//! message carried by `valid_or_fail`.

use regex::Regex;
use stillcheck::testing::RecordingHandler;
use stillcheck::{RuleChain, Validator, ValidatorBuilder};

macro_rules! rule_tests {
    (
        $module:ident,
        |$chain:ident| $setup:expr,
        message: $message:expr,
        not_permit: [$($not_permit:expr),* $(,)?],
        permit: [$($permit:expr),* $(,)?] $(,)?
    ) => {
        mod $module {
            use super::*;

            const NOT_PERMIT: &[&str] = &[$($not_permit),*];
            const PERMIT: &[&str] = &[$($permit),*];

            fn validator() -> Validator {
                let mut $chain = Validator::new();
                $setup;
                $chain
            }

            fn built() -> Validator {
                let mut $chain = ValidatorBuilder::new();
                $setup;
                $chain.build()
            }

            fn check_not_permit(validator: &Validator) {
                assert!(!validator.is_valid(None), "absent input accepted");
                for input in NOT_PERMIT {
                    assert!(!validator.is_valid(*input), "{:?} accepted", input);
                }
            }

            fn check_permit(validator: &Validator) {
                for input in PERMIT {
                    assert!(validator.is_valid(*input), "{:?} rejected", input);
                }
            }

            #[test]
            fn not_permit() {
                check_not_permit(&validator());
            }

            #[test]
            fn permit() {
                check_permit(&validator());
            }

            #[test]
            fn not_permit_builder() {
                check_not_permit(&built());
            }

            #[test]
            fn permit_builder() {
                check_permit(&built());
            }

            #[test]
            fn verify_callback() {
                let recorder = RecordingHandler::new();
                let mut validator = validator();
                validator.set_on_invalid_evaluation(recorder.handler());

                validator.is_valid(None);
                assert_eq!(recorder.messages(), [$message]);
            }

            #[test]
            fn verify_callback_builder() {
                let recorder = RecordingHandler::new();
                let mut validator = built();
                validator.set_on_invalid_evaluation(recorder.handler());

                validator.is_valid(None);
                assert_eq!(recorder.messages(), [$message]);
            }

            #[test]
            fn invalid_evaluation_error() {
                let err = validator().valid_or_fail(None).unwrap_err();
                assert_eq!(err.message(), $message);
                assert_eq!(err.value(), None);
            }

            #[test]
            fn invalid_evaluation_error_builder() {
                let err = built().valid_or_fail(None).unwrap_err();
                assert_eq!(err.message(), $message);
            }
        }
    };
}

rule_tests!(
    required,
    |v| v.required(None),
    message: "Required",
    not_permit: [""],
    permit: ["a", " ", "0"],
);

rule_tests!(
    text_length,
    |v| v.text_length(3, None),
    message: "It requires 3 characters",
    not_permit: ["", "12", "1234"],
    permit: ["123", "xxx"],
);

rule_tests!(
    min_length,
    |v| v.min_length(3, None),
    message: "3 or more characters are required",
    not_permit: ["", "1", "12"],
    permit: ["123", "1234", "ñññ"],
);

rule_tests!(
    max_length,
    |v| v.max_length(3, None),
    message: "3 or less characters required",
    not_permit: ["", "1234", "abcdef"],
    permit: ["1", "12", "ñññ"],
);

rule_tests!(
    range_length,
    |v| v.range_length(2, 4, None),
    message: "The text must contain between 2 and 4 characters",
    not_permit: ["", "1", "12345"],
    permit: ["12", "123", "1234"],
);

rule_tests!(
    re,
    |v| v.re(Regex::new(r"[0-9]{3}").unwrap(), None),
    message: "The value does not match the regular expression [0-9]{3}",
    not_permit: ["", "12", "a1b2c3"],
    permit: ["123", "abc123def"],
);

rule_tests!(
    email,
    |v| v.email(None),
    message: "Email invalid",
    not_permit: ["", "example", "example@", "example@mail", "@mail.com", "a b@mail.com"],
    permit: ["jealmesa@gmail.com", "first.last@example.co", "USER+tag@mail.org"],
);

rule_tests!(
    number,
    |v| v.number(None),
    message: "It is not a number",
    not_permit: ["", "text", "1,2", "1.", ".5", "1e3", "--1"],
    permit: ["0", "10", "-30", "+2.5", "0.0"],
);

rule_tests!(
    link,
    |v| v.link(None),
    message: "Invalid link",
    not_permit: ["", "google.com", "text", "a1", "1a", "12345,6789", "123.456.789"],
    permit: [
        "www.google.com",
        "http://google.com",
        "https://google.com",
        "http://google.com/api/auth?name=Name&lastName=LastName",
    ],
);

rule_tests!(
    www_link,
    |v| v.www_link(None),
    message: "Invalid www link",
    not_permit: ["", "google.com", "http://google.com", "https://google.com"],
    permit: ["www.google.com", "www.google.com/api/auth?name=Name&lastName=LastName"],
);

rule_tests!(
    http_link,
    |v| v.http_link(None),
    message: "Invalid http link",
    not_permit: [
        "",
        "google.com",
        "http.google.com",
        "https.google.com",
        "www.google.com",
        "https://google.com",
    ],
    permit: ["http://google.com", "http://google.com/api/auth?name=Name&lastName=LastName"],
);

rule_tests!(
    https_link,
    |v| v.https_link(None),
    message: "Invalid https link",
    not_permit: [
        "",
        "google.com",
        "http.google.com",
        "https.google.com",
        "www.google.com",
        "http://google.com",
    ],
    permit: ["https://google.com", "https://google.com/api/auth?name=Name&lastName=LastName"],
);

rule_tests!(
    ip,
    |v| v.ip(None),
    message: "Invalid IP",
    not_permit: ["", "text", "128", "10.0.0.256", "10.0.0.0.1", "ffff::ffff::ffff", "fffg::ffff"],
    permit: ["127.0.0.1", "10.0.0.1", "ffff::", "ffff:ffff::ffff"],
);

rule_tests!(
    ipv4,
    |v| v.ipv4(None),
    message: "Invalid IPv4",
    not_permit: [
        "",
        "text",
        "128",
        "10.0.0.256",
        "10.0.0.0.1",
        "ffff::ffff::ffff",
        "fffff::ffff",
        "fffg::ffff",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        "ffff::",
        "ffff::ffff",
        "ffff:ffff::ffff",
    ],
    permit: ["127.0.0.1", "192.168.0.109", "10.0.0.1"],
);

rule_tests!(
    ipv6,
    |v| v.ipv6(None),
    message: "Invalid IPv6",
    not_permit: [
        "",
        "text",
        "128",
        "10.0.0.256",
        "10.0.0.0.1",
        "127.0.0.1",
        "192.168.0.109",
        "10.0.0.1",
        "ffff::ffff::ffff",
        "fffff::ffff",
        "fffg::ffff",
    ],
    permit: ["ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", "ffff::", "ffff::ffff", "ffff:ffff::ffff"],
);

rule_tests!(
    name,
    |v| v.name(None),
    message: "Invalid personal name",
    not_permit: ["", "10", "1jose", "@omar", "Jesús", "jesus 1alberto", " jesus", "jesus "],
    permit: ["jesus", "maria", "JOSE", "jesus maria", "Maria Jose", "Jose Jesus", "maria de jose"],
);

rule_tests!(
    time,
    |v| v.time(None),
    message: "Invalid time",
    not_permit: ["", "1200", "01/01/2020", "12-30", "12.50", "25:00", "13:00 am"],
    permit: ["00:00", "12:30", "12:59 am", "23:59", "1:00 pm", "01:00AM", "01:00pm", "01:00PM"],
);

rule_tests!(
    time12,
    |v| v.time12(None),
    message: "Invalid 12 hour format",
    not_permit: [
        "",
        "1200",
        "01/01/2020",
        "12-30",
        "12.50",
        "25:00",
        "13:00 am",
        "23:59",
        "00:00",
    ],
    permit: ["12:59 am", "1:00 pm", "01:00AM", "01:00pm"],
);

rule_tests!(
    time24,
    |v| v.time24(None),
    message: "Invalid 24 hour format",
    not_permit: [
        "",
        "text",
        "12:59 am",
        "1:00 pm",
        "01:00AM",
        "01:00pm",
        "1200",
        "01/01/2020",
        "12-30",
        "12.50",
        "25:00",
        "13:00 am",
    ],
    permit: ["13:00", "23:59", "00:00"],
);

rule_tests!(
    only_numbers,
    |v| v.only_numbers(None),
    message: "Only numbers",
    not_permit: ["", "12a", "-1", "1.5", "١٢"],
    permit: ["0", "0123456789"],
);

rule_tests!(
    only_letters,
    |v| v.only_letters(None),
    message: "Only letters",
    not_permit: ["", "abc1", "ab c", "ñ"],
    permit: ["abc", "ABCdef"],
);

rule_tests!(
    only_alphanumeric,
    |v| v.only_alphanumeric(None),
    message: "Only alphanumeric characters",
    not_permit: ["", "ab c", "abc!", "a_b"],
    permit: ["abc", "ABC123", "42"],
);

rule_tests!(
    not_contain,
    |v| v.not_contain("01234567", None),
    message: "The following characters are not admitted 01234567",
    not_permit: ["", "0", "1", "2", "3", "4", "5", "6", "7", "text4"],
    permit: ["89", "text", "@nic89"],
);

rule_tests!(
    should_only_contain,
    |v| v.should_only_contain("abc", None),
    message: "Only the following characters are admitted abc",
    not_permit: ["", "abcd", "A", "a b"],
    permit: ["a", "cab", "aaabbbccc"],
);

rule_tests!(
    must_contain_one,
    |v| v.must_contain_one("!@#", None),
    message: "At least one of the following characters is required: !@#",
    not_permit: ["", "password", "p4ssw0rd"],
    permit: ["p@ss", "#1", "!"],
);

rule_tests!(
    must_contain_min,
    |v| v.must_contain_min(3, "abcdefghijklmnopqrstuvwxyz", None),
    message: "At least 3 of the following characters are required: abcdefghijklmnopqrstuvwxyz",
    not_permit: ["", "ABC", "123", "abC"],
    permit: ["abc", "abcd", "aBcDe", "abcABC123..."],
);

rule_tests!(
    min_value,
    |v| v.min_value(2.5, None),
    message: "The value cannot be less than 2.5",
    not_permit: ["", "text", "2,5", "2.49", "0", "-2.5"],
    permit: ["2.5", "2.51", "30"],
);

rule_tests!(
    max_value,
    |v| v.max_value(2.5, None),
    message: "The value cannot be greater than 2.5",
    not_permit: ["", "text", "2.51", "30", "91", "1,2", "2.6"],
    permit: ["2.5", "0.0", "-30", "2.49"],
);

rule_tests!(
    range_value,
    |v| v.range_value(-1.0, 10.0, None),
    message: "The value must be between -1 and 10",
    not_permit: ["", "text", "-1.5", "10.01", "100"],
    permit: ["-1", "0", "5.5", "10"],
);

rule_tests!(
    number_pattern,
    |v| v.number_pattern("+xx (xxx) xxx-xx-xx", None),
    message: "Does not match pattern +xx (xxx) xxx-xx-xx",
    not_permit: [
        "",
        "example",
        "128",
        "+58 (412) 756-41-79 ",
        " +58 (412) 756-41-79",
        "+a8 (412) 756-41-79",
    ],
    permit: ["+58 (412) 756-41-79", "+xx (xxx) xxx-xx-xx"],
);

#[test]
fn explicit_message_replaces_default() {
    let mut validator = Validator::new();
    validator.min_length(8, "Password too short");

    let err = validator.valid_or_fail("short").unwrap_err();
    assert_eq!(err.message(), "Password too short");
}

#[test]
fn explicit_message_is_not_interpolated() {
    let mut validator = Validator::new();
    validator.min_length(8, "At least %min");

    let err = validator.valid_or_fail("short").unwrap_err();
    assert_eq!(err.message(), "At least %min");
}
