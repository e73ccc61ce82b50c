use super::Messages;

pub(super) fn table() -> Messages {
    Messages {
        required: "Required".into(),
        text_length: "It requires %length characters".into(),
        min_length: "%min or more characters are required".into(),
        max_length: "%max or less characters required".into(),
        range_length: "The text must contain between %min and %max characters".into(),
        re: "The value does not match the regular expression %regex".into(),
        email: "Email invalid".into(),
        number: "It is not a number".into(),
        link: "Invalid link".into(),
        www_link: "Invalid www link".into(),
        http_link: "Invalid http link".into(),
        https_link: "Invalid https link".into(),
        ip: "Invalid IP".into(),
        ipv4: "Invalid IPv4".into(),
        ipv6: "Invalid IPv6".into(),
        name: "Invalid personal name".into(),
        time: "Invalid time".into(),
        time12: "Invalid 12 hour format".into(),
        time24: "Invalid 24 hour format".into(),
        only_numbers: "Only numbers".into(),
        only_letters: "Only letters".into(),
        only_alphanumeric: "Only alphanumeric characters".into(),
        not_contain: "The following characters are not admitted %alphabet".into(),
        should_only_contain: "Only the following characters are admitted %alphabet".into(),
        must_contain_one: "At least one of the following characters is required: %alphabet"
            .into(),
        must_contain_min: "At least %min of the following characters are required: %alphabet"
            .into(),
        min_value: "The value cannot be less than %min".into(),
        max_value: "The value cannot be greater than %max".into(),
        range_value: "The value must be between %min and %max".into(),
        number_pattern: "Does not match pattern %pattern".into(),
        compare: "Not match".into(),
    }
}
