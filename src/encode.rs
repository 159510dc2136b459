use percent_encoding::utf8_percent_encode;

use crate::constants::{AWS_PATH_ENCODE_SET, AWS_QUERY_ENCODE_SET};

/// Percent-encode a string with the AWS UriEncode rules.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through unchanged;
/// every other byte of the UTF-8 representation becomes uppercase `%XX`.
/// `/` is encoded only when `encode_slash` is true: paths keep their
/// segment separators, while query keys and values encode everything.
pub fn uri_encode(value: &str, encode_slash: bool) -> String {
    if encode_slash {
        utf8_percent_encode(value, &AWS_QUERY_ENCODE_SET).to_string()
    } else {
        utf8_percent_encode(value, &AWS_PATH_ENCODE_SET).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ABCDEFGHIJKLMNOPQRSTUVWXYZ", true, "ABCDEFGHIJKLMNOPQRSTUVWXYZ"; "uppercase letters pass through")]
    #[test_case("abcdefghijklmnopqrstuvwxyz", true, "abcdefghijklmnopqrstuvwxyz"; "lowercase letters pass through")]
    #[test_case("0123456789", true, "0123456789")]
    #[test_case("-._~", true, "-._~")]
    #[test_case(" ", true, "%20")]
    #[test_case("[]", true, "%5B%5D")]
    #[test_case("/", false, "/")]
    #[test_case("/", true, "%2F")]
    #[test_case("photos/2006", false, "photos/2006")]
    #[test_case("åöä", true, "%C3%A5%C3%B6%C3%A4"; "utf8 bytes are encoded")]
    fn test_uri_encode(input: &str, encode_slash: bool, expected: &str) {
        assert_eq!(uri_encode(input, encode_slash), expected);
    }

    #[test]
    fn test_uri_encode_output_alphabet() {
        let encoded = uri_encode("a b/c%d\tåöä", true);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '%' | '.' | '_' | '~' | '-')));
    }
}
