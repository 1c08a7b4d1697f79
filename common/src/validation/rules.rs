//! Field-level predicates. Each one looks at a single value (or a pair) and
//! answers whether it is acceptable; messages live with the forms.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Please enter a valid email";

/// `local@domain.tld`: no whitespace or extra `@` anywhere, and at least one
/// dot in the part after the `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Length is counted in UTF-16 code units, the way a browser reports an
/// input's length. Characters outside the BMP count twice.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

/// Required text: anything other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Required select: any non-empty option value.
pub fn is_selected(value: &str) -> bool {
    !value.is_empty()
}

/// Exact comparison, no trimming or case folding.
pub fn matches(value: &str, confirmation: &str) -> bool {
    value == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_simple_shapes() {
        for email in ["a@b.c", "user@test.com", "first.last@sub.domain.org", "x+y@host.io"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn email_rejects_malformed() {
        for email in [
            "",
            "plain",
            "@b.c",
            "a@.",
            "a@b",
            "a@b.",
            "a@@b.c",
            "a@b@c.d",
            "a b@c.d",
            "a@b .c",
            "a@b.c ",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn min_length_counts_utf16_units() {
        assert!(has_min_length("abcdef", 6));
        assert!(!has_min_length("abc12", 6));
        assert!(has_min_length("éééééé", 6));
        assert!(!has_min_length("éééé", 6));
        // Each emoji is a surrogate pair.
        assert!(has_min_length("😀😀😀", 6));
        assert!(!has_min_length("😀😀", 6));
        assert!(has_min_length("😀😀😀😀", 8));
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_match("a@b.c"));
    }

    #[test]
    fn presence_ignores_whitespace() {
        assert!(!is_present(""));
        assert!(!is_present("   \t\n"));
        assert!(is_present("  x "));
    }

    #[test]
    fn selection_requires_a_value() {
        assert!(!is_selected(""));
        assert!(is_selected("2-5"));
    }

    #[test]
    fn match_is_exact() {
        assert!(matches("secret123", "secret123"));
        assert!(!matches("secret123", "Secret123"));
        assert!(!matches("secret123", "secret123 "));
    }
}
