//! Hex color codes used by categories, priorities and work-order types.

use std::sync::LazyLock;

use regex::Regex;

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex"));

/// Returns true for exactly `#` followed by six hex digits.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_hex_digits_any_case() {
        assert!(is_valid_hex_color("#1A2B3C"));
        assert!(is_valid_hex_color("#abcdef"));
        assert!(is_valid_hex_color("#000000"));
    }

    #[test]
    fn rejects_everything_else() {
        for value in [
            "1A2B3C", "#1A2B3", "#1A2B3C4", "#1A2B3G", "#FFF", "# 1A2B3C", "#1A2B3C ", "red",
            "", "#",
        ] {
            assert!(!is_valid_hex_color(value), "{value:?} should be rejected");
        }
    }
}
