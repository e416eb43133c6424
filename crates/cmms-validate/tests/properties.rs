//! Property tests for the RUT algorithm and color codes.

use cmms_validate::{calculate_dv, clean_rut, format_rut, is_valid_hex_color, validate_rut};
use proptest::prelude::*;
use proptest::test_runner::Config;

const CHECK_SYMBOLS: &str = "0123456789K";

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn hex_color_accepts_any_six_hex_digits(hex in "[0-9A-Fa-f]{6}") {
        let color = format!("#{hex}");
        prop_assert!(is_valid_hex_color(&color));
    }

    #[test]
    fn hex_color_rejects_one_bad_character(
        hex in "[0-9A-Fa-f]{6}",
        position in 0usize..6,
        bad in "[G-Zg-z !#.]",
    ) {
        let mut chars: Vec<char> = hex.chars().collect();
        chars[position] = bad.chars().next().unwrap();
        let color = format!("#{}", chars.into_iter().collect::<String>());
        prop_assert!(!is_valid_hex_color(&color));
    }

    #[test]
    fn hex_color_rejects_wrong_length(hex in "[0-9A-Fa-f]{0,12}") {
        prop_assume!(hex.len() != 6);
        let color = format!("#{hex}");
        prop_assert!(!is_valid_hex_color(&color));
    }

    #[test]
    fn computed_check_digit_validates(body in "[1-9][0-9]{6,7}") {
        let dv = calculate_dv(&body);
        let rut = format!("{body}{dv}");
        prop_assert!(validate_rut(&rut));
        prop_assert!(validate_rut(&format_rut(&rut)));
    }

    #[test]
    fn any_other_check_digit_fails(body in "[1-9][0-9]{6,7}") {
        let dv = calculate_dv(&body);
        for symbol in CHECK_SYMBOLS.chars().filter(|c| c.to_string() != dv) {
            let rut = format!("{body}{symbol}");
            prop_assert!(!validate_rut(&rut), "{} should be rejected", rut);
        }
    }

    #[test]
    fn cleaning_undoes_formatting(input in "[ -~]{0,24}") {
        prop_assert_eq!(clean_rut(&format_rut(&input)), clean_rut(&input));
    }

    #[test]
    fn formatting_is_idempotent(input in "[0-9kK .\\-]{0,16}") {
        let once = format_rut(&input);
        prop_assert_eq!(format_rut(&once), once);
    }
}
