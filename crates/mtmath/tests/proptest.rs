//! Property-based tests for operand parsing.

use num_bigint::BigInt as RefInt;
use proptest::prelude::*;

use mtmath_lib::operand::parse_int;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Prefixed operands parse to the same value as their decimal form.
    #[test]
    fn prefixes_agree_with_reference(value in any::<i128>()) {
        let reference = RefInt::from(value);
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        for text in [
            format!("{value}"),
            format!("{sign}0x{magnitude:x}"),
            format!("{sign}0o{magnitude:o}"),
            format!("{sign}0b{magnitude:b}"),
        ] {
            let parsed = parse_int(&text).unwrap();
            prop_assert_eq!(parsed.to_string(), reference.to_string(), "operand {}", text);
        }
    }

    /// Anything with a non-digit after the prefix is rejected.
    #[test]
    fn stray_characters_are_rejected(digits in "[0-9]{1,20}", junk in "[g-z]") {
        let text = format!("{digits}{junk}");
        prop_assert!(parse_int(&text).is_err());
    }
}
