#![no_main]

use libfuzzer_sys::fuzz_target;

use mtmath_core::{BigInt, Rational};

fuzz_target!(|data: &[u8]| {
    // The lenient parser must accept any bytes.
    let lenient = BigInt::parse_leading_digits(data);
    assert!(lenient.is_valid());

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = text.parse::<BigInt>() {
        let reference = text.parse::<num_bigint::BigInt>();
        if let Ok(reference) = reference {
            assert_eq!(value.to_string(), reference.to_string(), "input {text:?}");
        }
        let rendered = value.to_string();
        assert_eq!(rendered.parse::<BigInt>().ok(), Some(value));
    }

    // Must not panic.
    let _ = text.parse::<Rational>();
});
