#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt as RefInt, Sign};

use mtmath_core::{BigInt, ByteArray};

fn split(data: &[u8]) -> Option<(BigInt, RefInt)> {
    let (&header, bytes) = data.split_first()?;
    let negative = header & 1 == 1;
    let ours = BigInt::from_parts(negative, ByteArray::from(bytes));
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Some((ours, RefInt::from_bytes_le(sign, bytes)))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the split point between the two operands.
    let cut = 1 + usize::from(data[0]) % (data.len() - 1);
    let (Some((x, rx)), Some((y, ry))) = (split(&data[1..cut]), split(&data[cut..])) else {
        return;
    };

    assert_eq!((&x + &y).to_string(), (&rx + &ry).to_string());
    assert_eq!((&x - &y).to_string(), (&rx - &ry).to_string());
    assert_eq!((&x * &y).to_string(), (&rx * &ry).to_string());

    let (q, r) = x.div_rem(&y);
    if y.is_zero() {
        assert!(q.is_nan() && r.is_nan());
    } else {
        assert_eq!(q.to_string(), (&rx / &ry).to_string());
        assert_eq!(r.to_string(), (&rx % &ry).to_string());
    }
});
