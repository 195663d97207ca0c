//! Operand parsing for the CLI.

use mtmath_core::{BigInt, MathError, Rational};

const PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Parse an integer operand: optional sign, optional `0x`/`0o`/`0b`
/// prefix, then digits in that radix (decimal without a prefix).
pub fn parse_int(text: &str) -> Result<BigInt, MathError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = PREFIXES
        .iter()
        .find_map(|&(prefix, radix)| body.strip_prefix(prefix).map(|rest| (radix, rest)))
        .unwrap_or((10, body));

    if let Some(sign @ ('+' | '-')) = digits.chars().next() {
        return Err(MathError::InvalidDigit {
            digit: sign,
            position: text.len() - digits.len(),
            radix,
        });
    }
    let value = BigInt::from_str_radix(digits, radix).map_err(|err| match err {
        MathError::InvalidDigit { digit, position, radix } => MathError::InvalidDigit {
            digit,
            position: position + text.len() - digits.len(),
            radix,
        },
        other => other,
    })?;
    Ok(if negative { -value } else { value })
}

/// Parse a rational operand `n` or `n/d`.
pub fn parse_rational(text: &str) -> Result<Rational, MathError> {
    text.parse()
}
