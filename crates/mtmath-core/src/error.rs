//! Error type for parsing and checked arithmetic.

/// Error type for `mtmath` operations.
///
/// The operator forms (`+`, `/`, ...) never fail; they produce NaN instead.
/// Parsers and the `checked_*` methods report failures through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The input contained no digits.
    #[error("cannot parse a number from an empty string")]
    Empty,

    /// The input contained a character that is not a digit in the radix.
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    /// The radix is outside `2..=36`.
    #[error("unsupported radix {0}; expected 2..=36")]
    UnsupportedRadix(u32),

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operand is NaN.
    #[error("operand is not a number")]
    NotANumber,

    /// The value does not fit in the requested primitive type.
    #[error("value does not fit in {0}")]
    Overflow(&'static str),

    /// A rational literal is malformed.
    #[error("invalid rational {0:?}; expected `n` or `n/d`")]
    InvalidRational(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InvalidDigit {
            digit: 'z',
            position: 3,
            radix: 10,
        };
        assert_eq!(
            err.to_string(),
            "invalid digit 'z' at position 3 for radix 10"
        );
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::UnsupportedRadix(40).to_string(),
            "unsupported radix 40; expected 2..=36"
        );
    }
}
