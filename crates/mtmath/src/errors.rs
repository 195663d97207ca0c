//! Error handling and exit codes.

use mtmath_core::constants::exit_codes;
use mtmath_core::MathError;

use crate::probe::ProbeError;

/// Exit code for a math error.
#[must_use]
pub fn math_exit_code(err: &MathError) -> i32 {
    match err {
        MathError::DivisionByZero | MathError::NotANumber => exit_codes::ERROR_ARITHMETIC,
        MathError::Empty
        | MathError::InvalidDigit { .. }
        | MathError::UnsupportedRadix(_)
        | MathError::Overflow(_)
        | MathError::InvalidRational(_) => exit_codes::ERROR_INPUT,
    }
}

/// Map an application error to a process exit code, looking through any
/// context wrapped around it.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(math) = cause.downcast_ref::<MathError>() {
            return math_exit_code(math);
        }
        if cause.downcast_ref::<ProbeError>().is_some() {
            return exit_codes::ERROR_LIBRARY;
        }
    }
    exit_codes::ERROR_GENERIC
}
