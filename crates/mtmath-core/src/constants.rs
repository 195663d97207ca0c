//! Constants for arithmetic thresholds, flags and exit codes.

/// Default operand size (in bytes) above which multiplication runs in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Smallest row chunk (in bytes) handed to a parallel multiplication task.
pub const MIN_PARALLEL_CHUNK: usize = 256;

/// Smallest radix accepted by parsing and formatting.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by parsing and formatting.
pub const MAX_RADIX: u32 = 36;

/// Default radix for parsing and formatting.
pub const DEFAULT_RADIX: u32 = 10;

/// Bit flags stored alongside a `BigInt` magnitude.
///
/// These values are part of the C ABI (`MtMath_BigInt::flags`).
pub mod flags {
    /// The value is negative.
    pub const NEGATIVE: u8 = 0x01;
    /// The value is not a number.
    pub const INVALID: u8 = 0x02;
}

/// Process exit codes used by the `mtmath` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Division by zero or an operation on NaN.
    pub const ERROR_ARITHMETIC: i32 = 3;
    /// An operand or option could not be parsed.
    pub const ERROR_INPUT: i32 = 4;
    /// The native library could not be loaded or is missing a symbol.
    pub const ERROR_LIBRARY: i32 = 5;
}
