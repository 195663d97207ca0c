//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use mtmath_core::constants::DEFAULT_RADIX;
use mtmath_core::Options;

/// mtmath: arbitrary-precision integer and rational calculator.
#[derive(Parser, Debug)]
#[command(name = "mtmath", version, about, arg_required_else_help = true)]
pub struct AppConfig {
    /// Verbose output (debug logging, timings, digit counts).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Write results to a file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Radix for rendering integer results.
    #[arg(
        long,
        global = true,
        env = "MTMATH_RADIX",
        default_value_t = DEFAULT_RADIX,
        value_parser = clap::value_parser!(u32).range(2..=36)
    )]
    pub radix: u32,

    /// Operand size in bytes above which multiplication runs in parallel (0 = default).
    #[arg(long, global = true, default_value = "0")]
    pub threshold: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Integer arithmetic. Operands accept 0x, 0o and 0b prefixes.
    Int {
        #[arg(value_enum)]
        op: IntOp,
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Rational arithmetic. Operands are `n` or `n/d`.
    Rational {
        #[arg(value_enum)]
        op: RationalOp,
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Re-render an integer in another radix.
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target radix.
        #[arg(long, value_parser = clap::value_parser!(u32).range(2..=36))]
        to: u32,
    },

    /// Load the native library, call `foo` and `init_big_int`, print the results.
    Probe {
        /// Path to the native library (defaults to the platform name of `mtmath_c`).
        #[arg(long, env = "MTMATH_LIBRARY")]
        library: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Divrem,
    Cmp,
    Pow,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalOp {
    Add,
    Sub,
    Mul,
    Div,
    Cmp,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Arithmetic options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            parallel_threshold: self.threshold,
            output_radix: self.radix,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn int_command_with_negative_operand() {
        let config = parse(&["mtmath", "int", "sub", "-5", "7"]);
        match config.command {
            Some(Command::Int { op, left, right }) => {
                assert_eq!(op, IntOp::Sub);
                assert_eq!(left, "-5");
                assert_eq!(right, "7");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["mtmath", "int", "add", "25", "32", "-q", "--radix", "16"]);
        assert!(config.quiet);
        assert_eq!(config.radix, 16);
    }

    #[test]
    fn radix_out_of_range_is_rejected() {
        assert!(AppConfig::try_parse_from(["mtmath", "--radix", "37", "convert", "1", "--to", "2"]).is_err());
        assert!(AppConfig::try_parse_from(["mtmath", "convert", "1", "--to", "1"]).is_err());
    }

    #[test]
    fn zero_threshold_normalises() {
        let config = parse(&["mtmath", "int", "mul", "2", "3"]);
        assert_eq!(config.options(), Options::default());
    }

    #[test]
    fn probe_library_flag() {
        let config = parse(&["mtmath", "probe", "--library", "/tmp/libx.so"]);
        match config.command {
            Some(Command::Probe { library }) => {
                assert_eq!(library, Some(PathBuf::from("/tmp/libx.so")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
