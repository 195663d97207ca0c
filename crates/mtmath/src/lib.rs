//! mtmath library: application logic for the `mtmath` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod operand;
pub mod probe;
pub mod version;
