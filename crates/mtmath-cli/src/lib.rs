//! # mtmath-cli
//!
//! CLI output, result presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliResultPresenter, Evaluation, NamedValue, ResultPresenter};
