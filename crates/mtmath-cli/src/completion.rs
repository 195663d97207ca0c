//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Binary name completions are generated for.
pub const BIN_NAME: &str = "mtmath";

/// Write a completion script for `shell` to `out`.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}
