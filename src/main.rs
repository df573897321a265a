//! # fman
//!
//! An interactive command-line file manager for inspecting file sizes.
//!
//! The binary starts an interactive session on standard input/output. A
//! welcome banner is printed once, then the shell loops over a small set of
//! text commands:
//!
//! - `help` - show the command reference
//! - `calc` (alias `calculate`) - report the size of a file in bytes, KB, and MB
//! - `info` - show program information
//! - `quit` - leave the shell
//!
//! Ctrl-C and end of input shut the session down gracefully; nothing the
//! user types can crash it.
//!
//! ## Usage
//!
//! ```bash
//! fman
//! ```

mod cli;

use std::process::exit;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use fman::config::ShellConfig;
use fman::shell;

/// Entry point for the fman binary.
///
/// This function handles all errors gracefully by calling [`inner_main`]
/// and printing any errors to stderr before exiting with a non-zero status
/// code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Parse the CLI surface and run the interactive shell.
///
/// # Errors
///
/// Returns an error only when the terminal cannot be driven at all (for
/// example when standard input is not a TTY).
fn inner_main() -> Result<()> {
    let _args = Cli::parse();

    shell::run(&ShellConfig::default())
}
