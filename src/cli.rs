//! Command-line interface definition.
//!
//! The shell is fully interactive, so the CLI surface carries only the
//! standard metadata handled by [clap](https://docs.rs/clap/): `--help`
//! and `--version`. There are no behavior-changing flags; everything
//! happens inside the session.

use clap::Parser;

/// Command-line arguments for the `fman` binary.
#[derive(Parser)]
#[command(name = "fman")]
#[command(about = "An interactive CLI file manager for inspecting file sizes")]
#[command(version)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_no_arguments() {
        assert!(Cli::try_parse_from(["fman"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["fman", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["fman", "extra"]).is_err());
    }
}
