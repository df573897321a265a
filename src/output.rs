//! Terminal screens and messages.
//!
//! Everything the shell prints outside of command dispatch lives here: the
//! welcome banner, the help and info screens, the shutdown notice, and the
//! closing line. Colors come from the [colored](https://docs.rs/colored/)
//! crate and degrade gracefully on terminals without color support.

use std::fmt::Display;

use colored::Colorize;

/// Width of the horizontal rules around banners and screens.
const RULE_WIDTH: usize = 50;

/// Print the welcome banner shown once at startup.
pub fn print_welcome() {
    let rule = "=".repeat(RULE_WIDTH);

    println!("{}", rule.bright_blue());
    println!("{}", "   Welcome to fman, the CLI file manager!".bold());
    println!("{}", rule.bright_blue());
    println!("Inspect file sizes from an interactive prompt.");
    println!();
}

/// Print the help screen: one line per command.
pub fn print_help() {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{rule}");
    println!("{}", "  HELP - Commands".bold());
    println!("{rule}");
    println!("  {} - Show this help message", "help".cyan());
    println!(
        "  {} - Calculate the size of a file (alias: {})",
        "calc".cyan(),
        "calculate".cyan()
    );
    println!("  {} - Show information about this program", "info".cyan());
    println!("  {} - Exit the file manager", "quit".cyan());
    println!("{rule}");
}

/// Print the program information screen.
pub fn print_info() {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{rule}");
    println!("{}", "  PROGRAM INFORMATION".bold());
    println!("{rule}");
    println!(
        "Program: {} v{}",
        env!("CARGO_PKG_NAME").bright_white(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Features:");
    println!("  - File size reporting in bytes, KB, and MB");
    println!("  - Simple command system with help and info screens");
    println!("  - Graceful shutdown on quit, Ctrl-C, or end of input");
    println!("{rule}");
}

/// Print the notice shown when the prompt is interrupted or input closes.
pub fn print_shutdown_notice() {
    println!("\n{}", "Input closed. Shutting down.".yellow());
}

/// Print the closing line shown on every exit path.
pub fn print_closing() {
    println!("{}", "Thank you for using fman!".green());
}

/// Print a non-fatal error with the standard prefix.
pub fn print_error(err: &impl Display) {
    println!("{} {err}", "Error:".red().bold());
}
