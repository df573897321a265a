//! The interactive command loop.
//!
//! [`run`] prompts for commands until the user quits or the prompt closes.
//! Every command failure is printed and the loop continues; Ctrl-C and end
//! of input are converted into a graceful shutdown at the loop boundary
//! rather than propagated as errors. The only error [`run`] can return is
//! a terminal that cannot be driven at all (for example, no TTY).

use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, Text};

use crate::command::Command;
use crate::config::ShellConfig;
use crate::output;
use crate::report::SizeReport;

/// The outcome of one interactive prompt read.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptEvent {
    /// The user submitted a line of input.
    Line(String),

    /// The user canceled the prompt (Esc); nothing to dispatch.
    Canceled,

    /// The prompt cannot produce further input (Ctrl-C, end of input, or
    /// a broken stream); the shell should shut down gracefully.
    Closed,
}

/// Run the interactive shell until the user quits or input closes.
///
/// Prints the welcome banner, then loops: prompt, parse, dispatch. The
/// run-flag is owned by this loop and cleared either by the `quit` command
/// or by a closed prompt. The closing line is printed on every exit path.
///
/// # Errors
///
/// Returns an error only when the terminal cannot be driven at all (for
/// example when standard input is not a TTY). Nothing the user types can
/// produce an error.
pub fn run(config: &ShellConfig) -> Result<()> {
    output::print_welcome();

    let mut running = true;
    while running {
        match read_command(config)? {
            PromptEvent::Line(line) => {
                running = dispatch(&Command::parse(&line), config)?;
            }
            PromptEvent::Canceled => {}
            PromptEvent::Closed => {
                output::print_shutdown_notice();
                running = false;
            }
        }
    }

    output::print_closing();
    Ok(())
}

/// Dispatch a parsed command and return the updated run-flag.
///
/// `true` keeps the loop going; `false` stops it. Only `quit` and a closed
/// prompt inside the `calc` handler stop the loop.
fn dispatch(command: &Command, config: &ShellConfig) -> Result<bool> {
    match command {
        Command::Help => {
            output::print_help();
            Ok(true)
        }
        Command::Calc => calculate_file_size(),
        Command::Info => {
            output::print_info();
            Ok(true)
        }
        Command::Quit => {
            if config.show_goodbye {
                println!("\n{}", config.goodbye_message.green());
            }
            Ok(false)
        }
        Command::Unknown(input) => {
            println!("\n{}", config.invalid_choice_message(input).yellow());
            Ok(true)
        }
    }
}

/// Prompt for a path and report the file's size.
///
/// Measurement failures are printed and the shell keeps running. Esc
/// cancels the calculation; a closed prompt stops the loop, same as at the
/// command prompt.
fn calculate_file_size() -> Result<bool> {
    let prompt = Text::new("Enter the filename (with path if needed):");

    match classify(prompt.prompt())? {
        PromptEvent::Line(path) => {
            match SizeReport::measure(&path) {
                Ok(report) => println!("\n{}", report.render()),
                Err(err) => output::print_error(&err),
            }
            Ok(true)
        }
        PromptEvent::Canceled => Ok(true),
        PromptEvent::Closed => {
            output::print_shutdown_notice();
            Ok(false)
        }
    }
}

/// Prompt for the next command.
fn read_command(config: &ShellConfig) -> Result<PromptEvent> {
    let prompt = Text::new("Enter your choice:").with_help_message(&config.valid_commands);

    classify(prompt.prompt())
}

/// Map a prompt result onto a [`PromptEvent`].
///
/// Esc is a cancellation, Ctrl-C and stream failures close the prompt, and
/// everything else (no TTY, misconfiguration) is a real error.
fn classify(result: Result<String, InquireError>) -> Result<PromptEvent> {
    match result {
        Ok(line) => Ok(PromptEvent::Line(line)),
        Err(InquireError::OperationCanceled) => Ok(PromptEvent::Canceled),
        Err(InquireError::OperationInterrupted | InquireError::IO(_)) => Ok(PromptEvent::Closed),
        Err(err) => Err(err.into()),
    }
}
