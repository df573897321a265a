//! Shell configuration with named fields and documented defaults.
//!
//! The interactive shell takes its farewell behavior and command listing
//! from an explicit [`ShellConfig`] value rather than loose parameters.
//! The configuration is in-memory only; it is never read from a file.

/// Configuration for the interactive shell.
///
/// Every field has a documented default provided by the [`Default`]
/// implementation; the binary runs with `ShellConfig::default()`.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Message printed when the user quits.
    ///
    /// Default: `"Goodbye!"`.
    pub goodbye_message: String,

    /// Whether to print the goodbye message on `quit`.
    ///
    /// Default: `true`.
    pub show_goodbye: bool,

    /// Prefix for messages about unrecognized commands.
    ///
    /// Default: `"Invalid choice:"`.
    pub invalid_choice_prefix: String,

    /// The command list shown in the prompt help and in invalid-choice
    /// messages.
    ///
    /// Default: `"help / calc / info / quit"`.
    pub valid_commands: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            goodbye_message: "Goodbye!".to_string(),
            show_goodbye: true,
            invalid_choice_prefix: "Invalid choice:".to_string(),
            valid_commands: "help / calc / info / quit".to_string(),
        }
    }
}

impl ShellConfig {
    /// Build the message shown for an unrecognized command.
    ///
    /// The message quotes the offending input and lists the valid commands.
    #[must_use]
    pub fn invalid_choice_message(&self, input: &str) -> String {
        format!(
            "{} '{input}'\nPlease enter one of: {}",
            self.invalid_choice_prefix, self.valid_commands
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ShellConfig::default();

        assert_eq!(config.goodbye_message, "Goodbye!");
        assert!(config.show_goodbye);
        assert_eq!(config.invalid_choice_prefix, "Invalid choice:");
        assert_eq!(config.valid_commands, "help / calc / info / quit");
    }

    #[test]
    fn test_invalid_choice_message_names_the_input() {
        let config = ShellConfig::default();
        let message = config.invalid_choice_message("frobnicate");

        assert!(message.contains("'frobnicate'"));
        assert!(message.starts_with("Invalid choice:"));
        assert!(message.contains("help / calc / info / quit"));
    }

    #[test]
    fn test_invalid_choice_message_respects_custom_fields() {
        let config = ShellConfig {
            invalid_choice_prefix: "Unknown command:".to_string(),
            valid_commands: "a / b".to_string(),
            ..ShellConfig::default()
        };

        let message = config.invalid_choice_message("x");
        assert!(message.starts_with("Unknown command: 'x'"));
        assert!(message.ends_with("Please enter one of: a / b"));
    }
}
