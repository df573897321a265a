//! Command parsing for the interactive shell.
//!
//! User input is normalized (trimmed, case-folded) before matching, so
//! `" HELP "` and `"help"` dispatch identically. Unrecognized input is kept
//! around verbatim (minus surrounding whitespace) so that error messages can
//! name exactly what the user typed.

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the help screen.
    Help,

    /// Report the size of a user-specified file.
    Calc,

    /// Show program information.
    Info,

    /// Leave the shell.
    Quit,

    /// Anything that is not a recognized command. Carries the trimmed
    /// original input so messages can name the offending text.
    Unknown(String),
}

impl Command {
    /// Parse raw user input into a command.
    ///
    /// Surrounding whitespace is trimmed and matching is case-insensitive.
    /// `calc` and `calculate` are aliases for the same command; `calc` is
    /// the canonical short form shown in menus.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fman::command::Command;
    /// assert_eq!(Command::parse("  Help "), Command::Help);
    /// assert_eq!(Command::parse("calculate"), Command::Calc);
    /// assert_eq!(Command::parse("ls"), Command::Unknown("ls".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        match trimmed.to_lowercase().as_str() {
            "help" => Self::Help,
            "calc" | "calculate" => Self::Calc,
            "info" => Self::Info,
            "quit" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("calc"), Command::Calc);
        assert_eq!(Command::parse("info"), Command::Info);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_calculate_alias() {
        assert_eq!(Command::parse("calculate"), Command::Calc);
        assert_eq!(Command::parse("CALCULATE"), Command::Calc);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("Quit"), Command::Quit);
        assert_eq!(Command::parse("iNfO"), Command::Info);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Command::parse("  help  "), Command::Help);
        assert_eq!(Command::parse("\tquit\n"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown_preserves_original_input() {
        assert_eq!(
            Command::parse("  FroB  "),
            Command::Unknown("FroB".to_string())
        );
        assert_eq!(Command::parse("ls -la"), Command::Unknown("ls -la".to_string()));
    }

    #[test]
    fn test_parse_empty_input_is_unknown() {
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(Command::parse("   "), Command::Unknown(String::new()));
    }

    #[test]
    fn test_parse_near_misses_are_unknown() {
        assert_eq!(Command::parse("halp"), Command::Unknown("halp".to_string()));
        assert_eq!(Command::parse("quit!"), Command::Unknown("quit!".to_string()));
        assert_eq!(
            Command::parse("calc size"),
            Command::Unknown("calc size".to_string())
        );
    }
}
