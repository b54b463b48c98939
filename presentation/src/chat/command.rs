//! Slash command parsing for the chat REPL

use std::path::PathBuf;

/// A line typed at the REPL prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text to send
    Message(String),
    New,
    History,
    Load(String),
    Image(PathBuf),
    Delete(String),
    Help,
    Quit,
    /// A slash command that is unknown or missing its argument
    Invalid(String),
}

impl ReplCommand {
    /// Parse a trimmed, non-empty input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return Self::Message(line.to_string());
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match (name, arg.is_empty()) {
            ("/quit" | "/exit" | "/q", _) => Self::Quit,
            ("/help" | "/h" | "/?", _) => Self::Help,
            ("/new", _) => Self::New,
            ("/history" | "/ls", _) => Self::History,
            ("/load", false) => Self::Load(arg.to_string()),
            ("/image", false) => Self::Image(PathBuf::from(arg)),
            ("/delete", false) => Self::Delete(arg.to_string()),
            ("/load" | "/image" | "/delete", true) => {
                Self::Invalid(format!("{} needs an argument", name))
            }
            _ => Self::Invalid(format!("Unknown command: {}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            ReplCommand::parse("  hello there "),
            ReplCommand::Message("hello there".to_string())
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/ls"), ReplCommand::History);
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            ReplCommand::parse("/load 1234"),
            ReplCommand::Load("1234".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/image  ~/pics/cat one.png"),
            ReplCommand::Image(PathBuf::from("~/pics/cat one.png"))
        );
        assert_eq!(
            ReplCommand::parse("/delete abc"),
            ReplCommand::Delete("abc".to_string())
        );
    }

    #[test]
    fn test_missing_argument_is_invalid() {
        assert!(matches!(ReplCommand::parse("/load"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/image   "), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/frobnicate"),
            ReplCommand::Invalid("Unknown command: /frobnicate".to_string())
        );
    }
}
