//! Console output formatter for chat transcripts and session lists

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use parley_application::SessionSummary;
use parley_domain::{Message, Session};

const PREVIEW_WIDTH: usize = 48;

/// Formats chat data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single turn with its author label.
    pub fn format_message(message: &Message) -> String {
        let label = if message.is_from_user() {
            "You".green().bold()
        } else if message.text().starts_with("Error:") {
            "Assistant".red().bold()
        } else {
            "Assistant".cyan().bold()
        };

        let mut output = format!(
            "{} {}\n",
            label,
            Self::timestamp(message.timestamp()).dimmed()
        );
        if let Some(image) = message.image() {
            let note = format!("[image, {} bytes]", image.len());
            output.push_str(&format!("  {}\n", note.dimmed()));
        }
        if !message.text().is_empty() {
            output.push_str(&Self::indent(message.text(), "  "));
            output.push('\n');
        }
        output
    }

    /// Format a whole session, oldest turn first.
    pub fn format_transcript(session: &Session) -> String {
        let mut output = Self::header(&format!("Session {}", session.id()));
        output.push('\n');

        if session.is_empty() {
            output.push_str(&format!("\n{}\n", "(no messages yet)".dimmed()));
        }
        for message in session.messages() {
            output.push('\n');
            output.push_str(&Self::format_message(message));
        }
        output
    }

    /// Format the session list as one row per session.
    pub fn format_history(sessions: &[SessionSummary]) -> String {
        if sessions.is_empty() {
            return format!("{}\n", "No saved sessions.".dimmed());
        }

        let mut output = String::new();
        for summary in sessions {
            output.push_str(&format!(
                "{}  {:<width$}  {}  {}\n",
                summary.id.to_string().yellow(),
                Self::truncate(&summary.preview_text, PREVIEW_WIDTH),
                Self::timestamp(summary.last_modified).dimmed(),
                format!("({} messages)", summary.message_count).dimmed(),
                width = PREVIEW_WIDTH,
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn timestamp(at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }

    /// Shorten to `max` characters, ending in `...` when cut.
    pub fn truncate(text: &str, max: usize) -> String {
        let single_line = text.replace('\n', " ");
        if single_line.chars().count() <= max {
            return single_line;
        }
        let kept: String = single_line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(ConsoleFormatter::truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text_and_newlines() {
        assert_eq!(ConsoleFormatter::truncate("abc\ndefghij", 8), "abc d...");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }

    #[test]
    fn test_message_mentions_image() {
        let message = Message::user("look at this", Some(vec![0; 12]));
        let output = ConsoleFormatter::format_message(&message);
        assert!(output.contains("You"));
        assert!(output.contains("[image, 12 bytes]"));
        assert!(output.contains("look at this"));
    }

    #[test]
    fn test_transcript_lists_turns_in_order() {
        let mut session = Session::new();
        session.push(Message::user("question", None));
        session.push(Message::assistant("answer"));

        let output = ConsoleFormatter::format_transcript(&session);
        let q = output.find("question").unwrap();
        let a = output.find("answer").unwrap();
        assert!(q < a);
        assert!(output.contains(&session.id().to_string()));
    }

    #[test]
    fn test_empty_history() {
        assert!(ConsoleFormatter::format_history(&[]).contains("No saved sessions"));
    }

    #[test]
    fn test_history_row() {
        let mut session = Session::new();
        session.push(Message::user("first question", None));
        session.push(Message::assistant("reply"));
        let output = ConsoleFormatter::format_history(&[SessionSummary::from(&session)]);
        assert!(output.contains(&session.id().to_string()));
        assert!(output.contains("first question"));
        assert!(output.contains("(2 messages)"));
    }
}
