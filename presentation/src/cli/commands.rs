//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(author, version, about = "Terminal chat client for OpenAI-compatible models")]
#[command(long_about = r#"
Parley is a terminal chat client for OpenAI-compatible chat completion APIs.

Sessions are stored locally and resumed automatically. Messages can carry an
image, which is re-encoded and sent inline.

Configuration files are loaded from (in priority order):
1. PARLEY_* environment variables (e.g. PARLEY_API__MODEL=gpt-4.1)
2. --config <path>     Explicit config file
3. ./parley.toml       Project-level config
4. ~/.config/parley/config.toml   Global config

Example:
  parley key set sk-...
  parley chat
  parley send "What is in this picture?" --image photo.jpg
  parley history
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start an interactive chat (the default)
    Chat {
        /// Open this session instead of the latest one
        #[arg(short, long, value_name = "ID", conflicts_with = "new")]
        session: Option<String>,

        /// Start a fresh session
        #[arg(short, long)]
        new: bool,
    },

    /// Send a single message and print the reply
    Send {
        /// Message text
        text: String,

        /// Image to attach
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Continue this session instead of starting a new one
        #[arg(short, long, value_name = "ID")]
        session: Option<String>,
    },

    /// List stored sessions, most recent first
    History,

    /// Print the transcript of a session
    Show {
        /// Session id
        id: String,
    },

    /// Delete a stored session
    Delete {
        /// Session id
        id: String,
    },

    /// Delete every stored session (the API key is kept)
    Clear,

    /// Delete every stored session and the API key
    Reset,

    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Store an API key
    Set {
        /// The key value
        value: String,
    },
    /// Show the stored key, masked
    Show,
    /// Remove the stored key
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["parley"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_send_with_image() {
        let cli = Cli::try_parse_from(["parley", "send", "hello", "--image", "cat.png"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Send {
                text: "hello".to_string(),
                image: Some(PathBuf::from("cat.png")),
                session: None,
            })
        );
    }

    #[test]
    fn test_chat_session_conflicts_with_new() {
        assert!(Cli::try_parse_from(["parley", "chat", "--new", "--session", "abc"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["parley", "history", "-vv", "--no-config"]).unwrap();
        assert_eq!(cli.command, Some(Command::History));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
    }

    #[test]
    fn test_key_set() {
        let cli = Cli::try_parse_from(["parley", "key", "set", "sk-abc"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Key {
                action: KeyAction::Set {
                    value: "sk-abc".to_string()
                }
            })
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
