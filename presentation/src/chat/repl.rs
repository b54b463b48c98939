//! REPL (Read-Eval-Print Loop) for interactive chat

use super::attachment::load_image;
use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ReplySpinner;
use colored::Colorize;
use parley_application::ChatController;
use parley_domain::{ImageAttachment, SessionId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatController,
    config: ReplConfig,
    pending_image: Option<ImageAttachment>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
            pending_image: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = if self.pending_image.is_some() {
                "[img] >>> "
            } else {
                ">>> "
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if self.dispatch(ReplCommand::parse(line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one parsed line. Returns true if the REPL should exit.
    async fn dispatch(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::New => {
                self.pending_image = None;
                let id = self.controller.start_new_chat();
                println!("{} {}", "Started new chat".green(), id);
            }
            ReplCommand::History => {
                let history = self.controller.history();
                print!("{}", ConsoleFormatter::format_history(&history));
            }
            ReplCommand::Load(raw) => match raw.parse::<SessionId>() {
                Ok(id) => match self.controller.load_session(&id) {
                    Ok(()) => {
                        self.pending_image = None;
                        print!(
                            "{}",
                            ConsoleFormatter::format_transcript(self.controller.session())
                        );
                    }
                    Err(e) => eprintln!("{}", e.to_string().red()),
                },
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            ReplCommand::Delete(raw) => match raw.parse::<SessionId>() {
                Ok(id) => {
                    let was_active = self.controller.session().id() == id;
                    self.controller.delete_session(&id);
                    println!("Deleted {}", id);
                    if was_active {
                        println!(
                            "{} {}",
                            "Started new chat".green(),
                            self.controller.session().id()
                        );
                    }
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            ReplCommand::Image(path) => match load_image(&path) {
                Ok(image) => {
                    println!(
                        "Attached {} ({} bytes) to the next message",
                        path.display(),
                        image.len()
                    );
                    self.pending_image = Some(image);
                }
                Err(e) => eprintln!("{} {}: {}", "Could not read".red(), path.display(), e),
            },
            ReplCommand::Message(text) => self.send(text).await,
            ReplCommand::Invalid(reason) => {
                println!("{}", reason);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn send(&mut self, text: String) {
        let image = self.pending_image.take();
        debug!("Sending message (image: {})", image.is_some());

        let spinner = ReplySpinner::start("Thinking...", self.config.show_progress);
        let reply = self.controller.send_message(text, image).await;
        spinner.finish();

        if let Some(reply) = reply {
            println!();
            print!("{}", ConsoleFormatter::format_message(&reply));
            println!();
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                Parley - Chat                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();

        let session = self.controller.session();
        if session.is_empty() {
            println!("New chat {}", session.id().to_string().dimmed());
        } else {
            print!("{}", ConsoleFormatter::format_transcript(session));
        }
        if self.controller.credential().is_none() {
            println!(
                "{}",
                "No API key configured. Set one with `parley key set <key>`.".yellow()
            );
        }
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /new              - Start a new chat");
        println!("  /history, /ls     - List saved sessions");
        println!("  /load <id>        - Open a saved session");
        println!("  /delete <id>      - Delete a saved session");
        println!("  /image <path>     - Attach an image to the next message");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }
}
