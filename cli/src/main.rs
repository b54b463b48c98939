//! CLI entrypoint for parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use parley_application::{ChatController, ConversationLogger, SessionStore};
use parley_domain::{Credential, SessionId};
use parley_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStore, JsonlConversationLogger, KvSessionStore,
    OpenAiChatGateway, Severity,
};
use parley_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, KeyAction, ReplConfig, ReplySpinner, load_image,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?
    };
    check_config(&config)?;

    info!("Starting parley (model: {})", config.api.model);

    // === Dependency Injection ===
    let store_path = config
        .storage
        .resolved_path()
        .context("Could not determine a data directory; set storage.path")?;
    let kv = JsonFileStore::open(&store_path)
        .with_context(|| format!("Could not open store {}", store_path.display()))?;
    let store: Arc<dyn SessionStore> = Arc::new(KvSessionStore::new(kv));

    let command = cli.command.clone().unwrap_or(Command::Chat {
        session: None,
        new: false,
    });

    match command {
        Command::Chat { session, new } => {
            let mut controller = build_controller(&config, store);
            if let Some(raw) = session {
                controller.load_session(&parse_id(&raw)?)?;
            } else if !new {
                controller.resume_latest();
            }

            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_path: config.repl.history_path(),
            };
            ChatRepl::new(controller)
                .with_config(repl_config)
                .run()
                .await?;
        }
        Command::Send {
            text,
            image,
            session,
        } => {
            let mut controller = build_controller(&config, store);
            if let Some(raw) = session {
                controller.load_session(&parse_id(&raw)?)?;
            }
            let image = match image {
                Some(path) => Some(
                    load_image(&path)
                        .with_context(|| format!("Could not read image {}", path.display()))?,
                ),
                None => None,
            };

            let spinner =
                ReplySpinner::start("Thinking...", config.repl.show_progress && !cli.quiet);
            let reply = controller.send_message(text, image).await;
            spinner.finish();

            let Some(reply) = reply else {
                bail!("Nothing to send: provide message text or an image");
            };
            println!("{}", reply.text());
        }
        Command::History => {
            let controller = build_controller(&config, store);
            print!("{}", ConsoleFormatter::format_history(&controller.history()));
        }
        Command::Show { id } => {
            let id = parse_id(&id)?;
            let Some(session) = store.load(&id) else {
                bail!("Session not found: {}", id);
            };
            println!("{}", ConsoleFormatter::format_transcript(&session));
        }
        Command::Delete { id } => {
            let id = parse_id(&id)?;
            if store.load(&id).is_none() {
                bail!("Session not found: {}", id);
            }
            store.delete(&id);
            println!("Deleted {}", id);
        }
        Command::Clear => {
            store.delete_all();
            println!("Deleted all sessions.");
        }
        Command::Reset => {
            store.delete_all_data();
            println!("Deleted all sessions and the stored API key.");
        }
        Command::Key { action } => match action {
            KeyAction::Set { value } => {
                let credential = Credential::new(value)?;
                store.save_credential(&credential);
                println!("Stored API key {}", credential.masked());
            }
            KeyAction::Show => match store.load_credential() {
                Some(credential) => println!("{}", credential.masked()),
                None => println!("{}", "No API key stored.".dimmed()),
            },
            KeyAction::Delete => {
                store.delete_credential();
                println!("Removed stored API key.");
            }
        },
    }

    Ok(())
}

fn build_controller(config: &FileConfig, store: Arc<dyn SessionStore>) -> ChatController {
    let gateway = OpenAiChatGateway::new()
        .with_base_url(config.api.base_url.clone())
        .with_model(config.api.model.clone())
        .with_max_image_bytes(config.api.max_image_bytes);

    let fallback = config
        .api
        .api_key_from_env()
        .and_then(|raw| Credential::new(raw).ok());

    let mut controller =
        ChatController::new(store, Arc::new(gateway)).with_fallback_credential(fallback);

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Logging conversation to {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        controller = controller.with_conversation_logger(logger);
    }

    controller
}

fn check_config(config: &FileConfig) -> Result<()> {
    let mut has_error = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                eprintln!("{} {}", "config error:".red().bold(), issue.message);
                has_error = true;
            }
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if has_error {
        bail!("Configuration is invalid");
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<SessionId> {
    raw.trim()
        .parse()
        .with_context(|| format!("'{}' is not a session id", raw))
}
