//! Chat controller use case.
//!
//! Owns the active [`Session`] and drives the send flow:
//!
//! 1. Append the user turn to the in-memory session
//! 2. Check that a credential is available
//! 3. Await the gateway round trip
//! 4. Append the reply, or a synthetic error message on failure
//! 5. Persist the whole session snapshot
//!
//! Failures never escape `send_message`; they become part of the transcript.

use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationEventKind, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_store::SessionStore;
use chrono::{DateTime, Utc};
use parley_domain::{Credential, ImageAttachment, Message, Session, SessionId};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by the send flow before they are folded into the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("No API key configured. Set one with `parley key set <key>`.")]
    CredentialMissing,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

/// Row of the session history list.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub id: SessionId,
    pub preview_text: String,
    pub last_modified: DateTime<Utc>,
    pub message_count: usize,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            preview_text: session.preview_text().to_string(),
            last_modified: session.last_modified(),
            message_count: session.len(),
        }
    }
}

/// Clears the loading flag when the in-flight request ends or is dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Use case backing the chat screen.
pub struct ChatController {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn ChatGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
    fallback_credential: Option<Credential>,
    session: Session,
    loading: AtomicBool,
}

impl ChatController {
    /// Create a controller with a fresh, unsaved session.
    pub fn new(store: Arc<dyn SessionStore>, gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            store,
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
            fallback_credential: None,
            session: Session::new(),
            loading: AtomicBool::new(false),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Credential used when the store has none (e.g. from an env var).
    pub fn with_fallback_credential(mut self, credential: Option<Credential>) -> Self {
        self.fallback_credential = credential;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Stored credential, falling back to the injected one.
    pub fn credential(&self) -> Option<Credential> {
        self.store
            .load_credential()
            .or_else(|| self.fallback_credential.clone())
    }

    /// Begin a new, unsaved session. It is persisted with its first reply.
    pub fn start_new_chat(&mut self) -> SessionId {
        self.session = Session::new();
        debug!("Started new chat {}", self.session.id());
        self.session.id()
    }

    /// Load a stored session and make it the active one.
    pub fn load_session(&mut self, id: &SessionId) -> Result<(), ChatError> {
        let session = self
            .store
            .load(id)
            .ok_or(ChatError::SessionNotFound(*id))?;
        info!(
            "Loaded session {} ({} messages)",
            session.id(),
            session.len()
        );
        self.store.set_latest(id);
        self.session = session;
        Ok(())
    }

    /// Resume the session the latest pointer refers to.
    ///
    /// Returns `false` (and keeps the current session) if there is none.
    pub fn resume_latest(&mut self) -> bool {
        let Some(id) = self.store.latest() else {
            return false;
        };
        match self.load_session(&id) {
            Ok(()) => true,
            Err(e) => {
                warn!("Latest session pointer is stale: {}", e);
                false
            }
        }
    }

    /// Sessions for the history list, most recent first.
    pub fn history(&self) -> Vec<SessionSummary> {
        self.store
            .load_all()
            .iter()
            .map(SessionSummary::from)
            .collect()
    }

    /// Delete a stored session. Deleting the active one starts a new chat.
    pub fn delete_session(&mut self, id: &SessionId) {
        self.store.delete(id);
        if self.session.id() == *id {
            self.start_new_chat();
        }
    }

    /// Send a user turn and append the reply (or an error message).
    ///
    /// Returns the appended reply, or `None` when there was nothing to send.
    pub async fn send_message(
        &mut self,
        text: impl Into<String>,
        image: Option<ImageAttachment>,
    ) -> Option<Message> {
        let text = text.into();
        if text.trim().is_empty() && image.is_none() {
            return None;
        }

        let user_message = Message::user(text, image.as_ref().map(|i| i.bytes().to_vec()));
        self.record(
            ConversationEventKind::UserMessage,
            json!({
                "text": user_message.text(),
                "image_bytes": image.as_ref().map(|i| i.len()),
            }),
        );
        self.session.push(user_message);

        let result = {
            let _guard = LoadingGuard::start(&self.loading);
            self.generate(image.as_ref()).await
        };

        let reply = match result {
            Ok(text) => {
                info!("Received reply ({} bytes)", text.len());
                self.record(ConversationEventKind::AssistantReply, json!({ "text": text }));
                Message::assistant(text)
            }
            Err(e) => {
                warn!("Reply generation failed: {}", e);
                self.record(
                    ConversationEventKind::GenerationFailed,
                    json!({ "error": e.to_string() }),
                );
                Message::assistant(format!("Error: {}", e))
            }
        };

        self.session.push(reply.clone());
        self.store.save(&self.session);
        Some(reply)
    }

    fn record(&self, kind: ConversationEventKind, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(kind, self.session.id(), payload));
    }

    async fn generate(&self, image: Option<&ImageAttachment>) -> Result<String, ChatError> {
        let credential = self.credential().ok_or(ChatError::CredentialMissing)?;
        debug!(
            "Generating reply for {} messages (image: {})",
            self.session.len(),
            image.is_some()
        );
        let reply = self
            .gateway
            .generate(self.session.messages(), &credential, image)
            .await?;
        Ok(reply)
    }
}
