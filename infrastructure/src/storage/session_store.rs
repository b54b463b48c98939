//! [`SessionStore`] adapter over a [`KeyValueStore`].
//!
//! Layout:
//!
//! | key                 | value                              |
//! |---------------------|------------------------------------|
//! | `chat_sessions`     | JSON array of every stored session |
//! | `latest_session_id` | id of the most recently saved one  |
//! | `api_key`           | the credential string              |
//!
//! Encoding, decoding and write failures are logged and swallowed.

use super::key_value::KeyValueStore;
use parley_application::SessionStore;
use parley_domain::{Credential, Session, SessionId};
use std::cmp::Reverse;
use tracing::{debug, warn};

pub const SESSIONS_KEY: &str = "chat_sessions";
pub const LATEST_SESSION_KEY: &str = "latest_session_id";
pub const CREDENTIAL_KEY: &str = "api_key";

pub struct KvSessionStore<K> {
    kv: K,
}

impl<K: KeyValueStore> KvSessionStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    fn read_sessions(&self) -> Vec<Session> {
        let Some(raw) = self.kv.get(SESSIONS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!("Could not decode stored sessions, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Returns whether the collection reached the backend.
    fn write_sessions(&self, sessions: &[Session]) -> bool {
        let encoded = match serde_json::to_string(sessions) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode sessions: {}", e);
                return false;
            }
        };
        match self.kv.set(SESSIONS_KEY, &encoded) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not write sessions: {}", e);
                false
            }
        }
    }

    fn remove_key(&self, key: &str) {
        if let Err(e) = self.kv.remove(key) {
            warn!("Could not remove {}: {}", key, e);
        }
    }
}

impl<K: KeyValueStore> SessionStore for KvSessionStore<K> {
    fn load_all(&self) -> Vec<Session> {
        let mut sessions = self.read_sessions();
        sessions.sort_by_key(|s| Reverse(s.last_modified()));
        sessions
    }

    fn save(&self, session: &Session) {
        let mut sessions = self.read_sessions();
        sessions.retain(|s| s.id() != session.id());
        sessions.push(session.clone());
        if !self.write_sessions(&sessions) {
            return;
        }
        self.set_latest(&session.id());
        debug!(
            "Saved session {} ({} stored)",
            session.id(),
            sessions.len()
        );
    }

    fn delete(&self, id: &SessionId) {
        let mut sessions = self.read_sessions();
        sessions.retain(|s| s.id() != *id);
        self.write_sessions(&sessions);

        if self.latest() == Some(*id) {
            self.remove_key(LATEST_SESSION_KEY);
        }
    }

    fn delete_all(&self) {
        self.remove_key(SESSIONS_KEY);
        self.remove_key(LATEST_SESSION_KEY);
    }

    fn set_latest(&self, id: &SessionId) {
        if let Err(e) = self.kv.set(LATEST_SESSION_KEY, &id.to_string()) {
            warn!("Could not write latest session id: {}", e);
        }
    }

    fn latest(&self) -> Option<SessionId> {
        let raw = self.kv.get(LATEST_SESSION_KEY)?;
        match raw.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Ignoring stored latest session id: {}", e);
                None
            }
        }
    }

    fn save_credential(&self, credential: &Credential) {
        if let Err(e) = self.kv.set(CREDENTIAL_KEY, credential.expose()) {
            warn!("Could not write credential: {}", e);
        }
    }

    fn load_credential(&self) -> Option<Credential> {
        self.kv
            .get(CREDENTIAL_KEY)
            .and_then(|raw| Credential::new(raw).ok())
    }

    fn delete_credential(&self) {
        self.remove_key(CREDENTIAL_KEY);
    }
}
