//! Session store port
//!
//! Defines the durable read/write contract for chat sessions, the
//! latest-session pointer and the single API credential.

use parley_domain::{Credential, Session, SessionId};

/// Durable storage of chat sessions and the API credential.
///
/// Every mutation is a read-modify-write of the whole collection: there is
/// no incremental update and no protection against concurrent writers.
/// Storage failures never surface to the caller; adapters log them and
/// degrade to "treat as empty" on read or a no-op on write.
pub trait SessionStore: Send + Sync {
    /// All stored sessions, most recently modified first.
    fn load_all(&self) -> Vec<Session>;

    /// Replace (or insert) the session with the same id and mark it latest.
    fn save(&self, session: &Session);

    /// Find a session by id.
    fn load(&self, id: &SessionId) -> Option<Session> {
        self.load_all().into_iter().find(|s| s.id() == *id)
    }

    /// Remove a session; clears the latest pointer if it pointed at it.
    fn delete(&self, id: &SessionId);

    /// Remove every session and the latest pointer.
    fn delete_all(&self);

    fn set_latest(&self, id: &SessionId);

    fn latest(&self) -> Option<SessionId>;

    fn save_credential(&self, credential: &Credential);

    fn load_credential(&self) -> Option<Credential>;

    fn delete_credential(&self);

    /// Remove sessions, the latest pointer and the credential.
    fn delete_all_data(&self) {
        self.delete_all();
        self.delete_credential();
    }
}
