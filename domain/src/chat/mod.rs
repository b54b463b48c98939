//! Chat domain.
//!
//! - [`ids::SessionId`] / [`ids::MessageId`]: opaque UUID identifiers
//! - [`message::Message`]: one turn of a transcript
//! - [`session::Session`]: an ordered transcript
//! - [`credential::Credential`]: the bearer token for the completion API
//! - [`attachment::ImageAttachment`]: raw bytes of a user-supplied image

pub mod attachment;
pub mod credential;
pub mod ids;
pub mod message;
pub mod session;
