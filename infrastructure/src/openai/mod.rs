//! OpenAI chat completions adapter.
//!
//! - [`gateway::OpenAiChatGateway`]: request assembly, transport and response classification
//! - [`vision`]: image re-encoding and data URLs
//! - [`types`]: request/response wire types

pub mod gateway;
pub mod types;
pub mod vision;

pub use gateway::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiChatGateway, parse_completion};
pub use vision::{DEFAULT_MAX_IMAGE_BYTES, EncodedImage, ImageMime, prepare_image};
