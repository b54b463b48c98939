//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface.

mod attachment;
mod command;
mod repl;

pub use attachment::load_image;
pub use command::ReplCommand;
pub use repl::ChatRepl;
