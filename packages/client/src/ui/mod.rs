//! Terminal front-end pieces.

pub mod command;
pub mod formatter;
pub mod prompt;

pub use command::{InputCommand, parse_input};
pub use formatter::MessageFormatter;
pub use prompt::redisplay_prompt;
