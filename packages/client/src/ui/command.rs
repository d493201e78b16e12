//! Input line parsing.

use std::path::PathBuf;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// `/quit`
    Quit,
    /// `/cancel`
    Cancel,
    /// `/reply <n>`, with `n` counted from 1 as printed
    Reply(usize),
    /// `/save <file>`, write the conversation as an HTML page
    Save(PathBuf),
    /// `/help`
    Help,
    /// Anything not starting with `/`
    Message(String),
    /// A `/` command that could not be understood
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return Some(InputCommand::Message(trimmed.to_string()));
    };

    if let Some(path) = command.strip_prefix("save")
        && path.starts_with(char::is_whitespace)
    {
        return Some(InputCommand::Save(PathBuf::from(path.trim())));
    }

    let mut parts = command.split_whitespace();
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some("quit"), None, _) => InputCommand::Quit,
        (Some("cancel"), None, _) => InputCommand::Cancel,
        (Some("help"), None, _) => InputCommand::Help,
        (Some("reply"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => InputCommand::Reply(n),
            _ => InputCommand::Unknown(trimmed.to_string()),
        },
        _ => InputCommand::Unknown(trimmed.to_string()),
    };
    Some(parsed)
}
