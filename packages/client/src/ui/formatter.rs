//! Message formatting utilities for terminal display.
//!
//! Every user-supplied field passes through [`terminal_safe`] first, so a
//! peer cannot move the cursor, retitle the window or start a forged line.

use crate::{
    domain::{ReplyReference, UserProfile},
    renderer::{DisplayNode, SELF_LABEL},
};

/// Replace characters that would act on the terminal instead of printing.
///
/// Line breaks and tabs become spaces. Other control characters (C0, DEL,
/// C1 including ESC and BEL) and bidirectional overrides become U+FFFD.
pub fn terminal_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' => {
                char::REPLACEMENT_CHARACTER
            }
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect()
}

/// Message formatter for terminal display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the greeting shown once connected
    pub fn format_welcome(profile: &UserProfile) -> String {
        format!(
            "\nYou are '{}' ({}). Type messages and press Enter to send. /help lists commands.\n",
            terminal_safe(&profile.name),
            profile.color
        )
    }

    /// Format a rendered message
    ///
    /// # Arguments
    ///
    /// * `number` - Position of the message as shown to the user, counted from 1
    /// * `node` - The rendered message
    ///
    /// # Returns
    ///
    /// The message line, preceded by its quote line when it is a reply
    pub fn format_message(number: usize, node: &DisplayNode) -> String {
        let mut output = String::from("\n");
        if let Some(quote) = &node.quote {
            output.push_str(&format!(
                "     ┌ {} → {}: {}\n",
                terminal_safe(&quote.replier),
                terminal_safe(&quote.sender),
                terminal_safe(&quote.text)
            ));
        }
        let label = if node.is_self() {
            SELF_LABEL
        } else {
            node.sender_label.as_str()
        };
        output.push_str(&format!(
            "#{:<3} {}: {}\n",
            number,
            terminal_safe(label),
            terminal_safe(&node.body)
        ));
        output
    }

    /// Format a peer-count notice
    pub fn format_peer_count(connected: u64) -> String {
        format!("\n● {} online\n", connected)
    }

    /// Format the preview shown while composing a reply
    ///
    /// # Arguments
    ///
    /// * `reference` - The message being replied to
    ///
    /// # Returns
    ///
    /// A line naming the replied-to sender and text, with a cancel hint
    pub fn format_reply_preview(reference: &ReplyReference) -> String {
        format!(
            "\nYou replying to {}: {}  (/cancel to stop)\n",
            terminal_safe(&reference.sender),
            terminal_safe(&reference.text)
        )
    }

    pub fn format_reply_cancelled() -> String {
        "\nReply cancelled\n".to_string()
    }

    pub fn format_help() -> String {
        "\nCommands:\n  \
         /reply <n>  reply to message #n\n  \
         /cancel     stop replying\n  \
         /save <file> write the conversation as HTML\n  \
         /help       show this help\n  \
         /quit       leave the chat\n"
            .to_string()
    }

    /// Format a notice for input that could not be acted on
    pub fn format_notice(text: &str) -> String {
        format!("\n! {}\n", terminal_safe(text))
    }
}
