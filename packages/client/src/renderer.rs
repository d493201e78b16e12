//! Message rendering.
//!
//! [`render`] turns one received or sent message into a [`DisplayNode`]. A
//! node keeps the original text for display and produces escaped markup for
//! hosts that show HTML. The markup is built with maud, and every
//! user-supplied string is spliced through [`UserText`].

use maud::{DOCTYPE, Markup, Render, html};

use crate::domain::ReplyReference;

/// Label shown for the local user in reply quotes
pub const SELF_LABEL: &str = "You";

/// Quote color used when the replied-to message carried none
pub const DEFAULT_QUOTE_COLOR: &str = "gray";

/// User-supplied text spliced into markup.
///
/// maud escapes `&`, `<`, `>` and `"`; apostrophes are escaped as well.
pub struct UserText<'a>(pub &'a str);

impl Render for UserText<'_> {
    fn render_to(&self, buffer: &mut String) {
        for (i, part) in self.0.split('\'').enumerate() {
            if i > 0 {
                buffer.push_str("&#39;");
            }
            part.render_to(buffer);
        }
    }
}

/// Which side of the conversation a message is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSide {
    Own,
    Other,
}

/// Quoted block drawn above a reply's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedBlock {
    /// Who wrote the reply
    pub replier: String,
    /// Who wrote the quoted message
    pub sender: String,
    pub text: String,
    pub color: String,
}

/// Display representation of one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub side: MessageSide,
    pub sender_label: String,
    pub sender_color: String,
    pub quote: Option<QuotedBlock>,
    pub body: String,
}

impl DisplayNode {
    pub fn is_self(&self) -> bool {
        self.side == MessageSide::Own
    }

    fn classes(&self) -> &'static str {
        match (self.side, self.quote.is_some()) {
            (MessageSide::Own, false) => "message--self",
            (MessageSide::Own, true) => "message--self message--reply",
            (MessageSide::Other, false) => "message--other",
            (MessageSide::Other, true) => "message--other message--reply",
        }
    }

    /// HTML for this node.
    pub fn to_markup(&self) -> Markup {
        html! {
            div class=(self.classes()) {
                @if let Some(quote) = &self.quote {
                    div class="message--quoted" style={ "border-left-color: " (UserText(&quote.color)) } {
                        div class="reply-meta" { (UserText(&quote.replier)) " → " (UserText(&quote.sender)) }
                        div class="quoted-text" { (UserText(&quote.text)) }
                    }
                }
                @if !self.is_self() {
                    span class="message--sender" style={ "color: " (UserText(&self.sender_color)) } {
                        (UserText(&self.sender_label))
                    }
                }
                div class="message--body" { (UserText(&self.body)) }
            }
        }
    }

    /// Snapshot this message as a reply target.
    pub fn reply_reference(&self, id: impl Into<String>) -> ReplyReference {
        let sender = if self.sender_label.is_empty() {
            SELF_LABEL
        } else {
            self.sender_label.as_str()
        };
        ReplyReference::capture(id, sender, &self.body, Some(&self.sender_color))
    }
}

/// Build the display node for one message.
///
/// `is_self` is decided by the caller by comparing the message's sender id
/// with the local user id.
pub fn render(
    content: &str,
    sender_label: &str,
    sender_color: &str,
    reply: Option<&ReplyReference>,
    is_self: bool,
) -> DisplayNode {
    let quote = reply.map(|reference| QuotedBlock {
        replier: if is_self {
            SELF_LABEL.to_string()
        } else {
            sender_label.to_string()
        },
        sender: reference.sender.clone(),
        text: reference.text.clone(),
        color: reference
            .sender_color
            .clone()
            .unwrap_or_else(|| DEFAULT_QUOTE_COLOR.to_string()),
    });

    DisplayNode {
        side: if is_self {
            MessageSide::Own
        } else {
            MessageSide::Other
        },
        sender_label: sender_label.to_string(),
        sender_color: sender_color.to_string(),
        quote,
        body: content.to_string(),
    }
}

/// Rendered messages in display order.
#[derive(Debug, Default)]
pub struct MessageLog {
    nodes: Vec<DisplayNode>,
    scroll_to: Option<usize>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and request a scroll to it. Returns its position.
    pub fn append(&mut self, node: DisplayNode) -> usize {
        self.nodes.push(node);
        let index = self.nodes.len() - 1;
        self.scroll_to = Some(index);
        index
    }

    pub fn get(&self, index: usize) -> Option<&DisplayNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &DisplayNode> {
        self.nodes.iter()
    }

    /// Standalone HTML page with every message in display order.
    pub fn to_document(&self, title: &str) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (UserText(title)) }
                }
                body {
                    div class="messages" {
                        @for node in self.iter() {
                            (node.to_markup())
                        }
                    }
                }
            }
        }
    }

    /// Pending scroll-to-latest request, cleared once taken.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_to.take()
    }
}
