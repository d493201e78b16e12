//! Client session core.
//!
//! [`ChatSession`] owns everything one logged-in client tracks: its profile,
//! the pending reply target, the local echo set, the rendered message log and
//! the swipe gesture in progress. Every input, whether typed by the user or
//! received from the server, goes through [`ChatSession::dispatch`], which
//! returns the effect the front-end has to carry out.

use tagarela_server::infrastructure::dto::websocket::{ChatPayload, ServerFrame};
use tagarela_shared::time::{Clock, SystemClock};

use crate::{
    domain::{
        LocalEchoSuppressor, LocalIdGenerator, ReplyCorrelator, ReplyReference, SwipeGesture,
        UserProfile,
    },
    error::{ClientError, PayloadError},
    renderer::{MessageLog, render},
};

/// Inputs to the session
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The user submitted a message
    Submit(String),
    /// A text frame arrived from the server
    Frame(String),
    /// The reply affordance of the message at this log position was used
    ReplyButton(usize),
    /// A drag started on the message at `entry`
    PointerDown { entry: usize, x: f64 },
    PointerMove { x: f64 },
    PointerUp,
    CancelReply,
}

/// What the front-end has to do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// Send `payload` to the server; the message is already rendered at
    /// log position `rendered`
    Outgoing { payload: String, rendered: usize },
    /// A received message was appended at this log position
    Rendered(usize),
    /// A received message was the echo of our own optimistic render
    Suppressed,
    PeerCount(u64),
    ReplyStarted(ReplyReference),
    ReplyCancelled,
    /// Visual offset for the message being dragged
    DragOffset(f64),
    /// A received frame could not be decoded
    Discarded,
    Nothing,
}

/// Decode a received text frame.
pub fn decode_frame(text: &str) -> Result<ServerFrame, PayloadError> {
    Ok(ServerFrame::decode(text)?)
}

/// State of one client session.
pub struct ChatSession {
    profile: UserProfile,
    reply: ReplyCorrelator,
    echo: LocalEchoSuppressor,
    log: MessageLog,
    ids: LocalIdGenerator,
    gesture: SwipeGesture,
    gesture_entry: Option<usize>,
}

impl ChatSession {
    pub fn new(profile: UserProfile) -> Self {
        Self::with_clock(profile, Box::new(SystemClock))
    }

    pub fn with_clock(profile: UserProfile, clock: Box<dyn Clock>) -> Self {
        Self {
            profile,
            reply: ReplyCorrelator::new(),
            echo: LocalEchoSuppressor::new(),
            log: MessageLog::new(),
            ids: LocalIdGenerator::new(clock),
            gesture: SwipeGesture::default(),
            gesture_entry: None,
        }
    }

    /// Apply one event and report the resulting effect.
    pub fn dispatch(&mut self, event: ClientEvent) -> Result<SessionEffect, ClientError> {
        match event {
            ClientEvent::Submit(content) => self.submit(content),
            ClientEvent::Frame(text) => Ok(self.receive(&text)),
            ClientEvent::ReplyButton(entry) => self.select_reply_target(entry),
            ClientEvent::PointerDown { entry, x } => {
                if self.log.get(entry).is_some() {
                    self.gesture.start(x);
                    self.gesture_entry = Some(entry);
                }
                Ok(SessionEffect::Nothing)
            }
            ClientEvent::PointerMove { x } => {
                if self.gesture.is_dragging() {
                    Ok(SessionEffect::DragOffset(self.gesture.update(x)))
                } else {
                    Ok(SessionEffect::Nothing)
                }
            }
            ClientEvent::PointerUp => {
                let triggered = self.gesture.finish();
                match self.gesture_entry.take() {
                    Some(entry) if triggered => self.select_reply_target(entry),
                    Some(_) => Ok(SessionEffect::DragOffset(0.0)),
                    None => Ok(SessionEffect::Nothing),
                }
            }
            ClientEvent::CancelReply => {
                self.reply.cancel();
                Ok(SessionEffect::ReplyCancelled)
            }
        }
    }

    fn submit(&mut self, content: String) -> Result<SessionEffect, ClientError> {
        let local_id = self.ids.next_id();
        let payload = ChatPayload {
            sender_id: self.profile.id.clone(),
            sender_name: self.profile.name.clone(),
            sender_color: self.profile.color.clone(),
            content,
            reply_ref: self.reply.current_reference().cloned().map(Into::into),
            local_id: Some(local_id.clone()),
        };
        let encoded = serde_json::to_string(&payload)?;

        let reply = self.reply.consume_on_send();
        let node = render(
            &payload.content,
            &self.profile.name,
            &self.profile.color,
            reply.as_ref(),
            true,
        );
        let rendered = self.log.append(node);
        self.echo.mark_pending(&local_id);

        tracing::debug!("Sending message {} ({} bytes)", local_id, encoded.len());
        Ok(SessionEffect::Outgoing {
            payload: encoded,
            rendered,
        })
    }

    fn receive(&mut self, text: &str) -> SessionEffect {
        let frame = match decode_frame(text) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!("Discarding frame: {}", e);
                return SessionEffect::Discarded;
            }
        };

        match frame {
            ServerFrame::PeerCount(notice) => SessionEffect::PeerCount(notice.connected),
            ServerFrame::Chat(payload) => {
                let is_self = payload.sender_id == self.profile.id;
                if is_self && self.echo.should_suppress(payload.local_id.as_deref()) {
                    return SessionEffect::Suppressed;
                }
                let reply: Option<ReplyReference> = payload.reply_ref.map(Into::into);
                let node = render(
                    &payload.content,
                    &payload.sender_name,
                    &payload.sender_color,
                    reply.as_ref(),
                    is_self,
                );
                SessionEffect::Rendered(self.log.append(node))
            }
        }
    }

    fn select_reply_target(&mut self, entry: usize) -> Result<SessionEffect, ClientError> {
        let node = self
            .log
            .get(entry)
            .ok_or(ClientError::MessageNotFound(entry))?;
        let reference = node.reply_reference(self.ids.timestamp_token());
        self.reply.begin_reply(reference.clone());
        Ok(SessionEffect::ReplyStarted(reference))
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
