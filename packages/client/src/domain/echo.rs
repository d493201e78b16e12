//! Local echo suppression.
//!
//! The server relays every message back to its sender. A sent message is
//! rendered immediately, so the echo has to be recognised and skipped.

use std::collections::HashSet;

use tagarela_shared::time::Clock;

/// Local ids of messages rendered optimistically and not yet echoed back.
#[derive(Debug, Default)]
pub struct LocalEchoSuppressor {
    pending: HashSet<String>,
}

impl LocalEchoSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `local_id` as awaiting its echo. Empty ids are ignored.
    pub fn mark_pending(&mut self, local_id: &str) {
        if local_id.is_empty() {
            return;
        }
        self.pending.insert(local_id.to_string());
    }

    /// Check-and-remove in one step.
    ///
    /// Returns `true` only for the first delivery of a pending id; a repeated
    /// delivery, an unknown id, an empty id or no id at all render normally.
    pub fn should_suppress(&mut self, local_id: Option<&str>) -> bool {
        match local_id {
            Some(id) if !id.is_empty() => self.pending.remove(id),
            _ => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Time-based local id source.
///
/// Ids are the send time in milliseconds plus a per-session sequence number,
/// so two sends within the same millisecond still differ. They carry no
/// ordering meaning and are not unique across clients.
pub struct LocalIdGenerator {
    clock: Box<dyn Clock>,
    seq: u64,
}

impl LocalIdGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock, seq: 0 }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format!("{}-{}", self.clock.now_millis(), self.seq)
    }

    /// Current time in milliseconds, as a string token.
    pub fn timestamp_token(&self) -> String {
        self.clock.now_millis().to_string()
    }
}
