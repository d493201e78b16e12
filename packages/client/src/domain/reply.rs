//! Reply-compose state machine.
//!
//! A client composes at most one reply at a time. Selecting a new target
//! while one is pending replaces it; sending or cancelling clears it.

use tagarela_server::infrastructure::dto::websocket::ReplyRefPayload;

/// Value snapshot of the message being replied to.
///
/// Captured when the user selects the target. It owns copies of every field,
/// so later changes to the source message never reach it, and it stays valid
/// when the source is no longer visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReference {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub sender_color: Option<String>,
}

impl ReplyReference {
    pub fn capture(
        id: impl Into<String>,
        sender: &str,
        text: &str,
        sender_color: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.to_string(),
            text: text.to_string(),
            sender_color: sender_color.map(str::to_string),
        }
    }
}

impl From<ReplyRefPayload> for ReplyReference {
    fn from(payload: ReplyRefPayload) -> Self {
        Self {
            id: payload.id,
            sender: payload.sender,
            text: payload.text,
            sender_color: payload.sender_color,
        }
    }
}

impl From<ReplyReference> for ReplyRefPayload {
    fn from(reference: ReplyReference) -> Self {
        Self {
            id: reference.id,
            sender: reference.sender,
            text: reference.text,
            sender_color: reference.sender_color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReplyState {
    #[default]
    Idle,
    Composing(ReplyReference),
}

/// Single-slot holder of the pending reply target.
#[derive(Debug, Default)]
pub struct ReplyCorrelator {
    state: ReplyState,
}

impl ReplyCorrelator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start composing a reply to `reference`, discarding any pending one.
    pub fn begin_reply(&mut self, reference: ReplyReference) {
        if let ReplyState::Composing(previous) = &self.state {
            tracing::debug!("Replacing pending reply to '{}'", previous.sender);
        }
        self.state = ReplyState::Composing(reference);
    }

    pub fn cancel(&mut self) {
        self.state = ReplyState::Idle;
    }

    pub fn current_reference(&self) -> Option<&ReplyReference> {
        match &self.state {
            ReplyState::Idle => None,
            ReplyState::Composing(reference) => Some(reference),
        }
    }

    /// Take the pending reference for an outgoing message and return to idle.
    ///
    /// Called once per send, whether or not a reply is pending.
    pub fn consume_on_send(&mut self) -> Option<ReplyReference> {
        match std::mem::take(&mut self.state) {
            ReplyState::Idle => None,
            ReplyState::Composing(reference) => Some(reference),
        }
    }

    pub fn state(&self) -> &ReplyState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob_hello() -> ReplyReference {
        ReplyReference::capture("1", "Bob", "hello", Some("gold"))
    }

    #[test]
    fn test_initial_state_is_idle() {
        // テスト項目: 初期状態は Idle で参照は無い
        // given (前提条件):
        let correlator = ReplyCorrelator::new();

        // when (操作):
        let current = correlator.current_reference();

        // then (期待する結果):
        assert_eq!(current, None);
        assert_eq!(correlator.state(), &ReplyState::Idle);
    }

    #[test]
    fn test_consume_on_send_returns_reference_and_clears() {
        // テスト項目: Bob への返信中に送信すると参照が返り、その後は参照が無くなる
        // given (前提条件):
        let mut correlator = ReplyCorrelator::new();
        correlator.begin_reply(bob_hello());

        // when (操作):
        let consumed = correlator.consume_on_send();

        // then (期待する結果):
        let consumed = consumed.unwrap();
        assert_eq!(consumed.sender, "Bob");
        assert_eq!(consumed.text, "hello");
        assert_eq!(correlator.current_reference(), None);
    }

    #[test]
    fn test_consume_on_send_without_reply() {
        // テスト項目: 返信が無い状態での送信は None を返し、エラーにならない
        // given (前提条件):
        let mut correlator = ReplyCorrelator::new();

        // when (操作):
        let consumed = correlator.consume_on_send();

        // then (期待する結果):
        assert_eq!(consumed, None);
        assert_eq!(correlator.state(), &ReplyState::Idle);
    }

    #[test]
    fn test_begin_reply_overwrites_pending() {
        // テスト項目: 返信中に別のメッセージを選ぶと、前の参照は破棄され上書きされる
        // given (前提条件):
        let mut correlator = ReplyCorrelator::new();
        correlator.begin_reply(bob_hello());

        // when (操作):
        let carol = ReplyReference::capture("2", "Carol", "bom dia", None);
        correlator.begin_reply(carol.clone());

        // then (期待する結果):
        assert_eq!(correlator.current_reference(), Some(&carol));
        assert_eq!(correlator.consume_on_send(), Some(carol));
        assert_eq!(correlator.consume_on_send(), None);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        // テスト項目: cancel はいつでも Idle に戻す
        // given (前提条件):
        let mut correlator = ReplyCorrelator::new();
        correlator.begin_reply(bob_hello());

        // when (操作):
        correlator.cancel();
        correlator.cancel();

        // then (期待する結果):
        assert_eq!(correlator.current_reference(), None);
    }

    #[test]
    fn test_reference_is_a_snapshot() {
        // テスト項目: 参照の元になった値を後から変更しても、保持している参照は変わらない
        // given (前提条件):
        let mut sender = String::from("Bob");
        let mut text = String::from("hello");
        let mut correlator = ReplyCorrelator::new();
        correlator.begin_reply(ReplyReference::capture("1", &sender, &text, None));

        // when (操作):
        sender.push_str(" (edited)");
        text.clear();

        // then (期待する結果):
        let current = correlator.current_reference().unwrap();
        assert_eq!(current.sender, "Bob");
        assert_eq!(current.text, "hello");
    }

    #[test]
    fn test_payload_conversion_keeps_fields() {
        // テスト項目: ReplyReference とワイヤ形式の相互変換で全フィールドが保たれる
        // given (前提条件):
        let reference = bob_hello();

        // when (操作):
        let payload: ReplyRefPayload = reference.clone().into();
        let back: ReplyReference = payload.into();

        // then (期待する結果):
        assert_eq!(back, reference);
    }
}
