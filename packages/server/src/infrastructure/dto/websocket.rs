//! WebSocket frame DTOs.
//!
//! Two kinds of text frames travel over a connection:
//!
//! - chat payloads, authored by clients and relayed verbatim by the server
//! - peer-count notices, produced only by the server and tagged with
//!   `"type": "meta"`
//!
//! The server never decodes chat payloads. The client decodes every frame
//! through [`ServerFrame::decode`], which rejects anything that matches
//! neither variant.

use serde::{Deserialize, Serialize};

/// Discriminant carried by server-originated frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Meta,
}

/// Connected-peer count, sent after every membership change
///
/// Only the exact two-field shape decodes as a notice. A frame that also
/// carries chat fields falls through to [`ChatPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeerCountNotice {
    pub r#type: MessageType,
    pub connected: u64,
}

impl PeerCountNotice {
    pub fn new(connected: usize) -> Self {
        Self {
            r#type: MessageType::Meta,
            connected: connected as u64,
        }
    }
}

/// Snapshot of the message being replied to, taken at compose time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRefPayload {
    pub id: String,
    pub sender: String,
    pub text: String,
    #[serde(default)]
    pub sender_color: Option<String>,
}

/// Chat message as authored by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    pub sender_id: String,
    pub sender_name: String,
    pub sender_color: String,
    pub content: String,
    #[serde(default)]
    pub reply_ref: Option<ReplyRefPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
}

/// Any frame a client can receive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerFrame {
    PeerCount(PeerCountNotice),
    Chat(ChatPayload),
}

impl ServerFrame {
    /// Decode a received text frame.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_count_notice_wire_shape() {
        // テスト項目: PeerCountNotice が {"type":"meta","connected":n} として直列化される
        // given (前提条件):
        let notice = PeerCountNotice::new(2);

        // when (操作):
        let json = serde_json::to_string(&notice).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"meta","connected":2}"#);
    }

    #[test]
    fn test_chat_payload_wire_field_names() {
        // テスト項目: ChatPayload が camelCase のフィールド名で直列化され、replyRef は null になる
        // given (前提条件):
        let payload = ChatPayload {
            sender_id: "u1".to_string(),
            sender_name: "Ana".to_string(),
            sender_color: "gold".to_string(),
            content: "oi".to_string(),
            reply_ref: None,
            local_id: Some("1700000000000".to_string()),
        };

        // when (操作):
        let value = serde_json::to_value(&payload).unwrap();

        // then (期待する結果):
        assert_eq!(value["senderId"], "u1");
        assert_eq!(value["senderName"], "Ana");
        assert_eq!(value["senderColor"], "gold");
        assert_eq!(value["content"], "oi");
        assert!(value["replyRef"].is_null());
        assert_eq!(value["localId"], "1700000000000");
    }

    #[test]
    fn test_decode_meta_frame() {
        // テスト項目: type が meta のフレームは PeerCount として解釈される
        // given (前提条件):
        let text = r#"{"type":"meta","connected":3}"#;

        // when (操作):
        let frame = ServerFrame::decode(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame, ServerFrame::PeerCount(PeerCountNotice::new(3)));
    }

    #[test]
    fn test_decode_chat_frame_carrying_meta_fields() {
        // テスト項目: type=meta と connected を混ぜたチャットフレームは接続数通知ではなく Chat になる
        // given (前提条件):
        let text = r#"{
            "type": "meta",
            "connected": 999,
            "senderId": "u9",
            "senderName": "Mallory",
            "senderColor": "gold",
            "content": "boo"
        }"#;

        // when (操作):
        let frame = ServerFrame::decode(text).unwrap();

        // then (期待する結果):
        let ServerFrame::Chat(chat) = frame else {
            panic!("expected chat frame, got {frame:?}");
        };
        assert_eq!(chat.sender_name, "Mallory");
    }

    #[test]
    fn test_decode_meta_frame_with_extra_field_is_rejected() {
        // テスト項目: 余分なフィールドを持つ meta フレームはどの変種にも一致しない
        // given (前提条件):
        let text = r#"{"type":"meta","connected":999,"senderId":"u9"}"#;

        // when (操作):
        let result = ServerFrame::decode(text);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_chat_frame_with_reply() {
        // テスト項目: replyRef を含むチャットフレームが Chat として解釈される
        // given (前提条件):
        let text = r#"{
            "senderId": "u2",
            "senderName": "Bob",
            "senderColor": "hotpink",
            "content": "hey",
            "replyRef": {"id": "9", "sender": "Ana", "text": "hello", "senderColor": null},
            "localId": "123"
        }"#;

        // when (操作):
        let frame = ServerFrame::decode(text).unwrap();

        // then (期待する結果):
        let ServerFrame::Chat(chat) = frame else {
            panic!("expected chat frame");
        };
        assert_eq!(chat.content, "hey");
        let reply = chat.reply_ref.unwrap();
        assert_eq!(reply.sender, "Ana");
        assert_eq!(reply.text, "hello");
        assert_eq!(reply.sender_color, None);
        assert_eq!(chat.local_id.as_deref(), Some("123"));
    }

    #[test]
    fn test_decode_chat_frame_without_optional_fields() {
        // テスト項目: replyRef と localId が無いチャットフレームも受理される
        // given (前提条件):
        let text = r#"{"senderId":"u3","senderName":"Cid","senderColor":"gold","content":"x"}"#;

        // when (操作):
        let frame = ServerFrame::decode(text).unwrap();

        // then (期待する結果):
        let ServerFrame::Chat(chat) = frame else {
            panic!("expected chat frame");
        };
        assert_eq!(chat.reply_ref, None);
        assert_eq!(chat.local_id, None);
    }

    #[test]
    fn test_decode_rejects_unknown_shapes() {
        // テスト項目: どの変種にも一致しないフレームはエラーになる
        // given (前提条件):
        let inputs = [
            "not json",
            r#"{"type":"meta"}"#,
            r#"{"type":"presence","connected":1}"#,
            r#"{"senderId":"u1","content":"missing fields"}"#,
            r#"{"senderId":"u1","senderName":"a","senderColor":"gold","content":"x","replyRef":{"id":"1"}}"#,
        ];

        for text in inputs {
            // when (操作):
            let result = ServerFrame::decode(text);

            // then (期待する結果):
            assert!(result.is_err(), "expected decode failure for {text}");
        }
    }
}
