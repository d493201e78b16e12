//! End-to-end tests: the axum app on an ephemeral port, driven by real
//! WebSocket clients.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use tagarela_server::{
    infrastructure::{dto::http::HealthDto, registry::InMemoryConnectionRegistry},
    ui::Server,
    usecase::BroadcastRouter,
};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Start the server on 127.0.0.1 with an OS-assigned port
async fn start_server() -> SocketAddr {
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let server = Server::new(Arc::new(BroadcastRouter::new(registry)));
    let app = server.app();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn connect(addr: SocketAddr, path: &str) -> Client {
    let (stream, _response) = connect_async(format!("ws://{}{}", addr, path))
        .await
        .unwrap();
    stream
}

/// Receive the next text frame, skipping control frames
async fn next_text(client: &mut Client) -> String {
    loop {
        let msg = tokio::time::timeout(RECV_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .expect("websocket error");
        if let Message::Text(text) = msg {
            return text.as_str().to_string();
        }
    }
}

#[tokio::test]
async fn test_two_clients_scenario() {
    // テスト項目: A, B の接続で 2 が通知され、A の送信は両者に届き、B の切断で A に 1 が通知される
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(addr, "/ws").await;
    assert_eq!(next_text(&mut alice).await, r#"{"type":"meta","connected":1}"#);

    // when (操作): B が接続
    let mut bob = connect(addr, "/ws").await;

    // then (期待する結果):
    assert_eq!(next_text(&mut alice).await, r#"{"type":"meta","connected":2}"#);
    assert_eq!(next_text(&mut bob).await, r#"{"type":"meta","connected":2}"#);

    // when (操作): A がメッセージを送信
    let raw = r#"{"senderId":"a","senderName":"Ana","senderColor":"gold","content":"hi","replyRef":null,"localId":"1"}"#;
    alice.send(Message::Text(raw.into())).await.unwrap();

    // then (期待する結果): 送信者を含む両者に加工されずに届く
    assert_eq!(next_text(&mut alice).await, raw);
    assert_eq!(next_text(&mut bob).await, raw);

    // when (操作): B が切断
    bob.close(None).await.unwrap();

    // then (期待する結果):
    assert_eq!(next_text(&mut alice).await, r#"{"type":"meta","connected":1}"#);
}

#[tokio::test]
async fn test_root_path_accepts_upgrade() {
    // テスト項目: ルートパスでも WebSocket 接続を受け付ける
    // given (前提条件):
    let addr = start_server().await;

    // when (操作):
    let mut client = connect(addr, "/").await;

    // then (期待する結果):
    assert_eq!(next_text(&mut client).await, r#"{"type":"meta","connected":1}"#);
}

#[tokio::test]
async fn test_plain_get_on_root_returns_text() {
    // テスト項目: アップグレードでない GET / はテキストを返す
    // given (前提条件):
    let addr = start_server().await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();

    // then (期待する結果):
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "WebSocket server running");
}

#[tokio::test]
async fn test_favicon_is_no_content() {
    // テスト項目: /favicon.ico は 204 を返す
    // given (前提条件):
    let addr = start_server().await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/favicon.ico", addr))
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_health_reports_connected_count() {
    // テスト項目: /api/health が現在の接続数を返す
    // given (前提条件):
    let addr = start_server().await;
    let mut client = connect(addr, "/ws").await;
    next_text(&mut client).await;

    // when (操作):
    let health: HealthDto = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(health, HealthDto::ok(1));
}
