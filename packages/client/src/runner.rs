//! Terminal client connection loop.
//!
//! One task owns the [`ChatSession`] and selects over server frames and
//! input lines; a blocking thread runs rustyline and forwards lines through a
//! channel. The client does not reconnect: when the connection ends, so does
//! the session.

use std::path::Path;

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    domain::UserProfile,
    error::ClientError,
    session::{ChatSession, ClientEvent, SessionEffect},
    ui::{
        InputCommand, MessageFormatter, parse_input, prompt::prompt_for, redisplay_prompt,
    },
};

/// Connect to `url` as `profile` and run until the user quits or the
/// connection ends.
pub async fn run_client(
    url: String,
    profile: UserProfile,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Connecting to {} as '{}'", url, profile.name);

    let (ws_stream, _response) = connect_async(url.as_str())
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    print!("{}", MessageFormatter::format_welcome(&profile));

    let (mut write, mut read) = ws_stream.split();
    let name = profile.name.clone();
    let mut session = ChatSession::new(profile);
    let mut input_rx = spawn_readline(prompt_for(&name));

    loop {
        tokio::select! {
            message = read.next() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        let effect = session.dispatch(ClientEvent::Frame(text.as_str().to_string()))?;
                        show(&mut session, &effect);
                        redisplay_prompt(&name);
                    }
                    Some(Ok(Message::Binary(data))) => {
                        tracing::debug!("Ignoring {} bytes of binary data", data.len());
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Server closed the connection");
                        return Err(Box::new(ClientError::ConnectionError(
                            "Connection closed".to_string(),
                        )));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket read error: {}", e);
                        return Err(Box::new(ClientError::ConnectionError(e.to_string())));
                    }
                }
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    write.send(Message::Close(None)).await.ok();
                    return Ok(());
                };
                match parse_input(&line) {
                    None => continue,
                    Some(InputCommand::Quit) => {
                        tracing::info!("Leaving the chat");
                        write.send(Message::Close(None)).await.ok();
                        return Ok(());
                    }
                    Some(InputCommand::Help) => print!("{}", MessageFormatter::format_help()),
                    Some(InputCommand::Save(path)) => {
                        let notice = save_transcript(&session, &name, &path).await;
                        print!("{}", MessageFormatter::format_notice(&notice));
                    }
                    Some(InputCommand::Cancel) => {
                        let effect = session.dispatch(ClientEvent::CancelReply)?;
                        show(&mut session, &effect);
                    }
                    Some(InputCommand::Reply(number)) => {
                        match session.dispatch(ClientEvent::ReplyButton(number - 1)) {
                            Ok(effect) => show(&mut session, &effect),
                            Err(ClientError::MessageNotFound(_)) => {
                                let notice = format!("No message #{} to reply to", number);
                                print!("{}", MessageFormatter::format_notice(&notice));
                            }
                            Err(e) => return Err(Box::new(e)),
                        }
                    }
                    Some(InputCommand::Message(content)) => {
                        let effect = session.dispatch(ClientEvent::Submit(content))?;
                        show(&mut session, &effect);
                        if let SessionEffect::Outgoing { payload, .. } = effect {
                            write
                                .send(Message::Text(payload.into()))
                                .await
                                .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
                        }
                    }
                    Some(InputCommand::Unknown(input)) => {
                        let notice = format!("Unknown command '{}', try /help", input);
                        print!("{}", MessageFormatter::format_notice(&notice));
                    }
                }
                redisplay_prompt(&name);
            }
        }
    }
}

/// Print what an effect changed on screen.
fn show(session: &mut ChatSession, effect: &SessionEffect) {
    if let Some(index) = session.log_mut().take_scroll_request()
        && let Some(node) = session.log().get(index)
    {
        print!("{}", MessageFormatter::format_message(index + 1, node));
    }

    match effect {
        SessionEffect::PeerCount(connected) => {
            print!("{}", MessageFormatter::format_peer_count(*connected));
        }
        SessionEffect::ReplyStarted(reference) => {
            print!("{}", MessageFormatter::format_reply_preview(reference));
        }
        SessionEffect::ReplyCancelled => print!("{}", MessageFormatter::format_reply_cancelled()),
        _ => {}
    }
}

/// Write the conversation so far as an HTML page. Returns the notice to show.
async fn save_transcript(session: &ChatSession, name: &str, path: &Path) -> String {
    let count = session.log().len();
    let document = session.log().to_document(&format!("Tagarela - {}", name));
    match tokio::fs::write(path, document.into_string()).await {
        Ok(()) => {
            tracing::info!("Saved {} messages to {}", count, path.display());
            format!("Saved {} messages to {}", count, path.display())
        }
        Err(e) => {
            tracing::warn!("Failed to save conversation to {}: {}", path.display(), e);
            format!("Could not save to {}: {}", path.display(), e)
        }
    }
}

/// Run rustyline on a blocking thread and forward each line.
fn spawn_readline(prompt: String) -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
