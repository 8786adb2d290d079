//! WebSocket client session management.
//!
//! One task reads server frames and a blocking thread reads terminal
//! input; both feed a single channel so the session loop owns the sync
//! state and the write half without any locking.

use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use tamariba_shared::{
    protocol::{ClientEvent, MessageDto, ServerEvent},
    time::now_millis,
};

use crate::{
    cache::RoomCache,
    domain::{BroadcastOutcome, ClientSyncState, HistoryOutcome, SyncPhase},
    error::{ClientError, SendError},
};

use super::{formatter::MessageFormatter, ui::redisplay_prompt};

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Everything the session loop reacts to.
enum SessionInput {
    Server(ServerEvent),
    Line(String),
    ServerClosed,
    StdinClosed,
}

/// A parsed line of terminal input.
#[derive(Debug, PartialEq, Eq)]
enum InputCommand {
    Join(String),
    Rooms,
    Chat(String),
    Unknown(String),
}

fn parse_input(line: &str) -> InputCommand {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("/join ") {
        let room = rest.trim();
        if room.is_empty() {
            return InputCommand::Unknown(trimmed.to_string());
        }
        return InputCommand::Join(room.to_string());
    }
    if trimmed == "/rooms" {
        return InputCommand::Rooms;
    }
    if trimmed.starts_with('/') {
        return InputCommand::Unknown(trimmed.to_string());
    }
    InputCommand::Chat(line.to_string())
}

/// Run one WebSocket client session until the connection or stdin closes.
pub async fn run_client_session(
    url: &str,
    sender: &str,
    initial_room: &str,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to relay server");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send.\n\
         Commands: /join <room>, /rooms. Press Ctrl+C to exit.\n",
        sender
    );

    let (mut write, mut read) = ws_stream.split();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<SessionInput>();

    // Read task: decode server frames into session inputs
    let server_tx = input_tx.clone();
    let read_task = tokio::spawn(async move {
        while let Some(frame) = read.next().await {
            match frame {
                Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(&text) {
                    Ok(event) => {
                        if server_tx.send(SessionInput::Server(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Unparseable server event: {}: {}", e, text);
                    }
                },
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
        let _ = server_tx.send(SessionInput::ServerClosed);
    });

    // Blocking thread for rustyline (synchronous readline)
    let prompt = format!("{}> ", sender);
    let line_tx = input_tx.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                let _ = line_tx.send(SessionInput::StdinClosed);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str()).ok();
                    if line_tx.send(SessionInput::Line(line)).is_err() {
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
        let _ = line_tx.send(SessionInput::StdinClosed);
    });

    let mut state = ClientSyncState::new(sender);
    let mut cache = RoomCache::new();

    // Join the initial room before touching user input
    if let Some(event) = state.switch_room(initial_room) {
        send_event(&mut write, &event).await?;
        print!("{}", MessageFormatter::format_room_switch(initial_room));
    }

    let result = session_loop(&mut input_rx, &mut write, &mut state, &mut cache).await;

    read_task.abort();
    result
}

async fn session_loop(
    input_rx: &mut mpsc::UnboundedReceiver<SessionInput>,
    write: &mut WsSink,
    state: &mut ClientSyncState,
    cache: &mut RoomCache,
) -> Result<(), ClientError> {
    while let Some(input) = input_rx.recv().await {
        match input {
            SessionInput::Line(line) => {
                handle_line(&line, write, state, cache).await?;
            }
            SessionInput::Server(event) => {
                handle_server_event(event, state);
            }
            SessionInput::ServerClosed => {
                return Err(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                ));
            }
            SessionInput::StdinClosed => {
                break;
            }
        }
    }
    Ok(())
}

async fn handle_line(
    line: &str,
    write: &mut WsSink,
    state: &mut ClientSyncState,
    cache: &mut RoomCache,
) -> Result<(), ClientError> {
    match parse_input(line) {
        InputCommand::Join(room) => {
            // Keep the old view around for instant display on a revisit
            if state.phase() == SyncPhase::Synced
                && let Some(old_room) = state.current_room()
            {
                cache.store(old_room, state.local_view());
            }

            if let Some(event) = state.switch_room(&room) {
                send_event(write, &event).await?;
                print!("{}", MessageFormatter::format_room_switch(&room));
                if let Some(cached) = cache.get(&room) {
                    print!("{}", MessageFormatter::format_cached_history(&room, cached));
                }
            }
            redisplay_prompt(state.sender());
        }
        InputCommand::Rooms => {
            let names = cache.room_names();
            print!(
                "{}",
                MessageFormatter::format_rooms(&names, state.current_room())
            );
            redisplay_prompt(state.sender());
        }
        InputCommand::Chat(text) => match state.send_local(&text) {
            Ok(event) => {
                send_event(write, &event).await?;
                print!(
                    "{}",
                    MessageFormatter::format_sent_confirmation(now_millis())
                );
                redisplay_prompt(state.sender());
            }
            Err(SendError::NotSynced) => {
                println!("(still joining a room, try again in a moment)");
                redisplay_prompt(state.sender());
            }
            Err(SendError::EmptyContent) => {
                // Empty lines never reach here; nothing to report
                redisplay_prompt(state.sender());
            }
        },
        InputCommand::Unknown(text) => {
            println!("Unknown command '{}'. Commands: /join <room>, /rooms", text);
            redisplay_prompt(state.sender());
        }
    }
    Ok(())
}

fn handle_server_event(event: ServerEvent, state: &mut ClientSyncState) {
    match event {
        ServerEvent::LoadMessages { messages } => match state.on_load_messages(messages) {
            HistoryOutcome::Applied => {
                let room = state.current_room().unwrap_or("?");
                print!(
                    "{}",
                    MessageFormatter::format_history(room, state.local_view())
                );
                redisplay_prompt(state.sender());
            }
            HistoryOutcome::StaleDiscarded => {
                tracing::debug!("Discarded stale history reply");
            }
        },
        ServerEvent::ChatMessage { sender, content } => {
            let message = MessageDto { sender, content };
            match state.on_broadcast(message) {
                BroadcastOutcome::Appended(message) => {
                    print!("{}", MessageFormatter::format_chat(&message, now_millis()));
                    redisplay_prompt(state.sender());
                }
                BroadcastOutcome::EchoSuppressed => {
                    tracing::debug!("Suppressed own echo");
                }
                BroadcastOutcome::Discarded => {
                    tracing::debug!("Discarded broadcast received before sync");
                }
            }
        }
    }
}

async fn send_event(write: &mut WsSink, event: &ClientEvent) -> Result<(), ClientError> {
    let json = serde_json::to_string(event)
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))
}
