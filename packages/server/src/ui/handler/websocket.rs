//! WebSocket connection handler.
//!
//! Per-connection protocol state is `Unjoined → Joined(room)`, with the
//! room re-targeted on every `join_room` event; transport close is the
//! terminal state and triggers registry cleanup.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use tamariba_shared::protocol::ClientEvent;

use crate::domain::ConnectionId;

use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's channel into the WebSocket
/// sink.
///
/// Broadcasts and history replays are pushed into the channel by the
/// usecases; this is the only place the socket is written, so no lock is
/// ever held across socket I/O.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let conn = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();

    // Create and register the channel this connection is pushed through
    let (tx, rx) = mpsc::unbounded_channel();
    state.pusher.register(conn.clone(), tx).await;
    tracing::info!("Connection '{}' established", conn);

    let mut send_task = pusher_loop(rx, sender);

    // Receive events from this connection and dispatch to usecases
    let conn_for_recv = conn.clone();
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", conn_for_recv, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Ignoring unparseable event: {}", e);
                            continue;
                        }
                    };

                    match event {
                        ClientEvent::JoinRoom { room_name } => {
                            match state_for_recv
                                .join_room_usecase
                                .execute(conn_for_recv.clone(), room_name)
                                .await
                            {
                                Ok(room) => {
                                    tracing::info!("Connection '{}' joined '{}'", conn_for_recv, room);
                                }
                                Err(e) => {
                                    // Rejected silently: no broadcast, no mutation
                                    tracing::warn!("Rejected join from '{}': {}", conn_for_recv, e);
                                }
                            }
                        }
                        ClientEvent::ChatMessage {
                            sender,
                            content,
                            room_name,
                        } => {
                            match state_for_recv
                                .send_message_usecase
                                .execute(sender, content, room_name)
                                .await
                            {
                                Ok(members) => {
                                    tracing::debug!("Relayed message to {} member(s)", members.len());
                                }
                                Err(e) => {
                                    // Rejected silently: no broadcast, no mutation
                                    tracing::warn!("Rejected message from '{}': {}", conn_for_recv, e);
                                }
                            }
                        }
                    }
                }
                Message::Ping(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", conn_for_recv);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Registry and pusher cleanup; no "user left" broadcast
    state.disconnect_usecase.execute(conn).await;
}
