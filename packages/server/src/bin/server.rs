//! Room-scoped message relay server.
//!
//! Clients join named rooms over WebSocket, receive a replay of the
//! room's history, and exchange messages broadcast to all room members
//! (including the sender).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tamariba-server
//! cargo run --bin tamariba-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use tamariba_server::{
    domain::RoomSequencer,
    infrastructure::{InMemoryConnectionRegistry, InMemoryRoomStore, WebSocketMessagePusher},
    ui::Server,
    usecase::{DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase},
};
use tamariba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "tamariba-server")]
#[command(about = "Room-scoped WebSocket message relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. RoomStore / ConnectionRegistry / MessagePusher
    // 2. UseCases
    // 3. Server

    // 1. In-memory store, registry, and WebSocket pusher
    let store = Arc::new(InMemoryRoomStore::new());
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let pusher = Arc::new(WebSocketMessagePusher::new());
    // join と send が同じ直列化ドメインを共有する
    let sequencer = Arc::new(RoomSequencer::new());

    // 2. UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        store.clone(),
        registry.clone(),
        pusher.clone(),
        sequencer.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        store.clone(),
        registry.clone(),
        pusher.clone(),
        sequencer.clone(),
    ));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(registry.clone(), pusher.clone()));
    let list_rooms_usecase = Arc::new(ListRoomsUseCase::new(store.clone()));

    // 3. Create and run the server
    let server = Server::new(
        join_room_usecase,
        send_message_usecase,
        disconnect_usecase,
        list_rooms_usecase,
        pusher,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
