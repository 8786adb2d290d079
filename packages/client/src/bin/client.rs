//! CLI client for the Tamariba room relay.
//!
//! Connects to the relay, joins a room, and relays terminal input as chat
//! messages. The sender identity is generated on first run and persisted,
//! so the same `User-xxxxxx` name is reused across restarts.
//! Automatically reconnects on disconnection (max 5 attempts with 5
//! second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tamariba-client
//! cargo run --bin tamariba-client -- --room cave
//! ```

use std::path::PathBuf;

use clap::Parser;

use tamariba_client::identity;
use tamariba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "CLI client for the Tamariba room relay", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Room to join on startup
    #[arg(short = 'r', long, default_value = "lobby")]
    room: String,

    /// File where the generated sender identity is persisted
    #[arg(long, default_value = ".tamariba/sender")]
    identity_file: PathBuf,
}

#[tokio::main]
async fn main() {
    setup_logger("info");

    let args = Args::parse();

    let sender = match identity::load_or_create(&args.identity_file) {
        Ok(sender) => sender,
        Err(e) => {
            tracing::error!(
                "Failed to load identity from {}: {}",
                args.identity_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = tamariba_client::run_client(args.url, sender, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
