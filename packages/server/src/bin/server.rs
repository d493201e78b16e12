//! Tagarela broadcast chat server.
//!
//! Relays every message it receives to all connected clients, the sender
//! included, and announces the connected-peer count on every join and leave.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tagarela-server
//! cargo run --bin tagarela-server -- --host 127.0.0.1 --port 3000
//! PORT=3000 cargo run --bin tagarela-server
//! ```

use std::sync::Arc;

use clap::Parser;
use tagarela_server::{
    infrastructure::registry::InMemoryConnectionRegistry, ui::Server, usecase::BroadcastRouter,
};
use tagarela_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "tagarela-server")]
#[command(about = "Broadcast chat server over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger("tagarela_server", env!("CARGO_BIN_NAME"), &args.log_level);

    // 1. Registry, 2. Router, 3. Server
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let router = Arc::new(BroadcastRouter::new(registry));
    let server = Server::new(router);

    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
