//! Tagarela terminal chat client.
//!
//! Logs in under a display name with a random palette color, then sends
//! typed lines to the server and prints every message it relays. Use
//! `/reply <n>` to quote message #n and `/quit` to leave. The client does not
//! reconnect.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tagarela-client -- --name Ana
//! cargo run --bin tagarela-client -- -n Bob -c hotpink -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use tagarela_client::domain::UserProfile;
use tagarela_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "tagarela-client")]
#[command(about = "Terminal client for the Tagarela broadcast chat", long_about = None)]
struct Args {
    /// Display name shown to other participants
    #[arg(short = 'n', long)]
    name: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Palette color instead of a random one
    #[arg(short = 'c', long)]
    color: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger("tagarela_client", env!("CARGO_BIN_NAME"), &args.log_level);

    let profile = match args.color {
        Some(color) => match UserProfile::login_with_color(args.name, color) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => UserProfile::login(args.name),
    };

    if let Err(e) = tagarela_client::run_client(args.url, profile).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
