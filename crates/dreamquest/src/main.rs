use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn, Level};

use crate::game::{Outcome, Session};
use crate::story::Story;

mod game;
mod story;

const DEFAULT_BIND: &str = "0.0.0.0:12345";

#[derive(Debug, Clone)]
struct Config {
    bind: String,
}

fn usage_and_exit() -> ! {
    eprintln!("usage: dreamquest [port] [host]");
    std::process::exit(2);
}

fn parse_args() -> Config {
    let default_bind =
        std::env::var("DREAMQUEST_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let args: Vec<String> = std::env::args().skip(1).collect();
    match bind_from(&args, &default_bind) {
        Ok(bind) => Config { bind },
        Err(e) => {
            eprintln!("{e}");
            usage_and_exit();
        }
    }
}

/// Positional overrides, port first then host.
fn bind_from(args: &[String], default_bind: &str) -> Result<String, String> {
    let Some(port) = args.first() else {
        return Ok(default_bind.to_string());
    };
    let port: u16 = port.parse().map_err(|_| format!("invalid port: {port}"))?;
    let host = args.get(1).map(String::as_str).unwrap_or("0.0.0.0");
    Ok(format!("{host}:{port}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dreamquest=info".into()),
        )
        .with_target(false)
        .with_max_level(Level::INFO)
        .init();

    let cfg = parse_args();
    let story = Arc::new(Story::default());

    // Bind failure is fatal; nothing has been served yet.
    let listener = TcpListener::bind(&cfg.bind).await?;
    info!(bind = %cfg.bind, "dream quest listening");

    loop {
        let (stream, peer) = tokio::select! {
            res = listener.accept() => match res {
                Ok(pair) => pair,
                Err(e) => {
                    // One failed accept never brings the server down.
                    warn!(err = %e, "accept failed");
                    continue;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, shutting down");
                break;
            }
        };

        let story = story.clone();
        tokio::spawn(async move {
            info!(peer = %peer, "connection established");
            match handle_conn(stream, story).await {
                Ok((outcome, turns)) => {
                    info!(peer = %peer, outcome = ?outcome, turns, "connection closed");
                }
                Err(e) => warn!(peer = %peer, err = %e, "connection ended with error"),
            }
        });
    }

    Ok(())
}

async fn handle_conn(stream: TcpStream, story: Arc<Story>) -> anyhow::Result<(Outcome, u64)> {
    let (rd, wr) = stream.into_split();
    let mut session = Session::new(rd, wr, story);
    let outcome = session.run().await?;
    Ok((outcome, session.turns()))
}
