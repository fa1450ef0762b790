//! Console demo: one room on stdin, replies on stdout.
//!
//! Every line you type becomes a message event for room R-1. Two
//! special lines simulate the audio transport's callbacks:
//!
//! - `finish` — the current track finished (drives `advance`)
//! - `fail <cause>` — the transport failed fatally
//!
//! Try: `!play lofi beats`, `!queue`, `finish`, `!startguess`,
//! `!guess 50`, `!8ball will this work?`, or plain chat.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use botforge::prelude::*;
use botforge::AgentBuilder;
use tokio::io::{AsyncBufReadExt, BufReader};

const ROOM: RoomId = RoomId(1);

// ---------------------------------------------------------------------------
// In-memory collaborators
// ---------------------------------------------------------------------------

fn render(reply: &Reply) -> String {
    match reply {
        Reply::Text(text) => text.clone(),
        Reply::Embed(embed) => {
            let fields = embed
                .fields
                .iter()
                .map(|f| format!("  {}: {}", f.name, f.value))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{} — {}\n{fields}", embed.title, embed.description)
        }
    }
}

/// Prints replies to stdout; edits reference the original handle.
struct ConsoleResponder {
    next_handle: AtomicU64,
}

impl Responder for ConsoleResponder {
    async fn send(&self, room: RoomId, reply: Reply) -> Result<MessageHandle, RespondError> {
        let handle = self.next_handle.fetch_add(1, Ordering::SeqCst);
        println!("[{room} bot #{handle}] {}", render(&reply));
        Ok(MessageHandle(handle))
    }

    async fn edit(&self, handle: MessageHandle, reply: Reply) -> Result<(), RespondError> {
        println!("[edit #{}] {}", handle.0, render(&reply));
        Ok(())
    }
}

/// Logs what a real voice stack would do.
struct ConsoleTransport;

impl AudioTransport for ConsoleTransport {
    type Connection = ();

    async fn join(&self, room: RoomId, channel: ChannelId) -> Result<(), TransportError> {
        println!("[voice] joined {channel} in {room}");
        Ok(())
    }

    async fn play(&self, _conn: &(), source_ref: &str, volume: f32) -> Result<(), TransportError> {
        println!("[voice] streaming {source_ref} at volume {volume}");
        Ok(())
    }

    async fn stop_current(&self, _conn: &()) -> Result<(), TransportError> {
        println!("[voice] stopping current track (type `finish` to complete it)");
        Ok(())
    }

    async fn leave(&self, _conn: &()) -> Result<(), TransportError> {
        println!("[voice] left the channel");
        Ok(())
    }
}

/// Resolves every query to a demo track named after it.
struct DemoResolver;

impl MediaResolver for DemoResolver {
    async fn resolve(&self, query: &str) -> Result<Track, ResolveError> {
        Ok(Track::new(query, format!("demo://{query}")))
    }
}

/// A canned stand-in for a generative backend.
struct CannedProvider;

impl TextProvider for CannedProvider {
    async fn request(&self, prompt: &str) -> Result<String, ProviderError> {
        Ok(format!("I heard: \"{prompt}\" — ask me something harder."))
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let agent = AgentBuilder::new().build(
        Arc::new(ConsoleTransport),
        Arc::new(DemoResolver),
        Arc::new(CannedProvider),
        Arc::new(ConsoleResponder {
            next_handle: AtomicU64::new(0),
        }),
    );

    println!("console-bot ready — type commands (`!ping`), chat, `finish`, `fail <cause>`, or `quit`");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        match line.as_str() {
            "quit" | "exit" => break,
            "finish" => agent.on_track_finished(ROOM).await?,
            _ => {
                if let Some(cause) = line.strip_prefix("fail ") {
                    agent.on_transport_error(ROOM, cause).await?;
                } else if !line.is_empty() {
                    agent
                        .on_message(MessageEvent {
                            room: ROOM,
                            author: UserId(1),
                            author_name: "console".into(),
                            text: line,
                            voice_channel: Some(ChannelId(1)),
                        })
                        .await?;
                }
            }
        }
    }

    agent.shutdown().await;
    Ok(())
}
