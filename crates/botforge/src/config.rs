//! Agent configuration.

use std::time::Duration;

/// Configuration for the agent's message handling.
///
/// Sensible defaults are provided; override individual fields through
/// [`AgentBuilder`](crate::AgentBuilder).
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// The command prefix. Messages starting with this are parsed as
    /// commands; everything else is free-form chat.
    pub prefix: String,

    /// Minimum character count for free-form chat to be answered.
    /// Shorter messages (bare emoji, "ok") are ignored.
    pub min_chat_len: usize,

    /// Upper bound on any single external provider call (generative
    /// text, media resolution). On expiry the user gets an apology and
    /// no state is touched — the room is never blocked indefinitely.
    pub provider_timeout: Duration,

    /// Mailbox size for each room's worker. A full mailbox applies
    /// backpressure to the event source, it never drops events.
    pub mailbox_size: usize,

    /// Gain factor for newly created playback sessions.
    pub default_volume: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            min_chat_len: 5,
            provider_timeout: Duration::from_secs(10),
            mailbox_size: 64,
            default_volume: 0.5,
        }
    }
}
