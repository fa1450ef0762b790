//! # Botforge
//!
//! A chat-platform automation agent core. Botforge reacts to inbound
//! text events with scripted replies, generative-text answers, streamed
//! audio playback, or per-room mini-games — and owns the long-lived,
//! mutually exclusive state that makes the latter two interesting: one
//! playback queue bound to a voice connection and one game session of
//! each kind per room, mutated strictly in message order per room while
//! rooms run concurrently.
//!
//! The platform-specific pieces (gateway, voice stack, AI backend,
//! message delivery) are collaborator traits the host implements:
//! [`AudioTransport`], [`MediaResolver`], [`TextProvider`],
//! [`Responder`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use botforge::prelude::*;
//!
//! let agent = AgentBuilder::new()
//!     .prefix("!")
//!     .build(transport, resolver, provider, responder);
//!
//! // Wire the platform's events in:
//! agent.on_message(event).await?;
//! agent.on_track_finished(room).await?;
//! ```

mod agent;
mod config;
mod error;
mod fun;
mod handler;
mod provider;
mod respond;

pub use agent::{Agent, AgentBuilder};
pub use config::AgentConfig;
pub use error::AgentError;
pub use provider::{ProviderError, TextProvider};
pub use respond::{Responder, RespondError};

// Re-export the layer crates so hosts depend on `botforge` alone.
pub use botforge_game as game;
pub use botforge_playback as playback;
pub use botforge_protocol as protocol;
pub use botforge_registry as registry;

/// The common imports for hosting an agent.
pub mod prelude {
    pub use crate::{
        Agent, AgentBuilder, AgentConfig, AgentError, ProviderError, Responder, RespondError,
        TextProvider,
    };
    pub use botforge_playback::{
        AudioTransport, MediaResolver, PlaybackError, ResolveError, Track, TransportError,
    };
    pub use botforge_protocol::{
        ChannelId, Embed, MessageEvent, MessageHandle, Reply, RoomId, UserId,
    };
}
