//! Unified error type for the Botforge agent.

use botforge_registry::RegistryError;

use crate::RespondError;

/// Top-level error returned by the agent's entry points.
///
/// Domain failures (playback preconditions, game state, provider
/// trouble) never surface here — they are converted into user-visible
/// notices inside the room worker. What remains is infrastructure:
/// the room's worker being unavailable, or the responder itself
/// failing.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// A routing-level error (room worker gone).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An outbound delivery error.
    #[error(transparent)]
    Respond(#[from] RespondError),
}
