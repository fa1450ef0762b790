//! Playback lifecycle state machine.

use serde::{Deserialize, Serialize};

/// The lifecycle state of one room's playback session.
///
/// "No session" is not a state here — it is the absence of the session
/// record itself. Once a session exists:
///
/// ```text
/// Connecting → Playing ⇄ Idle → Draining   (queue ran out)
///                 │
///                 └──→ Stopped             (explicit stop)
/// ```
///
/// - **Connecting**: the transport connection is being acquired for the
///   first `enqueue`.
/// - **Playing**: a track is streaming.
/// - **Idle**: between tracks — the previous track finished and the next
///   has not started yet.
/// - **Stopped**: an explicit `stop` tore the session down.
/// - **Draining**: the queue emptied after the last track; the
///   connection is being released and the session destroyed.
///
/// A transport fatal error tears the session down from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Connecting,
    Playing,
    Idle,
    Stopped,
    Draining,
}

impl PlayerState {
    /// Returns `true` while the session should keep existing.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Connecting | Self::Playing | Self::Idle)
    }

    /// Returns `true` if a track is currently streaming.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns `true` if transitioning to `target` is a legal edge of
    /// the state machine.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Connecting, Self::Playing)
                | (Self::Playing, Self::Idle)
                | (Self::Idle, Self::Playing)
                | (Self::Idle, Self::Draining)
                | (Self::Playing, Self::Stopped)
                | (Self::Connecting, Self::Stopped)
                | (Self::Idle, Self::Stopped)
        )
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connecting => write!(f, "Connecting"),
            Self::Playing => write!(f, "Playing"),
            Self::Idle => write!(f, "Idle"),
            Self::Stopped => write!(f, "Stopped"),
            Self::Draining => write!(f, "Draining"),
        }
    }
}
