//! Error types for the playback layer.

use botforge_protocol::RoomId;

use crate::PlayerState;

/// Errors that can occur during playback operations.
///
/// Every variant is recovered at the boundary of the message that
/// triggered it: the dispatcher turns it into a user-visible notice and
/// the room keeps processing.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// The requester is not in a voice channel, or the channel is gone,
    /// so there is nowhere to connect. No session is created.
    #[error("requester has no joinable voice channel")]
    NoVoiceChannel,

    /// The transport may not join or speak in the channel.
    /// No session is created.
    #[error("missing permission for the voice channel")]
    MissingPermission,

    /// The operation requires a playback session that does not exist.
    #[error("no active playback session for room {0}")]
    NoActiveSession(RoomId),

    /// The operation is not valid in the session's current state
    /// (e.g. `skip` while still connecting).
    #[error("playback is in state {0}, operation not allowed")]
    InvalidState(PlayerState),

    /// The transport failed mid-playback. Fatal to the session, not the
    /// process: the session has already been torn down when this is
    /// returned, and it is never retried automatically.
    #[error("voice transport failed: {0}")]
    TransportFatal(String),
}
