//! Error types for the registry layer.

use botforge_protocol::RoomId;

/// Errors that can occur when routing events to room workers.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The room's worker is gone or its mailbox is closed.
    /// Only seen during shutdown; a live worker accepts events until
    /// its handle is dropped.
    #[error("room {0} is unavailable")]
    RoomUnavailable(RoomId),
}
