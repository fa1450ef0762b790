//! The voice transport collaborator trait.
//!
//! Botforge does not speak any voice protocol itself — that is the host
//! platform's job. The core only needs four operations: join a channel,
//! stream a track into a connection, stop the current track, and leave.
//! The trait lets production wire in a real voice stack while tests use
//! an in-memory fake.
//!
//! Track completion flows the other way: the host observes the
//! transport's "track finished" / "transport error" signals and feeds
//! them back into the agent, which routes them to the room's player as
//! `advance` / teardown. The trait therefore has no callback methods.

use botforge_protocol::{ChannelId, RoomId};

/// Errors the transport can report.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transport is not allowed to join (or speak in) the channel.
    #[error("missing permission to join the voice channel")]
    PermissionDenied,

    /// The voice channel does not exist or cannot be reached.
    #[error("voice channel not found")]
    NoChannel,

    /// The connection failed in a way that ends the session.
    /// Never retried automatically — a fresh `enqueue` re-establishes.
    #[error("voice transport failed: {0}")]
    Fatal(String),
}

/// A voice connection abstraction.
///
/// `Connection` is an ownership handle: exactly one room's playback
/// session holds it, and releasing it (via [`leave`](Self::leave))
/// is part of session teardown.
///
/// # Example
///
/// ```rust
/// use botforge_playback::{AudioTransport, TransportError};
/// use botforge_protocol::{ChannelId, RoomId};
///
/// /// A transport that pretends every operation succeeds.
/// struct NullTransport;
///
/// impl AudioTransport for NullTransport {
///     type Connection = ();
///
///     async fn join(
///         &self,
///         _room: RoomId,
///         _channel: ChannelId,
///     ) -> Result<(), TransportError> {
///         Ok(())
///     }
///
///     async fn play(
///         &self,
///         _conn: &(),
///         _source_ref: &str,
///         _volume: f32,
///     ) -> Result<(), TransportError> {
///         Ok(())
///     }
///
///     async fn stop_current(&self, _conn: &()) -> Result<(), TransportError> {
///         Ok(())
///     }
///
///     async fn leave(&self, _conn: &()) -> Result<(), TransportError> {
///         Ok(())
///     }
/// }
/// ```
pub trait AudioTransport: Send + Sync + 'static {
    /// The connection handle type. Owned by the playback session.
    type Connection: Send;

    /// Acquires a connection to a voice channel.
    fn join(
        &self,
        room: RoomId,
        channel: ChannelId,
    ) -> impl std::future::Future<Output = Result<Self::Connection, TransportError>> + Send;

    /// Starts streaming a track into the connection at the given gain.
    ///
    /// Returns as soon as streaming has started; completion is reported
    /// out of band as a "track finished" signal.
    fn play(
        &self,
        conn: &Self::Connection,
        source_ref: &str,
        volume: f32,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;

    /// Stops the current track.
    ///
    /// The transport then reports "track finished" exactly as if the
    /// track had played to the end — that is what makes `skip` reuse the
    /// normal completion path.
    fn stop_current(
        &self,
        conn: &Self::Connection,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;

    /// Releases the connection.
    fn leave(
        &self,
        conn: &Self::Connection,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}
