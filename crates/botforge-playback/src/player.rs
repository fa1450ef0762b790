//! The per-room playback state machine.

use std::sync::Arc;

use botforge_protocol::{ChannelId, RoomId};
use botforge_registry::SessionSlot;

use crate::{
    AudioTransport, PlaybackError, PlaybackSession, PlayerState, Track, TransportError,
};

/// Result of an `enqueue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enqueued {
    /// No session existed: one was created and this track started
    /// playing immediately.
    Started { track: Track },

    /// A session existed: the track was appended at the given 1-based
    /// queue position, with no playback side effect.
    Queued { track: Track, position: usize },
}

/// Result of an `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advanced {
    /// The next track started playing.
    Playing { track: Track },

    /// The queue is empty: the connection was released and the session
    /// destroyed.
    Drained,
}

/// One room's playback state machine.
///
/// Owned by the room's worker, so every operation here is already
/// serialized with respect to the room's other events. The session slot
/// is empty while the room has no playback; `enqueue` creates the
/// session, and the three teardown paths (`advance` on an emptied
/// queue, `stop`, transport fatal error) destroy it.
pub struct Player<T: AudioTransport> {
    room: RoomId,
    transport: Arc<T>,
    slot: SessionSlot<PlaybackSession<T::Connection>>,
    default_volume: f32,
}

impl<T: AudioTransport> Player<T> {
    /// Creates a player for one room with no active session.
    pub fn new(room: RoomId, transport: Arc<T>, default_volume: f32) -> Self {
        Self {
            room,
            transport,
            slot: SessionSlot::new(),
            default_volume,
        }
    }

    /// Adds a track to the room's queue, creating the session (and the
    /// voice connection) if none exists.
    ///
    /// # Errors
    /// - [`PlaybackError::NoVoiceChannel`] — no session exists and the
    ///   requester is not in a voice channel
    /// - [`PlaybackError::MissingPermission`] — the transport may not
    ///   join the requester's channel
    /// - [`PlaybackError::TransportFatal`] — the connection failed while
    ///   starting the first track (the half-created session is torn down)
    pub async fn enqueue(
        &mut self,
        track: Track,
        voice_channel: Option<ChannelId>,
    ) -> Result<Enqueued, PlaybackError> {
        if let Some(session) = self.slot.get_mut() {
            let position = session.push(track.clone());
            tracing::debug!(room = %self.room, %track, position, "track queued");
            return Ok(Enqueued::Queued { track, position });
        }

        let channel = voice_channel.ok_or(PlaybackError::NoVoiceChannel)?;
        let connection = self
            .transport
            .join(self.room, channel)
            .await
            .map_err(|e| match e {
                TransportError::PermissionDenied => PlaybackError::MissingPermission,
                TransportError::NoChannel => PlaybackError::NoVoiceChannel,
                TransportError::Fatal(cause) => PlaybackError::TransportFatal(cause),
            })?;

        let mut session = PlaybackSession::new(connection, self.default_volume);
        session.push(track.clone());
        let session = self.slot.insert(session);

        if let Err(e) = self
            .transport
            .play(&session.connection, &track.source_ref, session.volume)
            .await
        {
            return Err(self.teardown_after_fatal(e).await);
        }
        session.transition(PlayerState::Playing);
        tracing::info!(room = %self.room, %track, "playback session created");
        Ok(Enqueued::Started { track })
    }

    /// Moves to the next track after the transport reported the current
    /// one finished (naturally or via `skip`).
    ///
    /// Pops the head of the queue; if tracks remain the new head starts
    /// playing, otherwise the connection is released and the session
    /// destroyed.
    ///
    /// # Errors
    /// - [`PlaybackError::NoActiveSession`] — the session is already
    ///   gone (a late completion signal; harmless)
    /// - [`PlaybackError::TransportFatal`] — starting the next track
    ///   failed; the session is torn down
    pub async fn advance(&mut self) -> Result<Advanced, PlaybackError> {
        let session = self
            .slot
            .get_mut()
            .ok_or(PlaybackError::NoActiveSession(self.room))?;

        let finished = session.pop_head();
        tracing::debug!(
            room = %self.room,
            finished = finished.as_ref().map(|t| t.title.as_str()),
            "track finished"
        );
        if session.state().is_playing() {
            session.transition(PlayerState::Idle);
        }

        match session.current().cloned() {
            Some(next) => {
                if let Err(e) = self
                    .transport
                    .play(&session.connection, &next.source_ref, session.volume)
                    .await
                {
                    return Err(self.teardown_after_fatal(e).await);
                }
                session.transition(PlayerState::Playing);
                Ok(Advanced::Playing { track: next })
            }
            None => {
                session.transition(PlayerState::Draining);
                let session = self.slot.take().expect("session checked above");
                if let Err(e) = self.transport.leave(&session.connection).await {
                    tracing::debug!(room = %self.room, error = %e, "leave failed while draining");
                }
                tracing::info!(room = %self.room, "queue drained, playback session destroyed");
                Ok(Advanced::Drained)
            }
        }
    }

    /// Skips the current track.
    ///
    /// Only signals the transport to stop it — the next track starts
    /// through the normal completion path (`advance`), never a direct
    /// queue pop, so one code path decides what plays next.
    ///
    /// # Errors
    /// - [`PlaybackError::NoActiveSession`] — nothing to skip
    /// - [`PlaybackError::InvalidState`] — the session exists but is not
    ///   in `Playing`
    pub async fn skip(&mut self) -> Result<(), PlaybackError> {
        let session = self
            .slot
            .get()
            .ok_or(PlaybackError::NoActiveSession(self.room))?;
        if !session.state().is_playing() {
            return Err(PlaybackError::InvalidState(session.state()));
        }

        if let Err(e) = self.transport.stop_current(&session.connection).await {
            return Err(self.teardown_after_fatal(e).await);
        }
        tracing::debug!(room = %self.room, "skip requested");
        Ok(())
    }

    /// Stops playback unconditionally: clears the queue, releases the
    /// connection, destroys the session.
    ///
    /// # Errors
    /// - [`PlaybackError::NoActiveSession`] — nothing to stop
    pub async fn stop(&mut self) -> Result<(), PlaybackError> {
        let mut session = self
            .slot
            .take()
            .ok_or(PlaybackError::NoActiveSession(self.room))?;

        session.clear();
        session.transition(PlayerState::Stopped);
        if let Err(e) = self.transport.leave(&session.connection).await {
            tracing::debug!(room = %self.room, error = %e, "leave failed during stop");
        }
        tracing::info!(room = %self.room, "playback session stopped and destroyed");
        Ok(())
    }

    /// Tears the session down after the transport reported a fatal
    /// error mid-playback. Returns whether a session existed to tear
    /// down (a late error for an already-destroyed session is ignored).
    ///
    /// Never retried automatically — rejoining a possibly-invalid
    /// channel is left to a fresh `enqueue`.
    pub async fn on_transport_error(&mut self, cause: &str) -> bool {
        let Some(session) = self.slot.take() else {
            return false;
        };
        if let Err(e) = self.transport.leave(&session.connection).await {
            tracing::debug!(room = %self.room, error = %e, "leave failed during error teardown");
        }
        tracing::warn!(room = %self.room, %cause, "playback session torn down after transport error");
        true
    }

    /// A read-only snapshot of the queue in play order (head first).
    /// Empty when no session exists.
    pub fn queue_snapshot(&self) -> Vec<Track> {
        self.slot.get().map(PlaybackSession::snapshot).unwrap_or_default()
    }

    /// The currently playing track, if any.
    pub fn current(&self) -> Option<Track> {
        self.slot.get().and_then(|s| s.current().cloned())
    }

    /// The session's state, or `None` when no session exists.
    pub fn state(&self) -> Option<PlayerState> {
        self.slot.get().map(PlaybackSession::state)
    }

    /// Whether a playback session currently exists.
    pub fn is_active(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Common teardown for transport failures inside an operation:
    /// drop the session, release the connection best-effort, and map the
    /// failure into [`PlaybackError::TransportFatal`].
    async fn teardown_after_fatal(&mut self, error: TransportError) -> PlaybackError {
        let cause = error.to_string();
        if let Some(session) = self.slot.take() {
            if let Err(e) = self.transport.leave(&session.connection).await {
                tracing::debug!(room = %self.room, error = %e, "leave failed during teardown");
            }
        }
        tracing::warn!(room = %self.room, %cause, "playback session torn down after transport failure");
        PlaybackError::TransportFatal(cause)
    }
}
