//! The agent: public entry points and builder.

use std::sync::Arc;
use std::time::Duration;

use botforge_playback::{AudioTransport, MediaResolver};
use botforge_protocol::{MessageEvent, RoomId};
use botforge_registry::SessionRouter;

use crate::handler::{RoomEvent, RoomHost};
use crate::{AgentConfig, AgentError, Responder, TextProvider};

/// The chat automation agent.
///
/// Owns the session router and, through it, every room's worker and
/// session state. The host platform drives it through three entry
/// points: [`on_message`](Self::on_message) for inbound user messages,
/// and [`on_track_finished`](Self::on_track_finished) /
/// [`on_transport_error`](Self::on_transport_error) for the audio
/// transport's completion callbacks. All three route through the same
/// per-room mailbox, so a room's state transitions are strictly ordered
/// no matter which entry point they came through.
///
/// # Example
///
/// ```rust,ignore
/// let agent = AgentBuilder::new()
///     .prefix("!")
///     .provider_timeout(Duration::from_secs(10))
///     .build(transport, resolver, provider, responder);
///
/// agent.on_message(event).await?;
/// ```
pub struct Agent<T, M, P, R>
where
    T: AudioTransport,
    M: MediaResolver,
    P: TextProvider,
    R: Responder,
{
    router: SessionRouter<RoomHost<T, M, P, R>>,
}

impl<T, M, P, R> Agent<T, M, P, R>
where
    T: AudioTransport,
    M: MediaResolver,
    P: TextProvider,
    R: Responder,
{
    /// Creates a new builder with default configuration.
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Feeds one inbound user message into its room's worker.
    ///
    /// Returns as soon as the event is enqueued; processing (and any
    /// replies) happen on the room's worker task.
    pub async fn on_message(&self, event: MessageEvent) -> Result<(), AgentError> {
        let room = event.room;
        self.router.dispatch(room, RoomEvent::Message(event)).await?;
        Ok(())
    }

    /// Reports that the room's current track finished (naturally or
    /// after a `skip`). Drives the playback `advance` transition.
    pub async fn on_track_finished(&self, room: RoomId) -> Result<(), AgentError> {
        self.router.dispatch(room, RoomEvent::TrackFinished).await?;
        Ok(())
    }

    /// Reports a fatal transport error for the room. The playback
    /// session is torn down and the room notified; nothing is retried.
    pub async fn on_transport_error(
        &self,
        room: RoomId,
        cause: impl Into<String>,
    ) -> Result<(), AgentError> {
        self.router
            .dispatch(room, RoomEvent::TransportError(cause.into()))
            .await?;
        Ok(())
    }

    /// Shuts down every room worker. Queued events are still drained.
    pub async fn shutdown(&self) {
        self.router.shutdown_all().await;
    }

    /// The number of rooms that currently have a worker.
    pub async fn room_count(&self) -> usize {
        self.router.room_count().await
    }
}

/// Builder for configuring an [`Agent`].
#[derive(Debug, Default)]
pub struct AgentBuilder {
    config: AgentConfig,
}

impl AgentBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            config: AgentConfig::default(),
        }
    }

    /// Sets the command prefix (default `"!"`).
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.config.prefix = prefix.to_string();
        self
    }

    /// Sets the minimum chat length answered (default 5).
    pub fn min_chat_len(mut self, len: usize) -> Self {
        self.config.min_chat_len = len;
        self
    }

    /// Sets the external provider time budget (default 10 s).
    pub fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.config.provider_timeout = timeout;
        self
    }

    /// Sets the per-room worker mailbox size (default 64).
    pub fn mailbox_size(mut self, size: usize) -> Self {
        self.config.mailbox_size = size;
        self
    }

    /// Sets the gain for new playback sessions (default 0.5).
    pub fn default_volume(mut self, volume: f32) -> Self {
        self.config.default_volume = volume;
        self
    }

    /// Builds the agent with its four collaborators.
    pub fn build<T, M, P, R>(
        self,
        transport: Arc<T>,
        resolver: Arc<M>,
        provider: Arc<P>,
        responder: Arc<R>,
    ) -> Agent<T, M, P, R>
    where
        T: AudioTransport,
        M: MediaResolver,
        P: TextProvider,
        R: Responder,
    {
        let config = Arc::new(self.config);
        let mailbox_size = config.mailbox_size;
        let router = SessionRouter::with_mailbox_size(mailbox_size, move |room| {
            RoomHost::new(
                room,
                config.clone(),
                transport.clone(),
                resolver.clone(),
                provider.clone(),
                responder.clone(),
            )
        });
        Agent { router }
    }
}
