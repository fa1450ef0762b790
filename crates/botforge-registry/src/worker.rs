//! Room worker: an isolated Tokio task that owns one room's sessions.
//!
//! Each room runs in its own task, receiving events through an mpsc
//! mailbox. The single consumer is what serializes a room: two events
//! for the same room are handled strictly in arrival order, and an
//! `await` inside the handler (a provider call, a transport join) delays
//! only this room's mailbox.

use botforge_protocol::RoomId;
use tokio::sync::mpsc;

use crate::RegistryError;

/// A per-room event handler.
///
/// The router creates one handler per room (via its factory) and moves
/// it into that room's worker task; the handler owns all of the room's
/// session state. `handle` is called once per event, in order.
///
/// The future must be `Send` because the worker task may migrate
/// between runtime threads.
pub trait RoomHandler: Send + 'static {
    /// The event type this handler processes.
    type Event: Send + 'static;

    /// Processes one event to completion.
    fn handle(&mut self, event: Self::Event) -> impl std::future::Future<Output = ()> + Send;
}

/// Handle to a running room worker. Cheap to clone — it's an
/// `mpsc::Sender` wrapper.
#[derive(Debug)]
pub struct WorkerHandle<E> {
    room: RoomId,
    sender: mpsc::Sender<E>,
}

// Manual impl: a derived Clone would demand `E: Clone`, which the
// events themselves don't need.
impl<E> Clone for WorkerHandle<E> {
    fn clone(&self) -> Self {
        Self {
            room: self.room,
            sender: self.sender.clone(),
        }
    }
}

impl<E> WorkerHandle<E> {
    /// The room this worker serves.
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Enqueues an event onto the worker's mailbox.
    ///
    /// Waits if the mailbox is full (bounded channel — backpressure,
    /// not loss). Fails only if the worker has stopped.
    pub async fn dispatch(&self, event: E) -> Result<(), RegistryError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| RegistryError::RoomUnavailable(self.room))
    }
}

/// Spawns a worker task for one room and returns a handle to it.
///
/// The worker runs until every handle is dropped, then drains its
/// mailbox and exits.
pub(crate) fn spawn_worker<H: RoomHandler>(
    room: RoomId,
    mut handler: H,
    mailbox_size: usize,
) -> WorkerHandle<H::Event> {
    let (tx, mut rx) = mpsc::channel(mailbox_size);

    tokio::spawn(async move {
        tracing::debug!(%room, "room worker started");
        while let Some(event) = rx.recv().await {
            handler.handle(event).await;
        }
        tracing::debug!(%room, "room worker stopped");
    });

    WorkerHandle { room, sender: tx }
}
