//! Session router: maps rooms to their workers and routes events.

use std::collections::HashMap;

use botforge_protocol::RoomId;
use tokio::sync::Mutex;

use crate::worker::spawn_worker;
use crate::{RegistryError, RoomHandler, WorkerHandle};

/// Default mailbox size for room workers.
pub(crate) const DEFAULT_MAILBOX_SIZE: usize = 64;

/// Routes events to per-room workers, spawning them on first use.
///
/// This is the entry point for all session mutations: every inbound
/// message and every transport callback goes through
/// [`dispatch`](Self::dispatch), which finds (or lazily creates) the
/// room's worker and enqueues the event on its mailbox.
///
/// The internal map lock is held only while looking up or inserting a
/// handle — never across event processing — so rooms make progress
/// independently and there is no cross-room locking.
pub struct SessionRouter<H: RoomHandler> {
    workers: Mutex<HashMap<RoomId, WorkerHandle<H::Event>>>,
    factory: Box<dyn Fn(RoomId) -> H + Send + Sync>,
    mailbox_size: usize,
}

impl<H: RoomHandler> SessionRouter<H> {
    /// Creates a router with the default mailbox size.
    ///
    /// `factory` builds the handler for a room the first time an event
    /// arrives for it.
    pub fn new(factory: impl Fn(RoomId) -> H + Send + Sync + 'static) -> Self {
        Self::with_mailbox_size(DEFAULT_MAILBOX_SIZE, factory)
    }

    /// Creates a router with an explicit per-room mailbox size.
    pub fn with_mailbox_size(
        mailbox_size: usize,
        factory: impl Fn(RoomId) -> H + Send + Sync + 'static,
    ) -> Self {
        Self {
            workers: Mutex::new(HashMap::new()),
            factory: Box::new(factory),
            mailbox_size,
        }
    }

    /// Routes an event to its room's worker, spawning the worker if this
    /// is the first event for the room.
    ///
    /// Events dispatched from one task to one room are processed in
    /// dispatch order; events for different rooms are processed
    /// concurrently.
    pub async fn dispatch(&self, room: RoomId, event: H::Event) -> Result<(), RegistryError> {
        // Clone the handle out so the map lock is not held while the
        // (possibly blocking) mailbox send happens.
        let handle = {
            let mut workers = self.workers.lock().await;
            workers
                .entry(room)
                .or_insert_with(|| {
                    tracing::info!(%room, "spawning room worker");
                    spawn_worker(room, (self.factory)(room), self.mailbox_size)
                })
                .clone()
        };

        handle.dispatch(event).await
    }

    /// Drops a room's worker handle; the worker exits after draining its
    /// mailbox. Returns whether a worker existed.
    pub async fn shutdown(&self, room: RoomId) -> bool {
        let removed = self.workers.lock().await.remove(&room).is_some();
        if removed {
            tracing::info!(%room, "room worker shut down");
        }
        removed
    }

    /// Drops every worker handle, letting all workers drain and exit.
    pub async fn shutdown_all(&self) {
        let mut workers = self.workers.lock().await;
        let count = workers.len();
        workers.clear();
        tracing::info!(count, "all room workers shut down");
    }

    /// The number of rooms that currently have a worker.
    pub async fn room_count(&self) -> usize {
        self.workers.lock().await.len()
    }
}
