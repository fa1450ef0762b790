//! Room-keyed session state for Botforge.
//!
//! All mutable long-lived state in the agent (playback queues, game
//! sessions) is partitioned by room, and messages for the *same* room
//! must never interleave while messages for *different* rooms run
//! concurrently. This crate provides the two pieces that enforce that:
//!
//! - [`SessionSlot`] — at-most-one session of a given kind for one room,
//!   with lookup-or-create semantics (`create_if_absent` reports whether
//!   it created, so callers can emit "already in progress" notices).
//! - [`SessionRouter`] — maps each room to a dedicated worker task and
//!   forwards events into that worker's mailbox. One single-owner task
//!   per room is the mutual-exclusion mechanism: no locks are held while
//!   a room's event is being processed, and a slow external call inside
//!   one room stalls only that room's queue.
//!
//! # Key types
//!
//! - [`RoomHandler`] — the trait a per-room event handler implements
//! - [`SessionRouter`] — spawns/looks up workers, dispatches events
//! - [`WorkerHandle`] — send events to one running room worker
//! - [`SessionSlot`] — one kind's session storage for one room

mod error;
mod router;
mod slot;
mod worker;

pub use error::RegistryError;
pub use router::SessionRouter;
pub use slot::SessionSlot;
pub use worker::{RoomHandler, WorkerHandle};
