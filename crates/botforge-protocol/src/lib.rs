//! Message grammar for Botforge.
//!
//! This crate defines the "language" the agent speaks with its host
//! platform:
//!
//! - **Identity types** ([`RoomId`], [`UserId`], [`ChannelId`],
//!   [`MessageHandle`]) — opaque keys for rooms, users, voice channels,
//!   and sent messages.
//! - **Events** ([`MessageEvent`]) — one inbound user message.
//! - **Commands** ([`classify`], [`Command`], [`CommandName`]) — the
//!   stateless parser that splits raw text into a command invocation or
//!   free-form chat.
//! - **Replies** ([`Reply`], [`Embed`]) — outbound content handed to the
//!   responder.
//!
//! # Architecture
//!
//! The protocol layer is pure data and pure functions. It knows nothing
//! about sessions, rooms' state, or collaborators — it only classifies
//! text and names things.
//!
//! ```text
//! Event source (raw text) → Protocol (Command | Chat) → Registry (room worker)
//! ```

mod command;
mod event;
mod ids;
mod reply;

pub use command::{classify, Command, CommandName, Inbound};
pub use event::MessageEvent;
pub use ids::{ChannelId, MessageHandle, RoomId, UserId};
pub use reply::{Embed, EmbedField, Reply};
