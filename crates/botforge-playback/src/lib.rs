//! Audio playback sessions for Botforge.
//!
//! One room has at most one [`PlaybackSession`]: a FIFO track queue bound
//! to an exclusively-owned voice transport connection. The session exists
//! exactly while the room has a live connection or a pending queue —
//! created by the first successful `enqueue`, destroyed when the queue
//! drains, on explicit `stop`, or when the transport reports a fatal
//! error.
//!
//! # Key types
//!
//! - [`Player`] — one room's playback state machine (enqueue, advance,
//!   skip, stop)
//! - [`PlaybackSession`] / [`PlayerState`] — the session record and its
//!   lifecycle states
//! - [`AudioTransport`] — the voice-connection collaborator trait
//! - [`MediaResolver`] — query → track resolution collaborator trait
//! - [`Track`] — one playable item
//!
//! Track completion is *not* an inline callback: the transport reports
//! "track finished" to the host, which routes it back in as an explicit
//! `advance` — so the "what plays next" transition is a single code path
//! and testable without a real transport.

mod error;
mod player;
mod resolver;
mod session;
mod state;
mod track;
mod transport;

pub use error::PlaybackError;
pub use player::{Advanced, Enqueued, Player};
pub use resolver::{MediaResolver, ResolveError};
pub use session::PlaybackSession;
pub use state::PlayerState;
pub use track::Track;
pub use transport::{AudioTransport, TransportError};
