//! The outbound responder collaborator trait.
//!
//! Botforge formats what to say; the responder owns how it reaches the
//! platform. The `edit` operation exists for the placeholder pattern:
//! send "thinking…", call the slow provider, then edit the same message
//! in place with the real answer.

use botforge_protocol::{MessageHandle, Reply, RoomId};

/// Errors the responder can report.
#[derive(Debug, thiserror::Error)]
pub enum RespondError {
    /// The platform rejected or dropped the outbound message.
    #[error("responder unavailable: {0}")]
    Unavailable(String),
}

/// Emits outbound messages into a room.
///
/// # Example
///
/// ```rust
/// use botforge::{Responder, RespondError};
/// use botforge_protocol::{MessageHandle, Reply, RoomId};
///
/// /// Prints every reply to stdout.
/// struct ConsoleResponder;
///
/// impl Responder for ConsoleResponder {
///     async fn send(
///         &self,
///         room: RoomId,
///         reply: Reply,
///     ) -> Result<MessageHandle, RespondError> {
///         println!("[{room}] {reply:?}");
///         Ok(MessageHandle(0))
///     }
///
///     async fn edit(
///         &self,
///         handle: MessageHandle,
///         reply: Reply,
///     ) -> Result<(), RespondError> {
///         println!("[edit {handle}] {reply:?}");
///         Ok(())
///     }
/// }
/// ```
pub trait Responder: Send + Sync + 'static {
    /// Sends a new message into a room and returns a handle to it.
    fn send(
        &self,
        room: RoomId,
        reply: Reply,
    ) -> impl std::future::Future<Output = Result<MessageHandle, RespondError>> + Send;

    /// Replaces the content of a previously sent message.
    fn edit(
        &self,
        handle: MessageHandle,
        reply: Reply,
    ) -> impl std::future::Future<Output = Result<(), RespondError>> + Send;
}
