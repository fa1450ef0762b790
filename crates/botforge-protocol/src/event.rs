//! Inbound events delivered by the platform event source.

use serde::{Deserialize, Serialize};

use crate::{ChannelId, RoomId, UserId};

/// One inbound user message, as delivered by the event source.
///
/// This is the agent's entire view of the outside world: everything the
/// core does starts from one of these (plus the audio transport's
/// completion callbacks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// The room the message was posted in.
    pub room: RoomId,

    /// Who sent it.
    pub author: UserId,

    /// The author's display name, used verbatim in replies
    /// ("Congratulations, {name}!").
    pub author_name: String,

    /// The raw message text, before any parsing.
    pub text: String,

    /// The voice channel the author is currently in, if any.
    ///
    /// Playback needs this to know where to connect; `None` means the
    /// author is not in a voice channel and `play` must be refused.
    pub voice_channel: Option<ChannelId>,
}

impl MessageEvent {
    /// Convenience constructor for a text-only event (no voice channel).
    pub fn text(room: RoomId, author: UserId, author_name: &str, text: &str) -> Self {
        Self {
            room,
            author,
            author_name: author_name.to_string(),
            text: text.to_string(),
            voice_channel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_event_round_trip() {
        let event = MessageEvent {
            room: RoomId(1),
            author: UserId(2),
            author_name: "alice".into(),
            text: "!ping".into(),
            voice_channel: Some(ChannelId(3)),
        };
        let bytes = serde_json::to_vec(&event).unwrap();
        let decoded: MessageEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(event, decoded);
    }

    #[test]
    fn test_text_constructor_has_no_voice_channel() {
        let event = MessageEvent::text(RoomId(1), UserId(2), "bob", "hi");
        assert_eq!(event.voice_channel, None);
        assert_eq!(event.author_name, "bob");
    }
}
