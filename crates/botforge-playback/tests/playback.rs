//! Integration tests for the playback state machine using a fake
//! transport that records every call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use botforge_playback::{
    Advanced, AudioTransport, Enqueued, PlaybackError, Player, PlayerState, Track, TransportError,
};
use botforge_protocol::{ChannelId, RoomId};

// =========================================================================
// Fake transport
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Join { room: u64, channel: u64 },
    Play { source: String, volume: f32 },
    StopCurrent,
    Leave { connection: u64 },
}

/// Records calls; failures can be scripted per operation.
#[derive(Default)]
struct FakeTransport {
    calls: Mutex<Vec<Call>>,
    next_connection: AtomicU64,
    join_error: Mutex<Option<TransportError>>,
    play_error: Mutex<Option<TransportError>>,
}

impl FakeTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn fail_next_join(&self, error: TransportError) {
        *self.join_error.lock().unwrap() = Some(error);
    }

    fn fail_next_play(&self, error: TransportError) {
        *self.play_error.lock().unwrap() = Some(error);
    }
}

impl AudioTransport for FakeTransport {
    type Connection = u64;

    async fn join(&self, room: RoomId, channel: ChannelId) -> Result<u64, TransportError> {
        if let Some(error) = self.join_error.lock().unwrap().take() {
            return Err(error);
        }
        self.calls.lock().unwrap().push(Call::Join {
            room: room.0,
            channel: channel.0,
        });
        Ok(self.next_connection.fetch_add(1, Ordering::SeqCst))
    }

    async fn play(&self, _conn: &u64, source_ref: &str, volume: f32) -> Result<(), TransportError> {
        if let Some(error) = self.play_error.lock().unwrap().take() {
            return Err(error);
        }
        self.calls.lock().unwrap().push(Call::Play {
            source: source_ref.to_string(),
            volume,
        });
        Ok(())
    }

    async fn stop_current(&self, _conn: &u64) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(Call::StopCurrent);
        Ok(())
    }

    async fn leave(&self, conn: &u64) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(Call::Leave { connection: *conn });
        Ok(())
    }
}

// =========================================================================
// Helpers
// =========================================================================

const ROOM: RoomId = RoomId(1);
const CHANNEL: ChannelId = ChannelId(10);

fn track(title: &str) -> Track {
    Track::new(title, format!("ref://{title}"))
}

fn player(transport: &Arc<FakeTransport>) -> Player<FakeTransport> {
    Player::new(ROOM, transport.clone(), 0.5)
}

fn titles(player: &Player<FakeTransport>) -> Vec<String> {
    player.queue_snapshot().into_iter().map(|t| t.title).collect()
}

// =========================================================================
// enqueue
// =========================================================================

#[tokio::test]
async fn test_enqueue_on_empty_creates_session_and_plays() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    let result = player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();

    assert_eq!(result, Enqueued::Started { track: track("a") });
    assert_eq!(player.state(), Some(PlayerState::Playing));
    assert_eq!(titles(&player), vec!["a"]);
    assert_eq!(
        transport.calls(),
        vec![
            Call::Join { room: 1, channel: 10 },
            Call::Play { source: "ref://a".into(), volume: 0.5 },
        ]
    );
}

#[tokio::test]
async fn test_enqueue_without_voice_channel_fails_without_session() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    let result = player.enqueue(track("a"), None).await;

    assert!(matches!(result, Err(PlaybackError::NoVoiceChannel)));
    assert!(!player.is_active(), "no session may be created");
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_enqueue_join_permission_denied_fails_without_session() {
    let transport = FakeTransport::new();
    transport.fail_next_join(TransportError::PermissionDenied);
    let mut player = player(&transport);

    let result = player.enqueue(track("a"), Some(CHANNEL)).await;

    assert!(matches!(result, Err(PlaybackError::MissingPermission)));
    assert!(!player.is_active());
}

#[tokio::test]
async fn test_enqueue_join_no_channel_maps_to_no_voice_channel() {
    let transport = FakeTransport::new();
    transport.fail_next_join(TransportError::NoChannel);
    let mut player = player(&transport);

    let result = player.enqueue(track("a"), Some(CHANNEL)).await;

    assert!(matches!(result, Err(PlaybackError::NoVoiceChannel)));
    assert!(!player.is_active());
}

#[tokio::test]
async fn test_enqueue_on_existing_session_appends_without_side_effects() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    let calls_after_first = transport.calls().len();

    let result = player.enqueue(track("b"), Some(CHANNEL)).await.unwrap();

    assert_eq!(result, Enqueued::Queued { track: track("b"), position: 2 });
    assert_eq!(player.state(), Some(PlayerState::Playing));
    assert_eq!(titles(&player), vec!["a", "b"]);
    assert_eq!(
        transport.calls().len(),
        calls_after_first,
        "appending must not touch the transport"
    );
}

#[tokio::test]
async fn test_enqueue_preserves_fifo_order() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    for title in ["a", "b", "c", "d"] {
        player.enqueue(track(title), Some(CHANNEL)).await.unwrap();
    }

    assert_eq!(titles(&player), vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_enqueue_without_channel_works_when_session_exists() {
    // The requester's voice channel only matters when creating the
    // session; appending needs no channel.
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();

    let result = player.enqueue(track("b"), None).await.unwrap();
    assert_eq!(result, Enqueued::Queued { track: track("b"), position: 2 });
}

#[tokio::test]
async fn test_enqueue_first_play_failure_tears_session_down() {
    let transport = FakeTransport::new();
    transport.fail_next_play(TransportError::Fatal("stream died".into()));
    let mut player = player(&transport);

    let result = player.enqueue(track("a"), Some(CHANNEL)).await;

    assert!(matches!(result, Err(PlaybackError::TransportFatal(_))));
    assert!(!player.is_active());
    // The half-acquired connection was released.
    assert!(transport.calls().contains(&Call::Leave { connection: 0 }));
}

// =========================================================================
// advance
// =========================================================================

#[tokio::test]
async fn test_advance_with_remaining_tracks_plays_new_head() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    player.enqueue(track("b"), Some(CHANNEL)).await.unwrap();

    let result = player.advance().await.unwrap();

    assert_eq!(result, Advanced::Playing { track: track("b") });
    assert_eq!(titles(&player), vec!["b"]);
    assert_eq!(player.state(), Some(PlayerState::Playing));
    assert!(transport
        .calls()
        .contains(&Call::Play { source: "ref://b".into(), volume: 0.5 }));
}

#[tokio::test]
async fn test_advance_on_last_track_destroys_session() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();

    let result = player.advance().await.unwrap();

    assert_eq!(result, Advanced::Drained);
    assert!(!player.is_active());
    assert!(player.queue_snapshot().is_empty());
    assert!(transport.calls().contains(&Call::Leave { connection: 0 }));
}

#[tokio::test]
async fn test_advance_after_destruction_reports_no_active_session() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    player.advance().await.unwrap();

    // A second completion signal for the same room is idempotent.
    let result = player.advance().await;
    assert!(matches!(result, Err(PlaybackError::NoActiveSession(r)) if r == ROOM));
}

#[tokio::test]
async fn test_advance_play_failure_tears_session_down() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    player.enqueue(track("b"), Some(CHANNEL)).await.unwrap();

    transport.fail_next_play(TransportError::Fatal("stream died".into()));
    let result = player.advance().await;

    assert!(matches!(result, Err(PlaybackError::TransportFatal(_))));
    assert!(!player.is_active());
}

// =========================================================================
// skip
// =========================================================================

#[tokio::test]
async fn test_skip_signals_transport_without_popping_queue() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    player.enqueue(track("b"), Some(CHANNEL)).await.unwrap();

    player.skip().await.unwrap();

    // The queue is untouched until the completion signal arrives.
    assert_eq!(titles(&player), vec!["a", "b"]);
    assert!(transport.calls().contains(&Call::StopCurrent));

    // Completion arrives through the normal path.
    let result = player.advance().await.unwrap();
    assert_eq!(result, Advanced::Playing { track: track("b") });
}

#[tokio::test]
async fn test_skip_without_session_reports_no_active_session() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    let result = player.skip().await;
    assert!(matches!(result, Err(PlaybackError::NoActiveSession(_))));
}

// =========================================================================
// stop
// =========================================================================

#[tokio::test]
async fn test_stop_clears_queue_and_releases_transport() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    for title in ["a", "b", "c"] {
        player.enqueue(track(title), Some(CHANNEL)).await.unwrap();
    }

    player.stop().await.unwrap();

    assert!(!player.is_active());
    assert!(player.queue_snapshot().is_empty());
    assert!(transport.calls().contains(&Call::Leave { connection: 0 }));
}

#[tokio::test]
async fn test_stop_without_session_reports_no_active_session() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    let result = player.stop().await;
    assert!(matches!(result, Err(PlaybackError::NoActiveSession(_))));
}

#[tokio::test]
async fn test_session_can_be_recreated_after_stop() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();
    player.stop().await.unwrap();

    let result = player.enqueue(track("b"), Some(CHANNEL)).await.unwrap();

    assert_eq!(result, Enqueued::Started { track: track("b") });
    assert_eq!(player.state(), Some(PlayerState::Playing));
}

// =========================================================================
// transport errors
// =========================================================================

#[tokio::test]
async fn test_on_transport_error_tears_session_down() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);
    player.enqueue(track("a"), Some(CHANNEL)).await.unwrap();

    assert!(player.on_transport_error("connection reset").await);
    assert!(!player.is_active());
    assert!(transport.calls().contains(&Call::Leave { connection: 0 }));
}

#[tokio::test]
async fn test_on_transport_error_without_session_is_ignored() {
    let transport = FakeTransport::new();
    let mut player = player(&transport);

    assert!(!player.on_transport_error("late error").await);
}
