//! Integration tests for the session router using a recording handler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use botforge_protocol::RoomId;
use botforge_registry::{RoomHandler, SessionRouter};
use tokio::sync::Semaphore;

/// Records every event it sees into a shared log, optionally blocking
/// on a gate first (to simulate a slow external call inside one room).
/// The gate starts with zero permits; tests release events one by one
/// with `add_permits`.
struct Recorder {
    room: RoomId,
    log: Arc<Mutex<Vec<(RoomId, u32)>>>,
    gate: Option<Arc<Semaphore>>,
}

impl RoomHandler for Recorder {
    type Event = u32;

    async fn handle(&mut self, event: u32) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate never closes").forget();
        }
        self.log.lock().unwrap().push((self.room, event));
    }
}

fn rid(id: u64) -> RoomId {
    RoomId(id)
}

/// Builds a router whose workers record into `log`; the room listed in
/// `gated` blocks on the semaphore before recording anything.
fn recording_router(
    log: Arc<Mutex<Vec<(RoomId, u32)>>>,
    gated: Option<(RoomId, Arc<Semaphore>)>,
) -> SessionRouter<Recorder> {
    SessionRouter::new(move |room| Recorder {
        room,
        log: log.clone(),
        gate: gated
            .as_ref()
            .filter(|(gated_room, _)| *gated_room == room)
            .map(|(_, gate)| gate.clone()),
    })
}

#[tokio::test]
async fn test_dispatch_spawns_worker_lazily() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let router = recording_router(log.clone(), None);

    assert_eq!(router.room_count().await, 0);
    router.dispatch(rid(1), 10).await.unwrap();
    assert_eq!(router.room_count().await, 1);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(*log.lock().unwrap(), vec![(rid(1), 10)]);
}

#[tokio::test]
async fn test_dispatch_reuses_worker_for_same_room() {
    let spawned = Arc::new(AtomicUsize::new(0));
    let log = Arc::new(Mutex::new(Vec::new()));

    let router = {
        let spawned = spawned.clone();
        let log = log.clone();
        SessionRouter::new(move |room| {
            spawned.fetch_add(1, Ordering::SeqCst);
            Recorder {
                room,
                log: log.clone(),
                gate: None,
            }
        })
    };

    for event in 0..5 {
        router.dispatch(rid(1), event).await.unwrap();
    }

    assert_eq!(spawned.load(Ordering::SeqCst), 1, "one worker per room");
    assert_eq!(router.room_count().await, 1);
}

#[tokio::test]
async fn test_same_room_events_processed_in_dispatch_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let router = recording_router(log.clone(), None);

    for event in 1..=20 {
        router.dispatch(rid(1), event).await.unwrap();
    }

    tokio::time::sleep(Duration::from_millis(20)).await;

    let recorded: Vec<u32> = log.lock().unwrap().iter().map(|(_, e)| *e).collect();
    assert_eq!(recorded, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_stalled_room_does_not_block_other_rooms() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(Semaphore::new(0));
    let router = recording_router(log.clone(), Some((rid(1), gate.clone())));

    // Room 1's worker blocks inside its handler; room 2 must still run.
    router.dispatch(rid(1), 100).await.unwrap();
    router.dispatch(rid(2), 200).await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(
        *log.lock().unwrap(),
        vec![(rid(2), 200)],
        "room 2 should finish while room 1 is stalled"
    );

    // Unblock room 1 — its event completes afterwards.
    gate.add_permits(1);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(log.lock().unwrap().len(), 2);
    assert_eq!(log.lock().unwrap()[1], (rid(1), 100));
}

#[tokio::test]
async fn test_stalled_room_preserves_its_own_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(Semaphore::new(0));
    let router = recording_router(log.clone(), Some((rid(1), gate.clone())));

    router.dispatch(rid(1), 1).await.unwrap();
    router.dispatch(rid(1), 2).await.unwrap();

    // Release both queued events.
    gate.add_permits(2);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(*log.lock().unwrap(), vec![(rid(1), 1), (rid(1), 2)]);
}

#[tokio::test]
async fn test_shutdown_removes_worker() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let router = recording_router(log.clone(), None);

    router.dispatch(rid(1), 1).await.unwrap();
    assert!(router.shutdown(rid(1)).await);
    assert_eq!(router.room_count().await, 0);

    // Shutting down a room with no worker reports false.
    assert!(!router.shutdown(rid(1)).await);
}

#[tokio::test]
async fn test_dispatch_after_shutdown_spawns_fresh_worker() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let router = recording_router(log.clone(), None);

    router.dispatch(rid(1), 1).await.unwrap();
    router.shutdown(rid(1)).await;

    router.dispatch(rid(1), 2).await.unwrap();
    assert_eq!(router.room_count().await, 1);

    tokio::time::sleep(Duration::from_millis(10)).await;
    let recorded: Vec<u32> = log.lock().unwrap().iter().map(|(_, e)| *e).collect();
    assert_eq!(recorded, vec![1, 2]);
}

#[tokio::test]
async fn test_shutdown_all_clears_every_room() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let router = recording_router(log.clone(), None);

    for room in 1..=3 {
        router.dispatch(rid(room), 0).await.unwrap();
    }
    assert_eq!(router.room_count().await, 3);

    router.shutdown_all().await;
    assert_eq!(router.room_count().await, 0);
}
