//! Single-session storage for one room and one session kind.

/// Holds at most one session of one kind for one room.
///
/// Every long-lived session the agent owns (a playback queue, a running
/// game) lives in one of these, inside the room's worker. The slot is
/// deliberately not thread-safe on its own: it is owned by exactly one
/// worker task, and all access is serialized by that worker's mailbox.
///
/// `create_if_absent` never fails with an "already exists" error —
/// it returns the existing session and `created = false` instead, so
/// callers branch on the flag to decide whether to send an
/// "already in progress" notice.
#[derive(Debug)]
pub struct SessionSlot<S> {
    session: Option<S>,
}

impl<S> SessionSlot<S> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Returns the session, if one exists.
    pub fn get(&self) -> Option<&S> {
        self.session.as_ref()
    }

    /// Returns the session mutably, if one exists.
    pub fn get_mut(&mut self) -> Option<&mut S> {
        self.session.as_mut()
    }

    /// Looks up the session, creating it with `factory` if absent.
    ///
    /// Returns the session and whether it was just created. The factory
    /// runs only on creation.
    pub fn create_if_absent(&mut self, factory: impl FnOnce() -> S) -> (&mut S, bool) {
        let created = self.session.is_none();
        let session = self.session.get_or_insert_with(factory);
        (session, created)
    }

    /// Stores a session, replacing any existing one, and returns it
    /// mutably.
    pub fn insert(&mut self, session: S) -> &mut S {
        self.session.insert(session)
    }

    /// Removes and returns the session, leaving the slot empty.
    pub fn take(&mut self) -> Option<S> {
        self.session.take()
    }

    /// Whether a session currently exists.
    pub fn is_occupied(&self) -> bool {
        self.session.is_some()
    }
}

impl<S> Default for SessionSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}
