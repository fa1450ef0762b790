//! The per-room game service: both game slots plus guess routing.

use botforge_protocol::{RoomId, UserId};
use botforge_registry::SessionSlot;

use crate::{EmojiGuess, GameError, NumberGuess, NumberOutcome, Puzzle};

/// Which game a start/stop refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Number,
    Emoji,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number guessing"),
            Self::Emoji => write!(f, "emoji guessing"),
        }
    }
}

/// Outcome of a generic `guess`, after routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Number game: strictly below the secret.
    TooLow { attempts: u32 },

    /// Number game: strictly above the secret.
    TooHigh { attempts: u32 },

    /// Number game solved — the session was destroyed.
    NumberCorrect { secret: u32, attempts: u32 },

    /// Emoji game: wrong answer, the session stays active.
    EmojiIncorrect,

    /// Emoji game solved — the session was destroyed.
    EmojiCorrect { answer: &'static str },
}

/// One room's game state: the two independent session slots and the
/// routing for the shared `guess` command.
///
/// Owned by the room's worker, so all operations are serialized with
/// the room's other events. The two slots are independent data — the
/// mutual exclusivity of the games is command-routing policy, not a
/// structural constraint, and `guess` resolves the (abnormal) case of
/// both being active with a fixed tie-break: number game first.
pub struct Games {
    room: RoomId,
    number: SessionSlot<NumberGuess>,
    emoji: SessionSlot<EmojiGuess>,
}

impl Games {
    /// Creates the game state for one room, with no active games.
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            number: SessionSlot::new(),
            emoji: SessionSlot::new(),
        }
    }

    /// Starts a number game.
    ///
    /// # Errors
    /// [`GameError::AlreadyInProgress`] if one is already running —
    /// the existing game is left untouched.
    pub fn start_number(&mut self, initiator: UserId) -> Result<(), GameError> {
        let (_, created) = self
            .number
            .create_if_absent(|| NumberGuess::start(initiator));
        if !created {
            return Err(GameError::AlreadyInProgress(GameKind::Number));
        }
        tracing::info!(room = %self.room, %initiator, "number game started");
        Ok(())
    }

    /// Starts an emoji game and returns the chosen puzzle for display.
    ///
    /// # Errors
    /// [`GameError::AlreadyInProgress`] if one is already running.
    pub fn start_emoji(&mut self, initiator: UserId) -> Result<Puzzle, GameError> {
        let (game, created) = self
            .emoji
            .create_if_absent(|| EmojiGuess::start(initiator));
        if !created {
            return Err(GameError::AlreadyInProgress(GameKind::Emoji));
        }
        let puzzle = game.puzzle();
        tracing::info!(room = %self.room, %initiator, "emoji game started");
        Ok(puzzle)
    }

    /// Routes a generic guess to the active game.
    ///
    /// Precedence is fixed: if a number game exists the guess is
    /// interpreted as an integer for it, even if an emoji game also
    /// exists; the emoji game is only consulted otherwise.
    ///
    /// # Errors
    /// - [`GameError::InvalidGuessFormat`] — number game active but the
    ///   guess doesn't parse; the attempt counter is *not* charged
    /// - [`GameError::NoActiveGame`] — neither game is active
    pub fn guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        if let Some(game) = self.number.get_mut() {
            let value: i64 = raw
                .trim()
                .parse()
                .map_err(|_| GameError::InvalidGuessFormat)?;

            let outcome = match game.guess(value) {
                NumberOutcome::TooLow { attempts } => GuessOutcome::TooLow { attempts },
                NumberOutcome::TooHigh { attempts } => GuessOutcome::TooHigh { attempts },
                NumberOutcome::Correct { secret, attempts } => {
                    GuessOutcome::NumberCorrect { secret, attempts }
                }
            };
            if matches!(outcome, GuessOutcome::NumberCorrect { .. }) {
                self.number.take();
                tracing::info!(room = %self.room, "number game finished");
            }
            return Ok(outcome);
        }

        if let Some(game) = self.emoji.get() {
            if game.matches(raw) {
                let answer = game.puzzle().answer;
                self.emoji.take();
                tracing::info!(room = %self.room, "emoji game finished");
                return Ok(GuessOutcome::EmojiCorrect { answer });
            }
            return Ok(GuessOutcome::EmojiIncorrect);
        }

        Err(GameError::NoActiveGame)
    }

    /// Stops (destroys) the named game.
    ///
    /// # Errors
    /// [`GameError::NoActiveGame`] if no session of that kind exists.
    pub fn stop(&mut self, kind: GameKind) -> Result<(), GameError> {
        let removed = match kind {
            GameKind::Number => self.number.take().is_some(),
            GameKind::Emoji => self.emoji.take().is_some(),
        };
        if !removed {
            return Err(GameError::NoActiveGame);
        }
        tracing::info!(room = %self.room, %kind, "game stopped");
        Ok(())
    }

    /// Whether a game of the given kind is active.
    pub fn is_active(&self, kind: GameKind) -> bool {
        match kind {
            GameKind::Number => self.number.is_occupied(),
            GameKind::Emoji => self.emoji.is_occupied(),
        }
    }

    /// Direct session insertion for tests that need a known secret or
    /// puzzle (or a deliberately abnormal double-active state).
    pub fn insert_number(&mut self, game: NumberGuess) {
        self.number.insert(game);
    }

    /// See [`insert_number`](Self::insert_number).
    pub fn insert_emoji(&mut self, game: EmojiGuess) {
        self.emoji.insert(game);
    }
}
