//! Turn-based mini-games for Botforge.
//!
//! Two games share one lifecycle shape (`no game → in progress → no
//! game`), each with at most one session per room:
//!
//! - **Number guessing** ([`NumberGuess`]): a secret in 1–100, strict
//!   too-low/too-high feedback, an attempt counter that only valid
//!   guesses charge.
//! - **Emoji guessing** ([`EmojiGuess`]): an emoji rebus with a
//!   case-insensitive answer and no attempt counter.
//!
//! [`Games`] holds both slots for one room and routes the generic
//! `guess` command: the number game takes precedence when (abnormally)
//! both are active — a fixed, documented tie-break, since the start
//! commands already prevent double activity in normal operation.

mod emoji;
mod error;
mod games;
mod number;

pub use emoji::{EmojiGuess, Puzzle, PUZZLES};
pub use error::GameError;
pub use games::{GameKind, Games, GuessOutcome};
pub use number::{NumberGuess, NumberOutcome};
