//! Error types for the game layer.

use crate::GameKind;

/// Errors that can occur during game operations.
///
/// All of these become user-visible notices; none change any session
/// state.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A start was requested while a session of the same kind exists.
    #[error("a {0} game is already in progress")]
    AlreadyInProgress(GameKind),

    /// The action requires a game session that does not exist.
    #[error("no active game")]
    NoActiveGame,

    /// A number-game guess that does not parse as an integer.
    /// The attempt counter is not charged.
    #[error("guess is not a number")]
    InvalidGuessFormat,
}
