//! The emoji guessing game.

use botforge_protocol::UserId;
use rand::Rng;

/// One emoji rebus: the prompt users see and the answer they must type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub prompt: &'static str,
    pub answer: &'static str,
}

/// The built-in puzzle table.
pub const PUZZLES: &[Puzzle] = &[
    Puzzle { prompt: "👨‍🏫📚", answer: "Teacher" },
    Puzzle { prompt: "🍎🍏", answer: "Apple" },
    Puzzle { prompt: "🍕🎉", answer: "Pizza Party" },
    Puzzle { prompt: "🚗💨", answer: "Fast Car" },
    Puzzle { prompt: "👻🎃", answer: "Halloween" },
    Puzzle { prompt: "👑🦁", answer: "Lion King" },
    Puzzle { prompt: "🌧️🌈", answer: "Rainbow" },
    Puzzle { prompt: "📚🐛", answer: "Bookworm" },
    Puzzle { prompt: "💡🧠", answer: "Bright Idea" },
    Puzzle { prompt: "🧊☕", answer: "Iced Coffee" },
];

/// One room's emoji guessing session.
///
/// Unlike the number game there is no attempt counter: wrong guesses
/// just leave the session (and its puzzle) untouched.
#[derive(Debug, Clone)]
pub struct EmojiGuess {
    puzzle: Puzzle,
    initiator: UserId,
}

impl EmojiGuess {
    /// Starts a game with a randomly chosen puzzle.
    pub fn start(initiator: UserId) -> Self {
        let index = rand::rng().random_range(0..PUZZLES.len());
        Self::with_puzzle(initiator, PUZZLES[index])
    }

    /// Starts a game with a known puzzle. Intended for tests.
    pub fn with_puzzle(initiator: UserId, puzzle: Puzzle) -> Self {
        Self { puzzle, initiator }
    }

    /// Whether `guess` matches the answer.
    ///
    /// Case-insensitive, whitespace-preserved: `"TEACHER"` matches
    /// `"Teacher"`, but `"te acher"` does not.
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.puzzle.answer.to_lowercase()
    }

    pub fn puzzle(&self) -> Puzzle {
        self.puzzle
    }

    pub fn initiator(&self) -> UserId {
        self.initiator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(answer: &'static str) -> EmojiGuess {
        EmojiGuess::with_puzzle(UserId(1), Puzzle { prompt: "❓", answer })
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let game = game("Teacher");
        assert!(game.matches("TEACHER"));
        assert!(game.matches("teacher"));
        assert!(game.matches("TeAcHeR"));
    }

    #[test]
    fn test_matches_preserves_whitespace() {
        let game = game("Pizza Party");
        assert!(game.matches("pizza party"));
        assert!(!game.matches("pizzaparty"));
        assert!(!game.matches("pizza  party"));
    }

    #[test]
    fn test_wrong_guess_does_not_alter_puzzle() {
        let game = game("Apple");
        assert!(!game.matches("banana"));
        assert_eq!(game.puzzle().answer, "Apple");
    }

    #[test]
    fn test_start_picks_from_the_table() {
        for _ in 0..50 {
            let game = EmojiGuess::start(UserId(1));
            assert!(PUZZLES.contains(&game.puzzle()));
        }
    }
}
