//! The stateless command parser.
//!
//! Splits raw message text into a command name and argument list when it
//! starts with the configured prefix; otherwise classifies it as
//! free-form chat. Pure functions, no state, no I/O — the routing of a
//! parsed command to a session happens in higher layers.

/// How a raw message should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A prefixed command invocation.
    Command(Command),

    /// Free-form chat, long enough to be worth answering.
    Chat(String),

    /// Nothing to do: empty text, or chat shorter than the minimum
    /// length (very short messages and bare emoji are not answered).
    Ignored,
}

/// A parsed command: a recognized (or unknown) name plus its raw
/// arguments, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: CommandName,
    pub args: Vec<String>,
}

impl Command {
    /// The arguments re-joined with single spaces.
    ///
    /// Several commands treat everything after the name as one value
    /// (an AI prompt, a search query, a guess).
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Every command the agent understands.
///
/// Names are matched case-insensitively. Anything else parses to
/// [`CommandName::Unknown`] and is silently ignored by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Ping,
    Hello,
    Rules,
    Dice,
    Joke,
    Embed,
    AskAi,
    Play,
    Skip,
    Stop,
    Queue,
    StartGuess,
    Guess,
    StopGuess,
    EmojiGuess,
    StopEmojiGuess,
    Rps,
    CoinFlip,
    EightBall,
    Roll,
    Fact,
    Choose,
    Reverse,
    WouldYouRather,
    Insult,
    Unknown,
}

impl CommandName {
    /// Maps a lowercased command word to its name.
    fn parse(name: &str) -> Self {
        match name {
            "ping" => Self::Ping,
            "hello" => Self::Hello,
            "rules" => Self::Rules,
            "dice" => Self::Dice,
            "joke" => Self::Joke,
            "embed" => Self::Embed,
            "askai" => Self::AskAi,
            "play" => Self::Play,
            "skip" => Self::Skip,
            "stop" => Self::Stop,
            "queue" => Self::Queue,
            "startguess" => Self::StartGuess,
            "guess" => Self::Guess,
            "stopguess" => Self::StopGuess,
            "emojiguess" => Self::EmojiGuess,
            "stopemojiguess" => Self::StopEmojiGuess,
            "rps" => Self::Rps,
            "coinflip" => Self::CoinFlip,
            "8ball" => Self::EightBall,
            "roll" => Self::Roll,
            "fact" => Self::Fact,
            "choose" => Self::Choose,
            "reverse" => Self::Reverse,
            "wouldyourather" => Self::WouldYouRather,
            "insult" => Self::Insult,
            _ => Self::Unknown,
        }
    }
}

/// Classifies raw message text.
///
/// - Text starting with `prefix` is parsed as a command: the prefix is
///   stripped, the remainder split on whitespace, the first word
///   lowercased and matched against [`CommandName`].
/// - Anything else is chat — answered only when at least `min_chat_len`
///   characters long, otherwise [`Inbound::Ignored`].
///
/// A bare prefix with no command word is ignored.
pub fn classify(text: &str, prefix: &str, min_chat_len: usize) -> Inbound {
    if let Some(rest) = text.strip_prefix(prefix) {
        let mut words = rest.split_whitespace();
        let Some(name) = words.next() else {
            return Inbound::Ignored;
        };
        return Inbound::Command(Command {
            name: CommandName::parse(&name.to_lowercase()),
            args: words.map(str::to_string).collect(),
        });
    }

    if text.chars().count() < min_chat_len {
        return Inbound::Ignored;
    }
    Inbound::Chat(text.to_string())
}
