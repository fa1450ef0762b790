//! The per-room event handler: command routing and reply formatting.
//!
//! One `RoomHost` exists per room, owned by that room's worker task, so
//! everything here runs serialized with respect to the room's other
//! events. Domain errors (playback preconditions, game state, provider
//! trouble) are converted into user-visible notices right here and never
//! escape the room; only responder/infrastructure failures bubble up to
//! be logged by `handle`.

use std::sync::Arc;

use botforge_game::{GameError, GameKind, Games, GuessOutcome};
use botforge_playback::{
    Advanced, AudioTransport, Enqueued, MediaResolver, PlaybackError, Player, ResolveError,
};
use botforge_protocol::{
    classify, Command, CommandName, Inbound, MessageEvent, MessageHandle, Reply, RoomId,
};
use botforge_registry::RoomHandler;

use crate::provider::request_with_timeout;
use crate::{fun, AgentConfig, AgentError, Responder, TextProvider};

/// The single apology used when a provider fails or answers with
/// nothing. The two cases are logged differently but read the same.
const PROVIDER_APOLOGY: &str = "Oops! My brain is taking a nap. Try again later!";

/// The prompt used for `!joke` against the text provider.
const JOKE_PROMPT: &str = "Tell me a short, family-friendly joke.";

/// An event routed to one room's worker.
#[derive(Debug)]
pub(crate) enum RoomEvent {
    /// An inbound user message.
    Message(MessageEvent),

    /// The transport finished (or was told to stop) the current track.
    TrackFinished,

    /// The transport failed fatally mid-playback.
    TransportError(String),
}

/// One room's handler: owns the room's playback and game state plus
/// shared handles to the collaborators.
pub(crate) struct RoomHost<T, M, P, R>
where
    T: AudioTransport,
    M: MediaResolver,
    P: TextProvider,
    R: Responder,
{
    room: RoomId,
    config: Arc<AgentConfig>,
    player: Player<T>,
    games: Games,
    resolver: Arc<M>,
    provider: Arc<P>,
    responder: Arc<R>,
}

impl<T, M, P, R> RoomHandler for RoomHost<T, M, P, R>
where
    T: AudioTransport,
    M: MediaResolver,
    P: TextProvider,
    R: Responder,
{
    type Event = RoomEvent;

    fn handle(&mut self, event: RoomEvent) -> impl std::future::Future<Output = ()> + Send {
        async move {
            let result = match event {
                RoomEvent::Message(event) => self.on_message(event).await,
                RoomEvent::TrackFinished => self.on_track_finished().await,
                RoomEvent::TransportError(cause) => self.on_transport_error(&cause).await,
            };
            if let Err(e) = result {
                tracing::warn!(room = %self.room, error = %e, "event handling failed");
            }
        }
    }
}

impl<T, M, P, R> RoomHost<T, M, P, R>
where
    T: AudioTransport,
    M: MediaResolver,
    P: TextProvider,
    R: Responder,
{
    pub(crate) fn new(
        room: RoomId,
        config: Arc<AgentConfig>,
        transport: Arc<T>,
        resolver: Arc<M>,
        provider: Arc<P>,
        responder: Arc<R>,
    ) -> Self {
        Self {
            room,
            player: Player::new(room, transport, config.default_volume),
            games: Games::new(room),
            config,
            resolver,
            provider,
            responder,
        }
    }

    async fn on_message(&mut self, event: MessageEvent) -> Result<(), AgentError> {
        match classify(&event.text, &self.config.prefix, self.config.min_chat_len) {
            Inbound::Ignored => Ok(()),
            Inbound::Chat(text) => self.casual_chat(&text).await,
            Inbound::Command(cmd) => self.run_command(&event, cmd).await,
        }
    }

    async fn run_command(&mut self, event: &MessageEvent, cmd: Command) -> Result<(), AgentError> {
        match cmd.name {
            CommandName::Ping => self.say("Pong!").await,
            CommandName::Hello => {
                self.say(format!(
                    "Hello there, {}! How can I help you today?",
                    event.author_name
                ))
                .await
            }
            CommandName::Rules => self.say(fun::RULES).await,
            CommandName::Dice => self.say(fun::dice(&cmd.args)).await,
            CommandName::Joke => self.joke().await,
            CommandName::Embed => self.reply(Reply::Embed(fun::bot_info())).await,
            CommandName::AskAi => self.ask_ai(&cmd).await,
            CommandName::Play => self.play(event, &cmd).await,
            CommandName::Skip => self.skip().await,
            CommandName::Stop => self.stop_playback().await,
            CommandName::Queue => self.show_queue().await,
            CommandName::StartGuess => self.start_number(event).await,
            CommandName::Guess => self.guess(event, &cmd).await,
            CommandName::StopGuess => self.stop_game(GameKind::Number).await,
            CommandName::EmojiGuess => self.start_emoji(event).await,
            CommandName::StopEmojiGuess => self.stop_game(GameKind::Emoji).await,
            CommandName::Rps => self.say(fun::rps(&cmd.args)).await,
            CommandName::CoinFlip => self.say(fun::coin_flip()).await,
            CommandName::EightBall => self.say(fun::eight_ball(&cmd.rest())).await,
            CommandName::Roll => self.say(fun::roll(&cmd.args)).await,
            CommandName::Fact => self.say(fun::fact()).await,
            CommandName::Choose => self.say(fun::choose(&cmd.rest())).await,
            CommandName::Reverse => self.say(fun::reverse(&cmd.rest())).await,
            CommandName::WouldYouRather => self.say(fun::would_you_rather()).await,
            CommandName::Insult => {
                self.say(fun::insult(&cmd.rest(), &event.author_name)).await
            }
            CommandName::Unknown => {
                tracing::trace!(room = %self.room, "unknown command ignored");
                Ok(())
            }
        }
    }

    // -- playback ---------------------------------------------------------

    async fn play(&mut self, event: &MessageEvent, cmd: &Command) -> Result<(), AgentError> {
        let query = cmd.rest();
        if query.is_empty() {
            return self.say("Please provide a URL or a title to search for.").await;
        }

        let resolved = tokio::time::timeout(
            self.config.provider_timeout,
            self.resolver.resolve(&query),
        )
        .await;

        let track = match resolved {
            Ok(Ok(track)) => track,
            Ok(Err(ResolveError::NotFound)) => {
                return self.say("Could not find anything for that search query.").await;
            }
            Ok(Err(ResolveError::Unavailable(cause))) => {
                tracing::debug!(room = %self.room, %cause, "media resolution failed");
                return self
                    .say("There was an error trying to find that track. Please try again later.")
                    .await;
            }
            Err(_) => {
                tracing::debug!(room = %self.room, "media resolution timed out");
                return self
                    .say("There was an error trying to find that track. Please try again later.")
                    .await;
            }
        };

        match self.player.enqueue(track, event.voice_channel).await {
            Ok(Enqueued::Started { track }) => {
                self.say(format!("🎶 Now playing: **{}**", track.title)).await
            }
            Ok(Enqueued::Queued { track, .. }) => {
                self.say(format!("🎶 **{}** has been added to the queue!", track.title))
                    .await
            }
            Err(PlaybackError::NoVoiceChannel) => {
                self.say("You need to be in a voice channel to play music!").await
            }
            Err(PlaybackError::MissingPermission) => {
                self.say("I need the permissions to join and speak in your voice channel!")
                    .await
            }
            Err(e) => {
                tracing::warn!(room = %self.room, error = %e, "enqueue failed");
                self.say("There was an error trying to play that track.").await
            }
        }
    }

    async fn skip(&mut self) -> Result<(), AgentError> {
        match self.player.skip().await {
            Ok(()) => self.say("⏭️ Skipped the current track.").await,
            Err(PlaybackError::NoActiveSession(_)) => {
                self.say("There is no track currently playing to skip.").await
            }
            Err(PlaybackError::InvalidState(_)) => {
                self.say("Nothing is playing right now.").await
            }
            Err(PlaybackError::TransportFatal(cause)) => {
                self.say(format!("An error occurred while playing: {cause}")).await
            }
            Err(e) => {
                tracing::warn!(room = %self.room, error = %e, "skip failed");
                self.say("There was an error trying to skip that track.").await
            }
        }
    }

    async fn stop_playback(&mut self) -> Result<(), AgentError> {
        match self.player.stop().await {
            Ok(()) => self.say("⏹️ Stopped the music and left the voice channel.").await,
            Err(PlaybackError::NoActiveSession(_)) => {
                self.say("There is no track currently playing to stop.").await
            }
            Err(e) => {
                tracing::warn!(room = %self.room, error = %e, "stop failed");
                self.say("There was an error trying to stop the music.").await
            }
        }
    }

    async fn show_queue(&mut self) -> Result<(), AgentError> {
        let tracks = self.player.queue_snapshot();
        if tracks.is_empty() {
            return self.say("The music queue is empty.").await;
        }
        let listing = tracks
            .iter()
            .enumerate()
            .map(|(index, track)| format!("{}. {}", index + 1, track.title))
            .collect::<Vec<_>>()
            .join("\n");
        self.say(format!("**Current Music Queue:**\n{listing}")).await
    }

    async fn on_track_finished(&mut self) -> Result<(), AgentError> {
        match self.player.advance().await {
            Ok(Advanced::Playing { track }) => {
                self.say(format!("🎶 Now playing: **{}**", track.title)).await
            }
            Ok(Advanced::Drained) => {
                self.say("Finished playing all tracks in the queue. Leaving the voice channel.")
                    .await
            }
            Err(PlaybackError::NoActiveSession(_)) => {
                // A completion signal for a session that was already
                // stopped or drained. Harmless.
                tracing::trace!(room = %self.room, "late track-finished signal ignored");
                Ok(())
            }
            Err(PlaybackError::TransportFatal(cause)) => {
                self.say(format!("An error occurred while playing: {cause}")).await
            }
            Err(e) => {
                tracing::warn!(room = %self.room, error = %e, "advance failed");
                Ok(())
            }
        }
    }

    async fn on_transport_error(&mut self, cause: &str) -> Result<(), AgentError> {
        if self.player.on_transport_error(cause).await {
            return self.say(format!("An error occurred while playing: {cause}")).await;
        }
        Ok(())
    }

    // -- games ------------------------------------------------------------

    async fn start_number(&mut self, event: &MessageEvent) -> Result<(), AgentError> {
        match self.games.start_number(event.author) {
            Ok(()) => {
                self.say(
                    "🔢 I've picked a number between 1 and 100. \
                     Try to guess it with `!guess [your number]`!",
                )
                .await
            }
            Err(_) => {
                self.say(
                    "A \"Guess the Number\" game is already in progress! \
                     Use `!guess [number]` or `!stopguess`.",
                )
                .await
            }
        }
    }

    async fn start_emoji(&mut self, event: &MessageEvent) -> Result<(), AgentError> {
        match self.games.start_emoji(event.author) {
            Ok(puzzle) => {
                self.say(format!(
                    "🤔 **Emoji Guessing Game!**\n\
                     Guess what these emojis represent:\n{}\n\n\
                     Use `!guess [your answer]` to submit your guess.",
                    puzzle.prompt
                ))
                .await
            }
            Err(_) => {
                self.say(
                    "An Emoji Guessing game is already in progress! \
                     Use `!guess [answer]` or `!stopemojiguess`.",
                )
                .await
            }
        }
    }

    async fn guess(&mut self, event: &MessageEvent, cmd: &Command) -> Result<(), AgentError> {
        match self.games.guess(&cmd.rest()) {
            Ok(GuessOutcome::TooLow { attempts }) => {
                self.say(format!(
                    "⬆️ Too low! Try a higher number. (Attempt: {attempts})"
                ))
                .await
            }
            Ok(GuessOutcome::TooHigh { attempts }) => {
                self.say(format!(
                    "⬇️ Too high! Try a lower number. (Attempt: {attempts})"
                ))
                .await
            }
            Ok(GuessOutcome::NumberCorrect { secret, attempts }) => {
                self.say(format!(
                    "🎉 Congratulations, {}! You guessed the number **{secret}** \
                     in **{attempts}** attempts!",
                    event.author_name
                ))
                .await
            }
            Ok(GuessOutcome::EmojiIncorrect) => self.say("❌ Not quite! Try again.").await,
            Ok(GuessOutcome::EmojiCorrect { answer }) => {
                self.say(format!(
                    "🎉 Correct, {}! The answer was **{answer}**!",
                    event.author_name
                ))
                .await
            }
            Err(GameError::InvalidGuessFormat) => {
                self.say("That's not a valid number. Please guess a number!").await
            }
            Err(GameError::NoActiveGame) => {
                self.say(
                    "No active game. Start one with `!startguess` or `!emojiguess`!",
                )
                .await
            }
            Err(e) => {
                tracing::debug!(room = %self.room, error = %e, "guess rejected");
                Ok(())
            }
        }
    }

    async fn stop_game(&mut self, kind: GameKind) -> Result<(), AgentError> {
        let stopped = self.games.stop(kind).is_ok();
        let notice = match (kind, stopped) {
            (GameKind::Number, true) => "✋ The \"Guess the Number\" game has been stopped.",
            (GameKind::Number, false) => "No \"Guess the Number\" game is active to stop.",
            (GameKind::Emoji, true) => "✋ The Emoji Guessing game has been stopped.",
            (GameKind::Emoji, false) => "No Emoji Guessing game is active to stop.",
        };
        self.say(notice).await
    }

    // -- providers --------------------------------------------------------

    async fn casual_chat(&mut self, text: &str) -> Result<(), AgentError> {
        let placeholder = self.send_placeholder("💬 Thinking...").await?;
        let reply = match request_with_timeout(
            self.provider.as_ref(),
            text,
            self.config.provider_timeout,
        )
        .await
        {
            Ok(answer) if !answer.trim().is_empty() => answer,
            Ok(_) => {
                tracing::debug!(room = %self.room, "provider returned an empty chat answer");
                PROVIDER_APOLOGY.to_string()
            }
            Err(e) => {
                tracing::debug!(room = %self.room, error = %e, "chat provider failed");
                PROVIDER_APOLOGY.to_string()
            }
        };
        self.edit(placeholder, reply).await
    }

    async fn ask_ai(&mut self, cmd: &Command) -> Result<(), AgentError> {
        let prompt = cmd.rest();
        if prompt.is_empty() {
            return self
                .say(
                    "Please provide a question for the AI \
                     (e.g., `!askai What is the capital of France?`).",
                )
                .await;
        }

        let placeholder = self.send_placeholder("🧠 AI is thinking...").await?;
        let reply = match request_with_timeout(
            self.provider.as_ref(),
            &prompt,
            self.config.provider_timeout,
        )
        .await
        {
            Ok(answer) if !answer.trim().is_empty() => {
                format!("**Your question:** \"{prompt}\"\n\n**AI's response:**\n{answer}")
            }
            Ok(_) => {
                tracing::debug!(room = %self.room, "provider returned an empty askai answer");
                PROVIDER_APOLOGY.to_string()
            }
            Err(e) => {
                tracing::debug!(room = %self.room, error = %e, "askai provider failed");
                PROVIDER_APOLOGY.to_string()
            }
        };
        self.edit(placeholder, reply).await
    }

    async fn joke(&mut self) -> Result<(), AgentError> {
        let placeholder = self.send_placeholder("Fetching a joke for you...").await?;
        let reply = match request_with_timeout(
            self.provider.as_ref(),
            JOKE_PROMPT,
            self.config.provider_timeout,
        )
        .await
        {
            Ok(joke) if !joke.trim().is_empty() => format!("😂 Here's a joke: {joke}"),
            Ok(_) | Err(_) => {
                tracing::debug!(room = %self.room, "joke provider failed");
                "Could not fetch a joke right now. The joke source might be busy!".to_string()
            }
        };
        self.edit(placeholder, reply).await
    }

    // -- outbound helpers -------------------------------------------------

    async fn say(&mut self, text: impl Into<String>) -> Result<(), AgentError> {
        self.reply(Reply::text(text.into())).await
    }

    async fn reply(&mut self, reply: Reply) -> Result<(), AgentError> {
        self.responder.send(self.room, reply).await?;
        Ok(())
    }

    async fn send_placeholder(&mut self, text: &str) -> Result<MessageHandle, AgentError> {
        Ok(self.responder.send(self.room, Reply::text(text)).await?)
    }

    async fn edit(
        &mut self,
        handle: MessageHandle,
        text: impl Into<String>,
    ) -> Result<(), AgentError> {
        self.responder.edit(handle, Reply::text(text.into())).await?;
        Ok(())
    }
}
