//! Stateless command handlers: pure text in, text out.
//!
//! None of these touch session state; they are plain functions so the
//! dispatcher stays a thin routing layer and every reply text lives in
//! one place.

use botforge_protocol::Embed;
use rand::Rng;

/// The server rules text.
pub(crate) const RULES: &str = "**Server Rules:**\n\
1. Be respectful and kind to all members.\n\
2. No spamming or excessive use of caps.\n\
3. Keep discussions civil and constructive.\n\
4. No NSFW content.\n\
5. Follow the platform's Terms of Service.";

const EIGHT_BALL_RESPONSES: &[&str] = &[
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes, definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

const FACTS: &[&str] = &[
    "A group of owls is called a parliament.",
    "Honey never spoils.",
    "The shortest war in history lasted 38 to 45 minutes.",
    "Octopuses have three hearts.",
    "A \"jiffy\" is an actual unit of time: 1/100th of a second.",
    "The average person walks the equivalent of three times around the world in a lifetime.",
    "Bananas are berries, but strawberries aren't.",
    "The Earth's core is as hot as the surface of the sun.",
    "A crocodile cannot stick its tongue out.",
    "It is impossible for most people to lick their own elbow.",
    "A cat has 32 muscles in each ear.",
    "Slugs have four noses.",
];

const WOULD_YOU_RATHER: &[&str] = &[
    "Would you rather be able to fly or be invisible?",
    "Would you rather have unlimited money or unlimited wishes?",
    "Would you rather fight 100 duck-sized horses or one horse-sized duck?",
    "Would you rather live without music or live without movies?",
    "Would you rather be able to talk to animals or speak all human languages?",
    "Would you rather always be 10 minutes late or always be 20 minutes early?",
    "Would you rather have a constantly refilling snack bowl or a constantly refilling drink cup?",
    "Would you rather be a master of every musical instrument or a master of every sport?",
    "Would you rather have a rewind button or a pause button in your life?",
    "Would you rather be able to teleport anywhere or be able to read minds?",
];

const INSULTS: &[&str] = &[
    "You're about as sharp as a marble.",
    "I've had more intelligent conversations with a brick wall.",
    "Your brain is the size of a pea, and that's an insult to peas.",
    "You're not the sharpest tool in the shed, nor the dullest, just... the one that's slightly rusty.",
    "If your brain was made of chocolate, it wouldn't even fill a thimble.",
    "You're like a broken pencil... pointless.",
    "I've seen better comebacks from a toaster.",
    "Were you born on a highway? Because that's where most accidents happen.",
    "You're a few fries short of a Happy Meal.",
    "You have the personality of a damp rag.",
];

fn pick(options: &[&str]) -> String {
    options[rand::rng().random_range(0..options.len())].to_string()
}

/// `!dice <sides>` — one roll of an N-sided die.
pub(crate) fn dice(args: &[String]) -> String {
    let sides: Option<u32> = args.first().and_then(|a| a.parse().ok());
    match sides {
        Some(sides) if sides > 0 => {
            let roll = rand::rng().random_range(1..=sides);
            format!("🎲 You rolled a **{roll}** on a {sides}-sided die!")
        }
        _ => "Please specify a valid number of sides for the dice (e.g., `!dice 6` or `!dice 20`)."
            .to_string(),
    }
}

/// `!roll XdY` — X dice with Y sides each, summed.
pub(crate) fn roll(args: &[String]) -> String {
    let Some((num_dice, sides)) = args.first().and_then(|a| parse_roll_spec(a)) else {
        return "Please use the format `!roll XdY` (e.g., `!roll 2d6` for two 6-sided dice)."
            .to_string();
    };
    if !(1..=10).contains(&num_dice) || !(1..=100).contains(&sides) {
        return "Please roll between 1 and 10 dice, each with 1 to 100 sides.".to_string();
    }

    let mut rng = rand::rng();
    let rolls: Vec<u32> = (0..num_dice).map(|_| rng.random_range(1..=sides)).collect();
    let total: u32 = rolls.iter().sum();
    let listing = rolls
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" + ");
    format!("🎲 Rolling {num_dice}d{sides}: {listing} = **{total}**")
}

/// Parses `"XdY"` (case-insensitive `d`) into `(X, Y)`.
fn parse_roll_spec(spec: &str) -> Option<(u32, u32)> {
    let (num_dice, sides) = spec.split_once(['d', 'D'])?;
    Some((num_dice.parse().ok()?, sides.parse().ok()?))
}

/// `!rps <rock|paper|scissors>`.
pub(crate) fn rps(args: &[String]) -> String {
    const CHOICES: [&str; 3] = ["rock", "paper", "scissors"];

    let Some(user) = args.first().map(|a| a.to_lowercase()) else {
        return "Please choose rock, paper, or scissors (e.g., `!rps rock`).".to_string();
    };
    if !CHOICES.contains(&user.as_str()) {
        return "Please choose rock, paper, or scissors (e.g., `!rps rock`).".to_string();
    }

    let bot = CHOICES[rand::rng().random_range(0..CHOICES.len())];
    if user == bot {
        format!("It's a tie! Both chose **{user}**.")
    } else if matches!(
        (user.as_str(), bot),
        ("rock", "scissors") | ("paper", "rock") | ("scissors", "paper")
    ) {
        format!("You win! You chose **{user}** and I chose **{bot}**.")
    } else {
        format!("I win! You chose **{user}** and I chose **{bot}**.")
    }
}

/// `!coinflip`.
pub(crate) fn coin_flip() -> String {
    let result = if rand::rng().random_range(0..2) == 0 {
        "Heads"
    } else {
        "Tails"
    };
    format!("🪙 The coin landed on: **{result}**!")
}

/// `!8ball <question>`.
pub(crate) fn eight_ball(question: &str) -> String {
    if question.is_empty() {
        return "Ask the 8-Ball a yes/no question! (e.g., `!8ball Will I win the lottery?`)"
            .to_string();
    }
    format!(
        "🎱 **Question:** \"{question}\"\n**8-Ball says:** \"{}\"",
        pick(EIGHT_BALL_RESPONSES)
    )
}

/// `!fact`.
pub(crate) fn fact() -> String {
    format!("💡 **Did you know?** {}", pick(FACTS))
}

/// `!choose a, b, c` — picks one of the comma-separated items.
pub(crate) fn choose(rest: &str) -> String {
    let items: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    if items.len() < 2 {
        return "Please provide at least two comma-separated items for me to choose from \
                (e.g., `!choose apple, banana, orange`)."
            .to_string();
    }
    let choice = items[rand::rng().random_range(0..items.len())];
    format!("🤔 I choose: **{choice}**!")
}

/// `!reverse <text>`.
pub(crate) fn reverse(rest: &str) -> String {
    if rest.is_empty() {
        return "Please provide some text for me to reverse (e.g., `!reverse hello world`)."
            .to_string();
    }
    let reversed: String = rest.chars().rev().collect();
    format!("🔄 Reversed text: **{reversed}**")
}

/// `!wouldyourather`.
pub(crate) fn would_you_rather() -> String {
    format!("🤔 **Would you rather...** {}", pick(WOULD_YOU_RATHER))
}

/// `!insult [target]` — lighthearted; falls back to the author when no
/// target is named.
pub(crate) fn insult(target: &str, author_name: &str) -> String {
    let target = if target.is_empty() { author_name } else { target };
    format!("Hey {target}, {}", pick(INSULTS))
}

/// `!embed` — the bot-information card.
pub(crate) fn bot_info() -> Embed {
    Embed::new("Bot Information")
        .description("An automation agent for your chat server.")
        .color(0x0099FF)
        .field("Commands", "Responds to prefixed commands and casual chat.")
        .inline_field("Music", "Queues and plays audio in voice channels.")
        .inline_field("Games", "Number guessing and emoji guessing, per room.")
        .inline_field("AI", "Generative answers via `!askai` or plain chat.")
        .footer("Powered by Botforge")
}
