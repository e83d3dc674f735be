//! Random conversation generator
//!
//! Produces scripted sample conversations. All variability is a uniform choice over
//! small fixed pools, so a deterministic `Rng` yields a fixed conversation.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::chat::config::DEFAULT_USER_NAME;

/// Probability that a generated line gets an emoji appended
pub const EMOJI_PROBABILITY: f64 = 0.3;

/// First names for generated contacts
pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Sam",
];

/// Last names for generated contacts
pub const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Lee", "Garcia", "Brown", "Patel", "Kim", "Nguyen",
];

/// Emoji that may be appended to generated lines
pub const EMOJI_POOL: &[&str] = &["😂", "🎉", "👍", "🔥", "😊", "🙌"];

/// Conversation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Colleagues talking shop
    Business,
    /// Small talk
    Casual,
    /// Friends making plans
    Friends,
    /// Customer support exchange
    Support,
}

/// Who speaks a scripted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    Contact,
    User,
}

impl Category {
    /// All categories, in the order used for random selection
    pub const ALL: [Category; 4] = [
        Category::Business,
        Category::Casual,
        Category::Friends,
        Category::Support,
    ];

    /// Parse a category name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "business" => Some(Self::Business),
            "casual" => Some(Self::Casual),
            "friends" => Some(Self::Friends),
            "support" => Some(Self::Support),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Casual => "casual",
            Self::Friends => "friends",
            Self::Support => "support",
        }
    }

    fn script(&self) -> &'static [(Speaker, &'static str)] {
        use Speaker::{Contact, User};
        match self {
            Self::Business => &[
                (Contact, "Hi, do you have a minute to go over the Q3 numbers?"),
                (User, "Sure, I just finished reviewing the report."),
                (Contact, "Revenue is up 12% but costs grew faster than expected."),
                (User, "Let's flag that in tomorrow's meeting."),
                (Contact, "Agreed. I'll prepare the slides tonight."),
            ],
            Self::Casual => &[
                (Contact, "Hey! How's it going?"),
                (User, "Pretty good, just got back from a run."),
                (Contact, "Nice, I should really start doing that too"),
                (User, "Come with me on Saturday!"),
            ],
            Self::Friends => &[
                (Contact, "Are we still on for tonight?"),
                (User, "Of course! 8pm at the usual place?"),
                (Contact, "Perfect, I'll bring the board games"),
                (User, "Can't wait, it's going to be epic"),
                (Contact, "See you there!"),
            ],
            Self::Support => &[
                (User, "Hi, my order still hasn't arrived."),
                (Contact, "Sorry to hear that! Could you share your order number?"),
                (User, "Sure, it's #48213."),
                (Contact, "Thanks! It looks like it ships tomorrow morning."),
                (User, "Great, thanks for the quick help."),
            ],
        }
    }
}

/// A generated conversation ready to load into the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConversation {
    /// Category the script came from
    pub category: Category,
    /// Generated contact name
    pub contact_name: String,
    /// Name used for the user's lines
    pub user_name: String,
    /// Newline-joined `"{sender}: {text}"` lines
    pub conversation_text: String,
}

/// Generate a scripted conversation
///
/// Random draws happen in a fixed order: the category (only when `category` is
/// `None`), the first name, the last name, then per line an emoji coin flip followed
/// by the emoji pick when the flip succeeds.
pub fn generate_random<R: Rng + ?Sized>(category: Option<Category>, rng: &mut R) -> GeneratedConversation {
    let category = match category {
        Some(category) => category,
        None => *Category::ALL.choose(rng).unwrap_or(&Category::Casual),
    };

    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Johnson");
    let contact_name = format!("{} {}", first, last);
    let user_name = DEFAULT_USER_NAME.to_string();

    let lines: Vec<String> = category
        .script()
        .iter()
        .map(|(speaker, text)| {
            let sender = match speaker {
                Speaker::Contact => contact_name.as_str(),
                Speaker::User => user_name.as_str(),
            };
            let mut line = format!("{}: {}", sender, text);
            if rng.gen_bool(EMOJI_PROBABILITY) {
                if let Some(emoji) = EMOJI_POOL.choose(rng) {
                    line.push(' ');
                    line.push_str(emoji);
                }
            }
            line
        })
        .collect();

    tracing::debug!("Generated {} conversation with {}", category.name(), contact_name);

    GeneratedConversation {
        category,
        contact_name,
        user_name,
        conversation_text: lines.join("\n"),
    }
}

/// Generate a conversation from a random category with the thread-local RNG
pub fn generate_random_default() -> GeneratedConversation {
    generate_random(None, &mut rand::thread_rng())
}
