//! Built-in conversation templates

use serde::{Deserialize, Serialize};

/// Template category used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    /// Work conversations
    Business,
    /// Jokes and memes
    Funny,
    /// Dating app chats
    Dating,
    /// Over-the-top drama
    Drama,
    /// Social media chatter
    Social,
}

impl TemplateCategory {
    /// Lowercase tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Funny => "funny",
            Self::Dating => "dating",
            Self::Drama => "drama",
            Self::Social => "social",
        }
    }
}

/// Category filter for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateFilter {
    /// Show every template
    #[default]
    All,
    /// Show one category
    Only(TemplateCategory),
}

impl TemplateFilter {
    /// Filters in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::All,
            Self::Only(TemplateCategory::Business),
            Self::Only(TemplateCategory::Funny),
            Self::Only(TemplateCategory::Dating),
            Self::Only(TemplateCategory::Drama),
            Self::Only(TemplateCategory::Social),
        ]
    }

    /// Label shown on the filter tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.name(),
        }
    }

    /// Whether a template passes the filter
    pub fn matches(&self, template: &Template) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => template.category == *category,
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Category tag
    pub category: TemplateCategory,
    /// One-line description
    pub description: &'static str,
}

const CATALOG: &[Template] = &[
    Template {
        id: 1,
        name: "Business Deal",
        category: TemplateCategory::Business,
        description: "Professional conversation between colleagues discussing a project",
    },
    Template {
        id: 2,
        name: "Funny Memes",
        category: TemplateCategory::Funny,
        description: "Friends sharing hilarious memes and jokes",
    },
    Template {
        id: 3,
        name: "Dating App",
        category: TemplateCategory::Dating,
        description: "Awkward yet funny dating app conversation",
    },
    Template {
        id: 4,
        name: "Drama Alert",
        category: TemplateCategory::Drama,
        description: "Over-the-top dramatic conversation full of emotions",
    },
    Template {
        id: 5,
        name: "Social Media Hype",
        category: TemplateCategory::Social,
        description: "Friends discussing viral social media trends",
    },
    Template {
        id: 6,
        name: "Tech Support",
        category: TemplateCategory::Business,
        description: "Frustrated user talking to tech support",
    },
    Template {
        id: 7,
        name: "Secret Admirer",
        category: TemplateCategory::Drama,
        description: "Mysterious admirer confessing feelings",
    },
    Template {
        id: 8,
        name: "Group Project",
        category: TemplateCategory::Business,
        description: "Students planning a group project last minute",
    },
];

/// Script speakers; `You` maps to the user name, `Friend` to the contact name
const YOU: &str = "You";
const FRIEND: &str = "Friend";

/// Every template in catalog order
pub fn catalog() -> &'static [Template] {
    CATALOG
}

/// Templates passing a filter, in catalog order
pub fn filter(filter: TemplateFilter) -> Vec<Template> {
    CATALOG.iter().filter(|t| filter.matches(t)).copied().collect()
}

/// Look up a template by id
pub fn find(id: u32) -> Option<Template> {
    CATALOG.iter().find(|t| t.id == id).copied()
}

fn script(id: u32) -> Option<&'static [(&'static str, &'static str)]> {
    let lines: &'static [(&'static str, &'static str)] = match id {
        1 => &[
            (YOU, "Hi John, do you have a minute to discuss the Q3 projections?"),
            (FRIEND, "Sure, I just finished reviewing the numbers."),
            (YOU, "Great! I think we need to adjust our targets based on the market trends."),
            (FRIEND, "Agreed. I've prepared a presentation for tomorrow's meeting."),
        ],
        2 => &[
            (FRIEND, "OMG you have to see this meme 😂"),
            (YOU, "LOL where do you find these?"),
            (FRIEND, "The internet is a magical place 🧙"),
            (YOU, "I'm sending this to everyone I know"),
        ],
        3 => &[
            (YOU, "So... you come here often?"),
            (FRIEND, "Just looking for my soulmate 👀"),
            (YOU, "Found them yet?"),
            (FRIEND, "Maybe... 😏"),
        ],
        4 => &[
            (FRIEND, "I CANNOT believe what just happened!!!"),
            (YOU, "What?? Tell me everything!"),
            (FRIEND, "It's a long story... my life is literally a movie right now"),
            (YOU, "OMG I need all the tea ☕"),
        ],
        _ => return None,
    };
    Some(lines)
}

/// Conversation text for a template
///
/// Returns `None` for an unknown id. Templates without a script of their own reuse
/// the script of template 1.
pub fn conversation_for(id: u32, contact_name: &str, user_name: &str) -> Option<String> {
    find(id)?;
    let lines = script(id).or_else(|| script(1))?;

    let text = lines
        .iter()
        .map(|(speaker, text)| {
            let sender = if *speaker == YOU { user_name } else { contact_name };
            format!("{}: {}", sender, text)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(text)
}
