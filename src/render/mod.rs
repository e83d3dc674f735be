//! Chat rendering
//!
//! Converts a configuration plus parsed messages into an HTML fragment:
//! - `format` - Escaping, link and emphasis formatting of message text
//! - `skin` - Per-platform palettes and decorative rules
//! - `page` - Standalone HTML document wrapper used for page captures

pub mod format;
pub mod page;
pub mod skin;

use rand::Rng;
use std::fmt::Write;

use crate::chat::{Configuration, Message};
pub use format::{format_text, html_escape};
pub use skin::Skin;

/// Delivery marker on outgoing WhatsApp bubbles
pub const DELIVERY_TICKS: &str = "✓✓";
/// Reaction marker on Instagram bubbles that contain emoji
pub const EMOJI_REACTION: &str = "❤️";

/// Optional decorative inputs to the renderer
///
/// The default carries no randomness, so rendering is byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Background colour for the avatar placeholder (`#RRGGBB`)
    pub avatar_color: Option<String>,
}

impl RenderOptions {
    /// Options with a random avatar colour drawn from `rng`
    pub fn with_random_avatar<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color: u32 = rng.gen_range(0..=0xFF_FFFF);
        Self {
            avatar_color: Some(format!("#{:06X}", color)),
        }
    }
}

/// Render with default (deterministic) options
pub fn render_chat(config: &Configuration, messages: &[Message]) -> String {
    render(config, messages, &RenderOptions::default())
}

/// Render a conversation as a platform-styled HTML fragment
pub fn render(config: &Configuration, messages: &[Message], options: &RenderOptions) -> String {
    let skin = Skin::for_platform(config.platform);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="mockify-chat platform-{platform} theme-{theme}" data-platform="{platform}" data-theme="{theme}">"#,
        platform = config.platform.slug(),
        theme = config.theme.slug(),
    );

    render_header(&mut html, config, &skin, options);

    html.push_str(r#"<div class="chat-messages">"#);
    for message in messages {
        render_bubble(&mut html, message, &skin);
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="chat-input"><input type="text" placeholder="{placeholder}" disabled><button type="button" disabled>➤</button></div>"#,
        placeholder = html_escape(skin.input_placeholder),
    );

    html.push_str("</div>");

    tracing::debug!(
        "Rendered {} messages with {} skin ({} bytes)",
        messages.len(),
        config.platform.slug(),
        html.len()
    );

    html
}

fn render_header(html: &mut String, config: &Configuration, skin: &Skin, options: &RenderOptions) {
    let avatar_style = options
        .avatar_color
        .as_ref()
        .map(|color| format!(r#" style="background-color:{}""#, html_escape(color)))
        .unwrap_or_default();

    let avatar_content = if skin.shows_avatar_initial() {
        avatar_initial(&config.contact_name)
    } else {
        String::new()
    };

    let _ = write!(
        html,
        r#"<div class="chat-header"><div class="chat-avatar"{style}>{avatar}</div><div class="chat-contact"><div class="chat-name">{name}</div><div class="chat-status">{status}</div></div></div>"#,
        style = avatar_style,
        avatar = html_escape(&avatar_content),
        name = html_escape(&config.contact_name),
        status = html_escape(&config.status_text),
    );
}

fn render_bubble(html: &mut String, message: &Message, skin: &Skin) {
    let _ = write!(
        html,
        r#"<div class="chat-bubble {side}"><div class="bubble-text">{text}</div><div class="bubble-meta"><span class="bubble-time">{time}</span>"#,
        side = message.side(),
        text = format_text(&message.text),
        time = html_escape(&message.time),
    );

    if skin.shows_delivery_ticks() && message.is_from_current_user {
        let _ = write!(html, r#"<span class="bubble-ticks">{}</span>"#, DELIVERY_TICKS);
    }
    if skin.shows_emoji_reaction() && message.has_emoji {
        let _ = write!(html, r#"<span class="bubble-reaction">{}</span>"#, EMOJI_REACTION);
    }

    html.push_str("</div></div>");
}

/// First character of a name, upper-cased (empty for an empty name)
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
