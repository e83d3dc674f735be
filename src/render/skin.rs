//! Per-platform colour and markup conventions

use crate::chat::{GenericSkin, Platform};

/// Colour palette and decorative behaviour of one platform skin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    /// Platform this skin renders
    pub platform: Platform,
    /// Outgoing bubble background
    pub sent_background: &'static str,
    /// Outgoing bubble text colour
    pub sent_text: &'static str,
    /// Incoming bubble background
    pub received_background: &'static str,
    /// Incoming bubble text colour
    pub received_text: &'static str,
    /// Header bar background
    pub header_background: &'static str,
    /// Conversation area background
    pub chat_background: &'static str,
    /// Placeholder shown in the disabled input field
    pub input_placeholder: &'static str,
}

const WHATSAPP: Skin = Skin {
    platform: Platform::WhatsApp,
    sent_background: "#DCF8C6",
    sent_text: "#111B21",
    received_background: "#FFFFFF",
    received_text: "#111B21",
    header_background: "#075E54",
    chat_background: "#ECE5DD",
    input_placeholder: "Type a message",
};

const INSTAGRAM: Skin = Skin {
    platform: Platform::Instagram,
    sent_background: "#0095F6",
    sent_text: "#FFFFFF",
    received_background: "#EFEFEF",
    received_text: "#262626",
    header_background: "#FFFFFF",
    chat_background: "#FFFFFF",
    input_placeholder: "Message...",
};

const FACEBOOK: Skin = Skin {
    platform: Platform::Generic(GenericSkin::Facebook),
    sent_background: "#0084FF",
    sent_text: "#FFFFFF",
    received_background: "#F0F0F0",
    received_text: "#050505",
    header_background: "#FFFFFF",
    chat_background: "#FFFFFF",
    input_placeholder: "Aa",
};

const TELEGRAM: Skin = Skin {
    platform: Platform::Generic(GenericSkin::Telegram),
    sent_background: "#EFFDDE",
    sent_text: "#000000",
    received_background: "#FFFFFF",
    received_text: "#000000",
    header_background: "#517DA2",
    chat_background: "#D8E3EC",
    input_placeholder: "Write a message...",
};

const SMS: Skin = Skin {
    platform: Platform::Generic(GenericSkin::Sms),
    sent_background: "#34C759",
    sent_text: "#FFFFFF",
    received_background: "#E5E5EA",
    received_text: "#000000",
    header_background: "#F6F6F6",
    chat_background: "#FFFFFF",
    input_placeholder: "Text Message",
};

impl Skin {
    /// Look up the skin for a platform
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::WhatsApp => WHATSAPP,
            Platform::Instagram => INSTAGRAM,
            Platform::Generic(GenericSkin::Facebook) => FACEBOOK,
            Platform::Generic(GenericSkin::Telegram) => TELEGRAM,
            Platform::Generic(GenericSkin::Sms) => SMS,
        }
    }

    /// Look up a skin by platform name; unknown names use the WhatsApp skin
    pub fn for_name(name: &str) -> Self {
        Self::for_platform(Platform::from_name(name))
    }

    /// Whether outgoing bubbles carry the (decorative) double tick
    pub fn shows_delivery_ticks(&self) -> bool {
        self.platform == Platform::WhatsApp
    }

    /// Whether bubbles containing emoji carry a reaction marker
    pub fn shows_emoji_reaction(&self) -> bool {
        self.platform == Platform::Instagram
    }

    /// Whether the avatar shows the contact's initial
    pub fn shows_avatar_initial(&self) -> bool {
        self.platform == Platform::Instagram
    }

    /// Stylesheet rule setting this skin's palette on `.platform-{slug}`
    ///
    /// Theme rules in the page stylesheet are more specific and override it.
    pub fn css_rule(&self) -> String {
        format!(
            ".platform-{}{{--sent-bg:{};--sent-fg:{};--received-bg:{};--received-fg:{};--header-bg:{};--chat-bg:{}}}",
            self.platform.slug(),
            self.sent_background,
            self.sent_text,
            self.received_background,
            self.received_text,
            self.header_background,
            self.chat_background,
        )
    }
}
