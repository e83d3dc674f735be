//! Share links and share payloads
//!
//! A share link carries the whole chat: `mockify://share/{id}#{token}` where the token
//! is URL-safe, unpadded base64 of the CBOR-encoded `SharedChat`.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatTheme, Configuration, Platform};
use crate::{Error, Result};

/// Scheme and path prefix of share links
pub const SHARE_LINK_PREFIX: &str = "mockify://share/";

/// Chat state carried inside a share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedChat {
    /// Contact name
    pub contact_name: String,
    /// User name
    pub user_name: String,
    /// Header status line
    pub status_text: String,
    /// Platform skin
    pub platform: Platform,
    /// Container theme
    pub theme: ChatTheme,
    /// Raw conversation text
    pub conversation: String,
}

impl SharedChat {
    /// Capture a configuration and conversation
    pub fn new(config: &Configuration, conversation: &str) -> Self {
        Self {
            contact_name: config.contact_name.clone(),
            user_name: config.current_user_name.clone(),
            status_text: config.status_text.clone(),
            platform: config.platform,
            theme: config.theme,
            conversation: conversation.to_string(),
        }
    }

    /// Configuration described by this shared chat
    pub fn configuration(&self) -> Configuration {
        Configuration {
            contact_name: self.contact_name.clone(),
            current_user_name: self.user_name.clone(),
            status_text: self.status_text.clone(),
            platform: self.platform,
            theme: self.theme,
        }
    }
}

/// What a share capability receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Share sheet title
    pub title: String,
    /// Plain-text export of the chat
    pub text: String,
    /// Share link that reopens the chat
    pub link: String,
}

/// Build a share link for a chat
pub fn generate_share_link(config: &Configuration, conversation: &str) -> Result<String> {
    let shared = SharedChat::new(config, conversation);

    let cbor = serde_cbor::to_vec(&shared)
        .map_err(|e| Error::CborSerialization(format!("Failed to serialize shared chat: {}", e)))?;

    Ok(format!(
        "{}{}#{}",
        SHARE_LINK_PREFIX,
        uuid::Uuid::new_v4(),
        URL_SAFE_NO_PAD.encode(cbor)
    ))
}

/// Decode a share link back into the chat it carries
pub fn parse_share_link(link: &str) -> Result<SharedChat> {
    let rest = link
        .trim()
        .strip_prefix(SHARE_LINK_PREFIX)
        .ok_or_else(|| Error::ShareLink("missing mockify://share/ prefix".to_string()))?;

    let (id, token) = rest
        .split_once('#')
        .ok_or_else(|| Error::ShareLink("missing chat token".to_string()))?;

    uuid::Uuid::parse_str(id).map_err(|e| Error::ShareLink(format!("invalid share id: {}", e)))?;

    let cbor = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| Error::ShareLink(format!("invalid base64 token: {}", e)))?;

    serde_cbor::from_slice(&cbor)
        .map_err(|e| Error::CborSerialization(format!("Invalid shared chat data: {}", e)))
}
