//! Plain-text export

/// Plain-text rendition of a chat: `"Chat with {contact}:\n\n{conversation}"`
pub fn plain_text_export(contact_name: &str, conversation_text: &str) -> String {
    format!("Chat with {}:\n\n{}", contact_name, conversation_text)
}
