//! Lenient `Name: message` conversation parser

use chrono::{Local, NaiveTime};

use crate::chat::clock;
use crate::chat::message::Message;

/// Parse conversation text using the local wall clock for timestamps
pub fn parse(raw: &str, current_user: &str) -> Vec<Message> {
    parse_at(raw, current_user, Local::now().time())
}

/// Parse conversation text with an explicit "now"
///
/// Blank lines are discarded first; the remaining lines form the line list. A line
/// is kept only when it has a colon and both the sender and the text are non-empty
/// after trimming. Malformed lines are skipped silently, but they still occupy their
/// slot in the line list, so a message's time is `baseline + index` where `index` is
/// its position among all non-blank lines.
pub fn parse_at(raw: &str, current_user: &str, now: NaiveTime) -> Vec<Message> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let messages: Vec<Message> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let (sender, text) = split_line(line)?;
            let minute = clock::minute_for_line(now, lines.len(), index);
            Some(Message::new(sender.to_string(), text.to_string(), current_user, minute))
        })
        .collect();

    tracing::debug!(
        "Parsed {} messages from {} lines ({} dropped)",
        messages.len(),
        lines.len(),
        lines.len() - messages.len()
    );

    messages
}

/// Split a line at its first colon into trimmed sender and text
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (sender, text) = line.split_once(':')?;
    let sender = sender.trim();
    let text = text.trim();

    if sender.is_empty() || text.is_empty() {
        return None;
    }

    Some((sender, text))
}
