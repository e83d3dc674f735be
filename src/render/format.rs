//! Message text formatting: escaping, links and emphasis

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL regex pattern is valid"));

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("bold regex pattern is valid"));

static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([^_\n]+)_").expect("italic regex pattern is valid"));

/// Escape text for embedding in HTML content or a quoted attribute
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format message text as HTML
///
/// Order matters: the text is escaped, then bare URLs are turned into links, and
/// only the text between URLs gets `*bold*` and then `_italic_` emphasis. Markers
/// inside a URL are therefore never interpreted.
pub fn format_text(text: &str) -> String {
    let escaped = html_escape(text);
    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;

    for url in URL_RE.find_iter(&escaped) {
        out.push_str(&emphasize(&escaped[last..url.start()]));
        // Already escaped; escaping again would turn &amp; into &amp;amp;
        out.push_str(&format!(
            r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#,
            url = url.as_str()
        ));
        last = url.end();
    }
    out.push_str(&emphasize(&escaped[last..]));

    out
}

fn emphasize(segment: &str) -> String {
    if segment.is_empty() {
        return String::new();
    }
    let bold = BOLD_RE.replace_all(segment, "<strong>$1</strong>");
    ITALIC_RE.replace_all(&bold, "<em>$1</em>").into_owned()
}
