//! Standalone HTML page around a rendered chat fragment

use crate::chat::Platform;
use crate::render::format::html_escape;
use crate::render::skin::Skin;

/// Base layout shared by every skin; colours come from the skin and theme variables
pub const STYLESHEET: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f8f9fa;display:flex;justify-content:center;padding:24px}
.mockify-chat{width:380px;border-radius:16px;overflow:hidden;background:var(--chat-bg);box-shadow:0 8px 24px rgba(0,0,0,.12)}
.chat-header{display:flex;align-items:center;gap:10px;padding:12px 16px;background:var(--header-bg)}
.chat-avatar{width:40px;height:40px;border-radius:50%;background:#c4c4c4;display:flex;align-items:center;justify-content:center;font-weight:600;color:#fff}
.chat-name{font-weight:600}
.chat-status{font-size:12px;opacity:.7}
.chat-messages{display:flex;flex-direction:column;gap:6px;padding:16px;min-height:300px}
.chat-bubble{max-width:75%;padding:8px 12px;border-radius:14px;font-size:14px;line-height:1.4;word-wrap:break-word}
.chat-bubble.outgoing{align-self:flex-end;background:var(--sent-bg);color:var(--sent-fg)}
.chat-bubble.incoming{align-self:flex-start;background:var(--received-bg);color:var(--received-fg)}
.bubble-meta{display:flex;justify-content:flex-end;gap:4px;font-size:11px;opacity:.7;margin-top:2px}
.bubble-ticks{color:#34B7F1}
.chat-input{display:flex;gap:8px;padding:10px;background:var(--header-bg)}
.chat-input input{flex:1;padding:8px 12px;border:1px solid #ddd;border-radius:20px}
.chat-input button{width:36px;height:36px;border:none;border-radius:50%;background:var(--sent-bg);color:var(--sent-fg)}
.platform-whatsapp .chat-name,.platform-whatsapp .chat-status,.platform-telegram .chat-name,.platform-telegram .chat-status{color:#fff}
"#;

/// Theme overrides; `.mockify-chat.theme-*` outranks the `.platform-*` palettes
pub const THEME_RULES: &str = r#"
.mockify-chat.theme-dark{--chat-bg:#0b141a;--header-bg:#1f2c34;--received-bg:#202c33;--received-fg:#e9edef}
.mockify-chat.theme-dark .chat-name,.mockify-chat.theme-dark .chat-status{color:#e9edef}
.mockify-chat.theme-blue{--sent-bg:#1e88e5;--sent-fg:#fff;--header-bg:#bbdefb}
.mockify-chat.theme-pink{--sent-bg:#ec407a;--sent-fg:#fff;--header-bg:#f8bbd0}
"#;

/// Full page stylesheet: base layout, one palette rule per skin, then themes
pub fn page_stylesheet() -> String {
    let mut css = String::from(STYLESHEET);
    for platform in Platform::all() {
        css.push_str(&Skin::for_platform(platform).css_rule());
        css.push('\n');
    }
    css.push_str(THEME_RULES);
    css
}

/// Wrap a rendered fragment into a complete HTML document
pub fn standalone_document(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n",
        title = html_escape(title),
        style = page_stylesheet(),
        fragment = fragment,
    )
}
