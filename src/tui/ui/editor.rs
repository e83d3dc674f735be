//! Editor screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::render::{DELIVERY_TICKS, EMOJI_REACTION, Skin};
use crate::tui::app::App;
use crate::tui::types::EditorField;
use super::helpers::{base_style, hex_color, muted_color, severity_color, severity_icon};

/// Renders the screen
pub fn render_editor(f: &mut Frame, app: &App) {
    let size = f.size();
    let theme = app.studio.theme_preference();
    f.render_widget(Block::default().style(base_style(theme)), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Fields + preview
            Constraint::Length(3), // Toast
            Constraint::Length(3), // Help
        ])
        .split(size);

    let title = Paragraph::new("Mockify - Chat Mockup Generator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_fields(f, app, body[0]);
    render_preview(f, app, body[1]);

    // Toast
    let toast = match app.studio.notifier().current() {
        Some(notification) => Paragraph::new(format!(
            "{} {}",
            severity_icon(notification.severity),
            notification.message
        ))
        .style(Style::default().fg(severity_color(notification.severity))),
        None => Paragraph::new(""),
    };
    f.render_widget(
        toast.alignment(Alignment::Center).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    let help = Paragraph::new(
        "Tab: Next field | F2: Random | F3: Copy HTML | F4: Copy text | F5: Share | F6: Screenshot | F7: Light/Dark | F8: Templates | Ctrl-G: Generate | Esc: Quit",
    )
    .style(Style::default().fg(muted_color(theme)))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn field_block(app: &App, field: EditorField, title: String) -> Block<'static> {
    let border = if app.editor.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(muted_color(app.studio.theme_preference()))
    };
    Block::default().borders(Borders::ALL).border_style(border).title(title)
}

fn render_fields(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Conversation
            Constraint::Length(3), // Quick add
            Constraint::Length(3), // Contact
            Constraint::Length(3), // User
            Constraint::Length(3), // Status
            Constraint::Length(3), // Platform
            Constraint::Length(3), // Theme
        ])
        .split(area);

    let config = app.studio.config();

    // Keep the end of the conversation in view while typing
    let conversation = app.studio.conversation();
    let visible_lines = rows[0].height.saturating_sub(2) as usize;
    let line_count = conversation.split('\n').count();
    let skip = line_count.saturating_sub(visible_lines.max(1));
    let conversation_view: Vec<Line> = conversation
        .split('\n')
        .skip(skip)
        .map(|line| Line::from(line.to_string()))
        .collect();
    f.render_widget(
        Paragraph::new(conversation_view).block(field_block(
            app,
            EditorField::Conversation,
            "Conversation (Name: message)".to_string(),
        )),
        rows[0],
    );

    let sender = if app.editor.quick_add_as_user {
        config.current_user_name.as_str()
    } else {
        config.contact_name.as_str()
    };
    f.render_widget(
        Paragraph::new(app.editor.quick_add.as_str()).block(field_block(
            app,
            EditorField::QuickAdd,
            format!("Quick add as {} (Ctrl-T to switch)", sender),
        )),
        rows[1],
    );

    let text_fields = [
        (EditorField::Contact, config.contact_name.as_str(), rows[2]),
        (EditorField::User, config.current_user_name.as_str(), rows[3]),
        (EditorField::Status, config.status_text.as_str(), rows[4]),
    ];
    for (field, value, rect) in text_fields {
        f.render_widget(
            Paragraph::new(value.to_string()).block(field_block(app, field, field.label().to_string())),
            rect,
        );
    }

    f.render_widget(
        Paragraph::new(format!("◀ {} ▶", config.platform.label()))
            .alignment(Alignment::Center)
            .block(field_block(app, EditorField::Platform, "Platform".to_string())),
        rows[5],
    );
    f.render_widget(
        Paragraph::new(format!("◀ {} ▶", config.theme.slug()))
            .alignment(Alignment::Center)
            .block(field_block(app, EditorField::Theme, "Theme".to_string())),
        rows[6],
    );
}

fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let rendered = app.studio.rendered();
    let skin = Skin::for_platform(rendered.config.platform);
    let muted = muted_color(app.studio.theme_preference());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                rendered.config.contact_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", rendered.config.status_text), Style::default().fg(muted)),
        ]),
        Line::from(""),
    ];

    if rendered.messages.is_empty() {
        lines.push(
            Line::from(Span::styled(
                "No messages yet. Type 'Name: message' lines on the left.",
                Style::default().fg(muted),
            ))
            .alignment(Alignment::Center),
        );
    }

    for message in rendered.messages.iter().skip(app.editor.scroll_offset) {
        let (background, foreground, alignment) = if message.is_from_current_user {
            (skin.sent_background, skin.sent_text, Alignment::Right)
        } else {
            (skin.received_background, skin.received_text, Alignment::Left)
        };
        let bubble = Style::default()
            .bg(hex_color(background).unwrap_or(Color::Reset))
            .fg(hex_color(foreground).unwrap_or(Color::Reset));

        let mut meta = vec![Span::styled(message.time.clone(), Style::default().fg(muted))];
        if skin.shows_delivery_ticks() && message.is_from_current_user {
            meta.push(Span::styled(format!(" {}", DELIVERY_TICKS), Style::default().fg(Color::LightBlue)));
        }
        if skin.shows_emoji_reaction() && message.has_emoji {
            meta.push(Span::raw(format!(" {}", EMOJI_REACTION)));
        }

        lines.push(Line::from(Span::styled(format!(" {} ", message.text), bubble)).alignment(alignment));
        lines.push(Line::from(meta).alignment(alignment));
    }

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "{} preview - {} messages",
                    rendered.config.platform.label(),
                    rendered.messages.len()
                )),
        );
    f.render_widget(preview, area);
}
