//! Templates screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::templates::TemplateFilter;
use crate::tui::app::App;
use super::helpers::{base_style, muted_color};

/// Renders the screen
pub fn render_templates(f: &mut Frame, app: &App) {
    let size = f.size();
    let theme = app.studio.theme_preference();
    f.render_widget(Block::default().style(base_style(theme)), size);

    if let Some(screen) = &app.templates_screen {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Filter tabs
                Constraint::Min(5),    // Template list
                Constraint::Length(3), // Help
            ])
            .split(size);

        let title = Paragraph::new("Templates")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let active = screen.filter();
        let tabs: Vec<Span> = TemplateFilter::all()
            .into_iter()
            .map(|filter| {
                let style = if filter == active {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(muted_color(theme))
                };
                Span::styled(format!(" {} ", filter.label()), style)
            })
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(tabs))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Category")),
            chunks[1],
        );

        let items: Vec<ListItem> = screen
            .visible()
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let style = if i == screen.selected_index {
                    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{} [{}]", template.name, template.category.name()),
                        style,
                    )),
                    Line::from(Span::styled(
                        format!("  {}", template.description),
                        Style::default().fg(muted_color(theme)),
                    )),
                ])
            })
            .collect();
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Use Template")),
            chunks[2],
        );

        let help = Paragraph::new("←/→: Category | ↑/↓: Select | Enter: Use template | b/Esc: Back")
            .style(Style::default().fg(muted_color(theme)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
