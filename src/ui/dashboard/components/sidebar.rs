//! Dashboard sidebar component
//!
//! Renders the brand, navigation list and user profile

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Navigation entries as (label, short glyph). Only the first is active.
pub const NAVIGATION: [(&str, &str); 7] = [
    ("Dashboard", "⌂"),
    ("Analytics", "▤"),
    ("Campaigns", "◎"),
    ("Users", "☺"),
    ("Reports", "↗"),
    ("Data Sources", "≡"),
    ("Settings", "⚙"),
];

/// Width of the sidebar in columns for the given collapse state.
pub fn sidebar_width(collapsed: bool) -> u16 {
    if collapsed { 7 } else { 26 }
}

pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let collapsed = state.sidebar_collapsed;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let brand = if collapsed {
        vec![Line::from(Span::styled(
            "▥",
            Style::default().fg(Color::Cyan),
        ))]
    } else {
        vec![
            Line::from(Span::styled(
                "ADmyBRAND",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Insights", Style::default().fg(Color::Gray))),
        ]
    };
    f.render_widget(Paragraph::new(brand), chunks[0]);

    let nav_lines: Vec<Line> = NAVIGATION
        .iter()
        .enumerate()
        .map(|(i, (label, glyph))| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let text = if collapsed {
                format!(" {} ", glyph)
            } else {
                format!(" {} {} ", glyph, label)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    f.render_widget(Paragraph::new(nav_lines), chunks[1]);

    let profile = if collapsed {
        vec![Line::from(Span::styled(
            "JD",
            Style::default().fg(Color::LightBlue),
        ))]
    } else {
        vec![
            Line::from(Span::styled(
                "John Doe",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "john@admybrand.com",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };
    f.render_widget(
        Paragraph::new(profile).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[2],
    );
}
