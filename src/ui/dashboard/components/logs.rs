//! Activity log panel: refreshes, sort changes and exports, newest first.

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use crate::events::{Event, EventType};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

fn type_marker(event_type: EventType) -> Span<'static> {
    match event_type {
        EventType::Success => Span::styled("✔", Style::default().fg(Color::Green)),
        EventType::Error => Span::styled(
            "✖",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        EventType::Refresh => Span::styled("↻", Style::default().fg(Color::Cyan)),
        EventType::Info => Span::styled("·", Style::default().fg(Color::Gray)),
    }
}

fn log_item(event: &Event) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        type_marker(event.event_type),
        Span::raw(" "),
        Span::styled(
            format_compact_timestamp(&event.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {:<8}", event.source.to_string().to_lowercase()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(event.msg.clone(), Style::default().fg(get_source_color(&event.source))),
    ]))
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(" ACTIVITY LOG ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let visible = block.inner(area).height.max(1) as usize;

    let mut items: Vec<ListItem> = state
        .activity_logs
        .iter()
        .rev()
        .filter(|event| event.should_display(state.log_threshold))
        .take(visible)
        .map(log_item)
        .collect();
    if items.is_empty() {
        items.push(ListItem::new(Line::styled(
            "Waiting for the first refresh...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(List::new(items).block(block), area);
}
