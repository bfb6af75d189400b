//! Dashboard metric card components
//!
//! Renders the welcome banner and the four headline metric cards

use super::super::state::DashboardState;
use super::super::utils::change_color;
use crate::data::{MetricSnapshot, MetricTitle};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn title_glyph(title: MetricTitle) -> &'static str {
    match title {
        MetricTitle::TotalRevenue => "$",
        MetricTitle::ActiveUsers => "☺",
        MetricTitle::Conversions => "◎",
        MetricTitle::GrowthRate => "↗",
    }
}

pub fn render_welcome(f: &mut Frame, area: ratatui::layout::Rect) {
    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome back, John!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here's what's happening with your marketing campaigns today.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(welcome, area);
}

/// Render the metric cards side by side, one column per metric.
pub fn render_metric_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    if state.metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, state.metrics.len() as u32); state.metrics.len()];
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, chunk) in state.metrics.iter().zip(card_chunks.iter()) {
        render_metric_card(f, *chunk, metric);
    }
}

pub fn render_metric_card(f: &mut Frame, area: ratatui::layout::Rect, metric: &MetricSnapshot) {
    let lines = vec![
        Line::from(Span::styled(
            metric.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            metric.change.clone(),
            Style::default().fg(change_color(metric.change_type)),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} {} ", title_glyph(metric.title), metric.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
