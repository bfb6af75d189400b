//! Traffic source share chart
//!
//! Terminal stand-in for a donut chart: one proportional bar per source.

use super::super::super::utils::{TRAFFIC_COLORS, share_percentages};
use crate::data::TRAFFIC_SOURCES;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const LABEL_WIDTH: usize = 9;

pub fn render_traffic_chart(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title(" Traffic Sources · Distribution of traffic sources ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    // label + space + bar + " 100%"
    let bar_space = (block.inner(area).width as usize).saturating_sub(LABEL_WIDTH + 6);
    let shares = share_percentages(&TRAFFIC_SOURCES);

    let lines: Vec<Line> = TRAFFIC_SOURCES
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(i, (source, share))| {
            let color = TRAFFIC_COLORS[i % TRAFFIC_COLORS.len()];
            let filled = (bar_space as u64 * share / 100) as usize;
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", source.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    format!(" {}%", share),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
