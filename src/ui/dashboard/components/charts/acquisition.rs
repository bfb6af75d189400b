//! User acquisition bar chart

use crate::data::{ACQUISITION_DATA, ChartPoint};
use crate::utils::format::format_thousands;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};

/// Bar label that fits `width` columns, e.g. `Organic Search` -> `Organ`.
fn short_label(label: &str, width: usize) -> String {
    label.chars().take(width).collect()
}

/// Bar width that spreads `count` bars over `inner_width` columns.
pub fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let gap = 1;
    let total_gaps = (count as u16).saturating_sub(1) * gap;
    (inner_width.saturating_sub(total_gaps) / count as u16).max(1)
}

fn bars(points: &[ChartPoint], width: u16) -> Vec<Bar<'static>> {
    points
        .iter()
        .map(|p| {
            let value = p.value as u64;
            Bar::default()
                .value(value)
                .text_value(format_thousands(value))
                .label(Line::from(short_label(p.label, width as usize)))
                .style(Style::default().fg(Color::Magenta))
                .value_style(Style::default().fg(Color::Black).bg(Color::Magenta))
        })
        .collect()
}

pub fn render_acquisition_chart(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title(" User Acquisition · Users by acquisition channel ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let width = bar_width(block.inner(area).width, ACQUISITION_DATA.len());

    let bars = bars(&ACQUISITION_DATA, width);
    let max = ACQUISITION_DATA
        .iter()
        .map(|p| p.value as u64)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(max)
        .bar_gap(1)
        .bar_width(width);

    f.render_widget(chart, area);
}
