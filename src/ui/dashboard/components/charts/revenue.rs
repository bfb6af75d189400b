//! Revenue trend line chart

use crate::data::{ChartPoint, REVENUE_DATA};
use crate::utils::format::{format_currency, format_kilo_dollars};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Y-axis bounds with some headroom above the highest value, rounded to 10k.
pub fn revenue_bounds(points: &[ChartPoint]) -> [f64; 2] {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let min = points.iter().map(|p| p.value).fold(max, f64::min);
    let step = 10_000.0;
    let low = ((min * 0.9) / step).floor() * step;
    let high = ((max * 1.05) / step).ceil() * step;
    [low.max(0.0), high.max(step)]
}

pub fn render_revenue_chart(f: &mut Frame, area: ratatui::layout::Rect) {
    let data: Vec<(f64, f64)> = REVENUE_DATA
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();

    let [low, high] = revenue_bounds(&REVENUE_DATA);
    let latest = REVENUE_DATA.last().map(|p| p.value as u64).unwrap_or(0);

    let dataset = Dataset::default()
        .name(format!("Revenue {}", format_currency(latest)))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .data(&data);

    let x_labels: Vec<Span> = REVENUE_DATA
        .iter()
        .map(|p| Span::styled(p.label, Style::default().fg(Color::Gray)))
        .collect();
    let y_labels: Vec<Span> = [low, (low + high) / 2.0, high]
        .iter()
        .map(|v| Span::styled(format_kilo_dollars(*v), Style::default().fg(Color::Gray)))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Revenue Trend · Monthly revenue performance ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (REVENUE_DATA.len().saturating_sub(1)) as f64])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([low, high])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(chart, area);
}
