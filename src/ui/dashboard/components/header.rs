//! Dashboard header component
//!
//! Renders the title, search box and refresh countdown gauge

use super::super::state::DashboardState;
use super::super::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title, search box and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(50),
            Constraint::Percentage(10),
        ])
        .split(header_chunks[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Monitor your marketing performance",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(title, top_chunks[0]);

    // Search box mirrors the table search; highlighted while editing
    let search_text = state.table.search_text();
    let (search_line, search_color) = if state.search_mode {
        (format!(" {}_", search_text), Color::LightYellow)
    } else if search_text.is_empty() {
        (" Search campaigns... (/)".to_string(), Color::DarkGray)
    } else {
        (format!(" {}", search_text), Color::White)
    };
    let search = Paragraph::new(search_line)
        .style(Style::default().fg(search_color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(search_color)),
        );
    f.render_widget(search, top_chunks[1]);

    let avatar = Paragraph::new("JD")
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(avatar, top_chunks[2]);

    // Pulse the live dot roughly once a second at the 100ms poll rate
    let dot = if (state.tick / 5) % 2 == 0 { "●" } else { "○" };
    let uptime = format_uptime(state.start_time.elapsed().as_secs());
    let remaining = state.secs_until_refresh();
    let progress_text = if remaining > 0 {
        format!("{} LIVE - up {} - Next refresh in {}s", dot, uptime, remaining)
    } else {
        format!("{} LIVE - up {} - Refreshing...", dot, uptime)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent((state.refresh_progress() * 100.0) as u16)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
