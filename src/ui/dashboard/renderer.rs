//! Dashboard main renderer

use super::components::{campaigns, charts, footer, header, logs, metrics, sidebar};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let outer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar::sidebar_width(state.sidebar_collapsed)),
            Constraint::Fill(1),
        ])
        .split(f.area());

    sidebar::render_sidebar(f, outer_chunks[0], state);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .horizontal_margin(1)
        .split(outer_chunks[1]);

    header::render_header(f, main_chunks[0], state);
    metrics::render_welcome(f, main_chunks[1]);
    metrics::render_metric_cards(f, main_chunks[2], state);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);
    charts::render_revenue_chart(f, chart_chunks[0]);
    charts::render_acquisition_chart(f, chart_chunks[1]);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(main_chunks[4]);
    charts::render_traffic_chart(f, bottom_chunks[0]);
    campaigns::render_campaigns_table(f, bottom_chunks[1], state);

    logs::render_logs_panel(f, main_chunks[5], state);
    footer::render_footer(f, main_chunks[6], state.search_mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::baseline_metrics;
    use crate::events::Event;
    use crate::logging::LogLevel;
    use crate::table::SortField;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn state() -> DashboardState {
        DashboardState::new(
            Instant::now(),
            UIConfig::new(true, Duration::from_secs(10), PathBuf::from(".")),
        )
    }

    fn render_to_text(state: &DashboardState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_all_sections() {
        let text = render_to_text(&state(), 200, 60);
        for expected in [
            "ADmyBRAND",
            "Dashboard",
            "Welcome back, John!",
            "Total Revenue",
            "$124,592",
            "Revenue Trend",
            "User Acquisition",
            "Traffic Sources",
            "Campaign Performance",
            "Summer Sale 2024",
            "ACTIVITY LOG",
            "[Q] Quit",
        ] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_renders_refreshed_metrics_and_filtered_table() {
        let mut state = state();
        let mut snapshot = baseline_metrics();
        snapshot[1].value = "9,999".to_string();
        state.apply_snapshot(snapshot);
        state.update();
        state.table.set_search_text("Holiday");
        state.table.toggle_sort(SortField::Spend);

        let text = render_to_text(&state, 200, 60);
        assert!(text.contains("9,999"));
        assert!(text.contains("Holiday Promotion"));
        assert!(!text.contains("Summer Sale 2024"));
        assert!(text.contains("Metrics refreshed"));
    }

    #[test]
    fn test_renders_empty_search_result() {
        let mut state = state();
        state.table.set_search_text("zzz");
        let text = render_to_text(&state, 200, 60);
        assert!(text.contains("No campaigns match"));
    }

    #[test]
    fn test_activity_log_uses_state_threshold() {
        let mut state = state();
        state.add_to_activity_log(Event::table("Sorted by clicks (asc)"));

        state.log_threshold = LogLevel::Info;
        let text = render_to_text(&state, 200, 60);
        assert!(!text.contains("Sorted by clicks"));
        assert!(text.contains("Waiting for the first refresh"));

        state.log_threshold = LogLevel::Debug;
        let text = render_to_text(&state, 200, 60);
        assert!(text.contains("Sorted by clicks"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut state = state();
        state.sidebar_collapsed = true;
        render_to_text(&state, 20, 10);
    }
}
