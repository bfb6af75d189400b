//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::data::{CampaignStatus, ChangeType, ChartPoint};
use crate::events::Source;
use ratatui::prelude::Color;

/// Fill colors of the traffic share chart, cycled per source.
pub const TRAFFIC_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Red,
];

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresh => Color::Cyan,
        Source::Table => Color::Yellow,
        Source::Export => Color::Green,
    }
}

pub fn change_color(change_type: ChangeType) -> Color {
    match change_type {
        ChangeType::Positive => Color::LightGreen,
        ChangeType::Negative => Color::LightRed,
        ChangeType::Neutral => Color::Gray,
    }
}

/// Badge colors as (foreground, background).
pub fn status_colors(status: CampaignStatus) -> (Color, Color) {
    match status {
        CampaignStatus::Active => (Color::Black, Color::Green),
        CampaignStatus::Paused => (Color::Black, Color::Yellow),
        CampaignStatus::Completed => (Color::White, Color::DarkGray),
    }
}

/// Click-through rate as shown in the table, e.g. `3.4%`.
pub fn format_ctr(ctr: f64) -> String {
    format!("{}%", ctr)
}

/// Cost per click with two decimals, e.g. `$1.28`.
pub fn format_cpc(cpc: f64) -> String {
    format!("${:.2}", cpc)
}

/// Whole-number share of each point in the total, in percent.
pub fn share_percentages(points: &[ChartPoint]) -> Vec<u64> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .iter()
        .map(|p| {
            if total > 0.0 {
                (p.value / total * 100.0).round() as u64
            } else {
                0
            }
        })
        .collect()
}

/// Uptime as `1h 02m 03s`, dropping leading zero units.
pub fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
