//! Key help line at the bottom of the dashboard.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const NORMAL_HINTS: [(&str, &str); 7] = [
    ("Q", "Quit"),
    ("/", "Search"),
    ("C", "Clear"),
    ("1-6", "Sort"),
    ("E", "Export"),
    ("B", "Sidebar"),
    ("R", "Refresh"),
];

const SEARCH_HINTS: [(&str, &str); 3] = [
    ("type", "Filter by name"),
    ("Backspace", "Delete"),
    ("Enter/Esc", "Done"),
];

/// `[key] label` pairs for the current input mode.
pub fn hints(search_mode: bool) -> &'static [(&'static str, &'static str)] {
    if search_mode { &SEARCH_HINTS } else { &NORMAL_HINTS }
}

fn hint_line(search_mode: bool, key_color: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints(search_mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(key_color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans).centered()
}

pub fn render_footer(f: &mut Frame, area: Rect, search_mode: bool) {
    let key_color = if search_mode {
        Color::LightYellow
    } else {
        Color::Cyan
    };
    let footer = Paragraph::new(hint_line(search_mode, key_color)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_text() {
        let text = hint_line(false, Color::Cyan).to_string();
        assert!(text.starts_with("[Q] Quit  [/] Search"));
        assert!(text.ends_with("[R] Refresh"));
        assert!(hint_line(true, Color::Cyan).to_string().contains("[Enter/Esc] Done"));
    }
}
