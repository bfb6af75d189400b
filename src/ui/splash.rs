//! Start-up screen shown for a moment before the dashboard opens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

const LOGO: [&str; 6] = [
    "██╗███╗   ██╗███████╗██╗ ██████╗ ██╗  ██╗████████╗███████╗",
    "██║████╗  ██║██╔════╝██║██╔════╝ ██║  ██║╚══██╔══╝██╔════╝",
    "██║██╔██╗ ██║███████╗██║██║  ███╗███████║   ██║   ███████╗",
    "██║██║╚██╗██║╚════██║██║██║   ██║██╔══██║   ██║   ╚════██║",
    "██║██║ ╚████║███████║██║╚██████╔╝██║  ██║   ██║   ███████║",
    "╚═╝╚═╝  ╚═══╝╚══════╝╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚══════╝",
];

/// Logo rows fade from cyan at the top to blue at the bottom.
const LOGO_COLORS: [Color; 6] = [
    Color::LightCyan,
    Color::LightCyan,
    Color::Cyan,
    Color::Cyan,
    Color::LightBlue,
    Color::Blue,
];

fn splash_text() -> Text<'static> {
    let mut lines: Vec<Line> = LOGO
        .iter()
        .zip(LOGO_COLORS)
        .map(|(row, color)| Line::styled(*row, Style::default().fg(color).add_modifier(Modifier::BOLD)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from("ADmyBRAND marketing analytics").gray());
    lines.push(Line::from(format!("v{}", env!("CARGO_PKG_VERSION"))).light_blue().italic());
    lines.push(Line::default());
    lines.push(Line::from("press any key to continue, q to quit").dark_gray());
    Text::from(lines).centered()
}

/// Area of `height` rows centred vertically in `area`.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    row
}

pub fn render_splash(f: &mut Frame) {
    let text = splash_text();
    let area = centered_rows(f.area(), text.height() as u16);
    f.render_widget(Paragraph::new(text), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_centered_rows() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rows(area, 10), Rect::new(0, 7, 80, 10));
    }

    #[test]
    fn test_splash_shows_tagline() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(render_splash).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("ADmyBRAND marketing analytics"));
        assert!(text.contains("press any key"));
    }
}
