//! Full-screen dashboard session.

use super::SessionData;
use super::messages::{SessionMode, print_session_finished, print_session_starting};
use crate::ui;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::error::Error;
use std::io::{self, Stdout};

/// Raw-mode alternate screen, restored when dropped so an error leaving
/// the UI loop still hands back a usable terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the dashboard until the user quits.
///
/// The refresh timer belongs to the dashboard screen inside [`ui::App`], so it
/// is stopped before the terminal is handed back.
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(SessionMode::Tui, session.refresh_interval);

    let refreshes = {
        let mut guard = TerminalGuard::enter()?;
        let app = ui::App::new(session.ui_config());
        ui::run(&mut guard.terminal, app).await?
    };

    print_session_finished(SessionMode::Tui, refreshes);
    Ok(())
}
