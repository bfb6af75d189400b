//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::refresh::{SPLASH_SECS, UI_POLL_MS};
use crate::refresh::RefreshTimer;
use crate::ui::dashboard::{DashboardAction, DashboardState, action_for_key, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use log::debug;
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
    pub export_dir: PathBuf,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration, export_dir: PathBuf) -> Self {
        Self {
            with_background_color,
            refresh_interval,
            export_dir,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with its refresh timer. The timer stops when the
    /// screen is replaced or dropped.
    Dashboard {
        state: Box<DashboardState>,
        refresh: RefreshTimer,
    },
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Settings handed to the dashboard when it opens.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Switches to the dashboard and starts its refresh timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open_dashboard(&mut self) {
        let state = DashboardState::new(self.start_time, self.ui_config.clone());
        let refresh = RefreshTimer::start(self.ui_config.refresh_interval);
        debug!("Dashboard opened");
        self.current_screen = Screen::Dashboard {
            state: Box::new(state),
            refresh,
        };
    }

    /// Number of refreshes applied on the current dashboard, or zero on the splash.
    fn refresh_count(&self) -> usize {
        match &self.current_screen {
            Screen::Dashboard { state, .. } => state.refresh_count(),
            Screen::Splash => 0,
        }
    }

    /// Applies a dashboard action. A manual refresh also restarts the timer
    /// period, so the next scheduled refresh comes a full period later.
    fn handle_action(&mut self, action: DashboardAction) {
        if let Screen::Dashboard { state, refresh } = &mut self.current_screen {
            if action == DashboardAction::RefreshNow {
                refresh.reset();
            }
            state.handle_action(action);
        }
    }

    /// Applies any pending snapshot and advances the dashboard by one frame.
    fn tick(&mut self) {
        if let Screen::Dashboard { state, refresh } = &mut self.current_screen {
            if let Some(snapshot) = refresh.try_latest() {
                state.apply_snapshot(snapshot);
            }
            state.update();
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Returns the number of metric refreshes the dashboard applied before the
/// user quit.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<usize> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_SECS);

    // UI event loop
    loop {
        app.tick();
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let action = match &app.current_screen {
                    Screen::Dashboard { state, .. } => Some(action_for_key(state, key)),
                    Screen::Splash => None,
                };
                match action {
                    Some(Some(DashboardAction::Quit)) => return Ok(app.refresh_count()),
                    Some(Some(action)) => app.handle_action(action),
                    Some(None) => {}
                    None if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) => return Ok(0),
                    // Any other key press skips the splash screen
                    None => app.open_dashboard(),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard { state, .. } => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MetricTitle;

    fn config(period: Duration) -> UIConfig {
        UIConfig::new(false, period, PathBuf::from("."))
    }

    #[tokio::test(start_paused = true)]
    async fn test_dashboard_applies_timer_snapshots() {
        let mut app = App::new(config(Duration::from_secs(10)));
        assert!(matches!(&app.current_screen, Screen::Splash));

        app.open_dashboard();
        tokio::time::sleep(Duration::from_secs(11)).await;
        app.tick();

        let Screen::Dashboard { state, .. } = &app.current_screen else {
            panic!("dashboard should be open");
        };
        assert_eq!(state.refresh_count(), 1);
        assert_eq!(state.metrics[3].title, MetricTitle::GrowthRate);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_refresh_restarts_timer_period() {
        let mut app = App::new(config(Duration::from_secs(3)));
        app.open_dashboard();

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        app.tick();
        assert_eq!(app.refresh_count(), 0);

        app.handle_action(DashboardAction::RefreshNow);
        assert_eq!(app.refresh_count(), 1);

        // past the original t=3s tick but short of a full period since the refresh
        tokio::time::sleep(Duration::from_millis(2_900)).await;
        app.tick();
        assert_eq!(app.refresh_count(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        app.tick();
        assert_eq!(app.refresh_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacing_dashboard_cancels_its_timer() {
        let mut app = App::new(config(Duration::from_secs(10)));
        app.open_dashboard();
        let token = match &app.current_screen {
            Screen::Dashboard { refresh, .. } => refresh.cancellation_token(),
            Screen::Splash => panic!("dashboard should be open"),
        };

        app.current_screen = Screen::Splash;
        assert!(token.is_cancelled());
    }
}
