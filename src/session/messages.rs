//! Status lines printed around a dashboard session.

use std::fmt;
use std::time::Duration;

const CYAN: &str = "\x1b[1;36m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// How a session presents the live metrics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Tui,
    Headless,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Tui => write!(f, "dashboard"),
            SessionMode::Headless => write!(f, "headless"),
        }
    }
}

fn status_line(color: &str, tag: &str, msg: &str) -> String {
    format!("{}{:>9}{} {}", color, tag, RESET, msg)
}

pub fn print_session_starting(mode: SessionMode, refresh_interval: Duration) {
    let msg = format!(
        "{} session, metrics refresh every {}s",
        mode,
        refresh_interval.as_secs()
    );
    println!("{}", status_line(CYAN, "Starting", &msg));
}

/// Printed once the session loop has ended, after the terminal is restored.
pub fn print_session_finished(mode: SessionMode, refreshes: usize) {
    let msg = format!("{} session closed after {} refreshes", mode, refreshes);
    println!("{}", status_line(GREEN, "Finished", &msg));
}
