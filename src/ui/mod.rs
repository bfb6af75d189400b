//! Terminal UI: splash screen, dashboard screen and the event loop driving them.

mod app;
pub mod dashboard;
pub mod splash;

pub use app::{App, UIConfig, run};
