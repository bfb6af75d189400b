//! Session setup and initialization

use crate::config::Config;
use crate::ui::UIConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line overrides for the values in the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub refresh_secs: Option<u64>,
    pub export_dir: Option<PathBuf>,
    pub with_background: bool,
}

/// Settings shared by the TUI and headless modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Period of the metrics refresh timer
    pub refresh_interval: Duration,
    /// Directory CSV exports are written to
    pub export_dir: PathBuf,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl SessionData {
    pub fn ui_config(&self) -> UIConfig {
        UIConfig::new(
            self.with_background_color,
            self.refresh_interval,
            self.export_dir.clone(),
        )
    }
}

/// Merges command-line overrides over the loaded config.
///
/// A refresh period of zero seconds is raised to one second.
pub fn setup_session(config: &Config, overrides: SessionOverrides) -> SessionData {
    let refresh_secs = overrides
        .refresh_secs
        .unwrap_or(config.refresh_interval_secs)
        .max(1);
    SessionData {
        refresh_interval: Duration::from_secs(refresh_secs),
        export_dir: overrides.export_dir.unwrap_or_else(|| config.export_dir()),
        with_background_color: overrides.with_background || config.with_background_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_config() {
        let session = setup_session(&Config::default(), SessionOverrides::default());
        assert_eq!(session.refresh_interval, Duration::from_secs(10));
        assert_eq!(session.export_dir, PathBuf::from("."));
        assert!(!session.with_background_color);
    }

    #[test]
    fn test_overrides_win_over_config() {
        let config = Config {
            refresh_interval_secs: 30,
            export_dir: Some(PathBuf::from("/srv/exports")),
            with_background_color: false,
        };
        let session = setup_session(
            &config,
            SessionOverrides {
                refresh_secs: Some(2),
                export_dir: Some(PathBuf::from("out")),
                with_background: true,
            },
        );
        assert_eq!(session.refresh_interval, Duration::from_secs(2));
        assert_eq!(session.export_dir, PathBuf::from("out"));
        assert!(session.with_background_color);
    }

    #[test]
    fn test_zero_refresh_is_clamped() {
        let overrides = SessionOverrides {
            refresh_secs: Some(0),
            ..Default::default()
        };
        let session = setup_session(&Config::default(), overrides);
        assert_eq!(session.refresh_interval, Duration::from_secs(1));
    }
}
