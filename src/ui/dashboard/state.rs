//! Dashboard state management
//!
//! Contains the main dashboard state struct and the actions it reacts to

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::data::{MetricSnapshot, baseline_metrics};
use crate::events::Event as DashboardEvent;
use crate::logging::LogLevel;
use crate::table::{CampaignTable, SortField};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// User-triggered changes to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    EnterSearch,
    ExitSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    ToggleSort(SortField),
    Export,
    ToggleSidebar,
    RefreshNow,
}

/// Live state of the dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Current headline metrics, replaced wholesale on every refresh.
    pub metrics: Vec<MetricSnapshot>,
    /// Search and sort state of the campaign table.
    pub table: CampaignTable,
    /// Whether key presses currently edit the search text.
    pub search_mode: bool,
    /// Whether the sidebar is collapsed to its narrow form.
    pub sidebar_collapsed: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<DashboardEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Period of the metrics refresh timer.
    pub refresh_interval: Duration,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Animation tick counter
    pub tick: usize,
    /// Quietest event level shown in the activity log, read from `RUST_LOG` once.
    pub log_threshold: LogLevel,

    /// When the metrics were last replaced
    last_refresh: Instant,
    /// Number of snapshots applied since the dashboard opened
    refresh_count: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            start_time,
            metrics: baseline_metrics(),
            table: CampaignTable::default(),
            search_mode: false,
            sidebar_collapsed: false,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            refresh_interval: ui_config.refresh_interval,
            export_dir: ui_config.export_dir,
            tick: 0,
            log_threshold: LogLevel::from_env(),
            last_refresh: Instant::now(),
            refresh_count: 0,
        }
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }

    pub(super) fn mark_refreshed(&mut self) {
        self.last_refresh = Instant::now();
        self.refresh_count += 1;
    }

    /// Seconds until the refresh timer fires again, saturating at zero.
    pub fn secs_until_refresh(&self) -> u64 {
        self.refresh_interval
            .saturating_sub(self.last_refresh.elapsed())
            .as_secs()
    }

    /// Fraction of the refresh period that has elapsed, 0.0 to 1.0.
    pub fn refresh_progress(&self) -> f64 {
        let period = self.refresh_interval.as_secs_f64();
        if period <= 0.0 {
            return 1.0;
        }
        (self.last_refresh.elapsed().as_secs_f64() / period).min(1.0)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: DashboardEvent) {
        self.pending_events.push_back(event);
    }
}
