//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from snapshots and actions

use super::state::{DashboardAction, DashboardState};

use crate::data::{MetricSnapshot, generate_snapshot};
use crate::events::Event as DashboardEvent;
use crate::table::write_export;

use chrono::Utc;
use log::{debug, warn};

impl DashboardState {
    /// Advance the animation tick and move queued events into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Replace all headline metrics with `snapshot`.
    pub fn apply_snapshot(&mut self, snapshot: Vec<MetricSnapshot>) {
        self.metrics = snapshot;
        self.mark_refreshed();
        let summary = self
            .metrics
            .iter()
            .map(|m| m.value.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        self.add_event(DashboardEvent::refresh(format!(
            "Metrics refreshed: {}",
            summary
        )));
    }

    /// Apply a user action. `Quit` is handled by the caller and ignored here.
    pub fn handle_action(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Quit => {}
            DashboardAction::EnterSearch => self.search_mode = true,
            DashboardAction::ExitSearch => self.search_mode = false,
            DashboardAction::SearchInput(c) => self.table.push_search_char(c),
            DashboardAction::SearchBackspace => self.table.pop_search_char(),
            DashboardAction::ClearSearch => self.table.clear_search(),
            DashboardAction::ToggleSort(field) => {
                self.table.toggle_sort(field);
                self.add_event(DashboardEvent::table(format!(
                    "Sorted by {} ({})",
                    self.table.sort_field(),
                    self.table.sort_direction()
                )));
            }
            DashboardAction::Export => self.export(),
            DashboardAction::ToggleSidebar => self.sidebar_collapsed = !self.sidebar_collapsed,
            DashboardAction::RefreshNow => self.apply_snapshot(generate_snapshot()),
        }
    }

    /// Write the currently displayed rows to a CSV file in the export directory.
    fn export(&mut self) {
        let rows = self.table.derive();
        let count = rows.len();
        match write_export(&self.export_dir, &rows, Utc::now().date_naive()) {
            Ok(path) => {
                debug!("Exported {} campaigns to {}", count, path.display());
                self.add_event(DashboardEvent::export_success(format!(
                    "Exported {} campaigns to {}",
                    count,
                    path.display()
                )));
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.add_event(DashboardEvent::export_error(format!("Export failed: {}", e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::baseline_metrics;
    use crate::events::{EventType, Source};
    use crate::table::export::export_file_name;
    use crate::table::{SortDirection, SortField};
    use crate::ui::app::UIConfig;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn state_with_export_dir(dir: &std::path::Path) -> DashboardState {
        let config = UIConfig::new(false, Duration::from_secs(10), dir.to_path_buf());
        DashboardState::new(Instant::now(), config)
    }

    #[test]
    fn test_apply_snapshot_replaces_metrics_and_logs() {
        let dir = tempdir().unwrap();
        let mut state = state_with_export_dir(dir.path());
        let mut snapshot = baseline_metrics();
        snapshot[0].value = "$101,000".to_string();

        state.apply_snapshot(snapshot.clone());
        state.update();

        assert_eq!(state.metrics, snapshot);
        assert_eq!(state.refresh_count(), 1);
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].source, Source::Refresh);
        assert!(state.activity_logs[0].msg.contains("$101,000"));
    }

    #[test]
    fn test_search_actions_edit_table_search() {
        let dir = tempdir().unwrap();
        let mut state = state_with_export_dir(dir.path());
        state.handle_action(DashboardAction::EnterSearch);
        assert!(state.search_mode);
        for c in "prod".chars() {
            state.handle_action(DashboardAction::SearchInput(c));
        }
        assert_eq!(state.table.derive().len(), 1);
        state.handle_action(DashboardAction::SearchBackspace);
        assert_eq!(state.table.search_text(), "pro");
        state.handle_action(DashboardAction::ExitSearch);
        assert!(!state.search_mode);
        state.handle_action(DashboardAction::ClearSearch);
        assert_eq!(state.table.search_text(), "");
    }

    #[test]
    fn test_toggle_sort_action() {
        let dir = tempdir().unwrap();
        let mut state = state_with_export_dir(dir.path());
        state.handle_action(DashboardAction::ToggleSort(SortField::Spend));
        state.handle_action(DashboardAction::ToggleSort(SortField::Spend));
        assert_eq!(state.table.sort_field(), SortField::Spend);
        assert_eq!(state.table.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_export_writes_derived_view() {
        let dir = tempdir().unwrap();
        let mut state = state_with_export_dir(dir.path());
        state.table.set_search_text("Summer");

        state.handle_action(DashboardAction::Export);
        state.update();

        let path = dir.path().join(export_file_name(Utc::now().date_naive()));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.contains("\"Summer Sale 2024\""));

        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.event_type, EventType::Success);
        assert!(event.msg.starts_with("Exported 1 campaigns"));
    }

    #[test]
    fn test_export_failure_is_logged() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let mut state = state_with_export_dir(&blocker);

        state.handle_action(DashboardAction::Export);
        state.update();

        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.msg.starts_with("Export failed"));
    }

    #[test]
    fn test_toggle_sidebar_and_refresh_now() {
        let dir = tempdir().unwrap();
        let mut state = state_with_export_dir(dir.path());
        state.handle_action(DashboardAction::ToggleSidebar);
        assert!(state.sidebar_collapsed);
        state.handle_action(DashboardAction::ToggleSidebar);
        assert!(!state.sidebar_collapsed);

        state.handle_action(DashboardAction::RefreshNow);
        assert_eq!(state.refresh_count(), 1);
        assert_eq!(state.metrics.len(), 4);
    }
}
