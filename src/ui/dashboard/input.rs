//! Key bindings for the dashboard screen

use super::state::{DashboardAction, DashboardState};
use crate::table::SortField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Sort shortcuts, in the order they are listed in the footer.
pub const SORT_KEYS: [(char, SortField); 6] = [
    ('1', SortField::Name),
    ('2', SortField::Impressions),
    ('3', SortField::Clicks),
    ('4', SortField::Conversions),
    ('5', SortField::Spend),
    ('6', SortField::Ctr),
];

/// Map a key press to a dashboard action, taking search mode into account.
pub fn action_for_key(state: &DashboardState, key: KeyEvent) -> Option<DashboardAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(DashboardAction::Quit);
    }

    if state.search_mode {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(DashboardAction::ExitSearch),
            KeyCode::Backspace => Some(DashboardAction::SearchBackspace),
            KeyCode::Char(c) => Some(DashboardAction::SearchInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(DashboardAction::Quit),
        KeyCode::Char('/') => Some(DashboardAction::EnterSearch),
        KeyCode::Char('c') => Some(DashboardAction::ClearSearch),
        KeyCode::Char('e') => Some(DashboardAction::Export),
        KeyCode::Char('b') => Some(DashboardAction::ToggleSidebar),
        KeyCode::Char('r') => Some(DashboardAction::RefreshNow),
        KeyCode::Char(c) => SORT_KEYS
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, field)| DashboardAction::ToggleSort(*field)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::UIConfig;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn state() -> DashboardState {
        DashboardState::new(
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(10), PathBuf::from(".")),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let state = state();
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('q'))),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('/'))),
            Some(DashboardAction::EnterSearch)
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('2'))),
            Some(DashboardAction::ToggleSort(SortField::Impressions))
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('e'))),
            Some(DashboardAction::Export)
        );
        assert_eq!(action_for_key(&state, press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_search_mode_captures_text() {
        let mut state = state();
        state.search_mode = true;
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('q'))),
            Some(DashboardAction::SearchInput('q'))
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Char('1'))),
            Some(DashboardAction::SearchInput('1'))
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Esc)),
            Some(DashboardAction::ExitSearch)
        );
        assert_eq!(
            action_for_key(&state, press(KeyCode::Backspace)),
            Some(DashboardAction::SearchBackspace)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut state = state();
        state.search_mode = true;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&state, key), Some(DashboardAction::Quit));
    }
}
