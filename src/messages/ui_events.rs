//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens, one per tab
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AppTab {
    #[default]
    Home,
    Courses,
    Library,
    More,
    Profile,
}

impl AppTab {
    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Home => "Home",
            AppTab::Courses => "Courses",
            AppTab::Library => "Library",
            AppTab::More => "More",
            AppTab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AppTab::Home => 0,
            AppTab::Courses => 1,
            AppTab::Library => 2,
            AppTab::More => 3,
            AppTab::Profile => 4,
        }
    }
}

/// Library screen sub-tabs
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum LibraryTab {
    #[default]
    Search,
    Issued,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppTab),

    // Shared screen actions
    Refresh,
    ScrollUp,
    ScrollDown,

    // Library search
    ToggleLibraryTab,
    StartSearchEdit,
    StopEditing,
    SearchChar(char),
    SearchBackspace,
    SearchCursorLeft,
    SearchCursorRight,
    SubmitSearch,

    // More menu
    NextMenuItem,
    PrevMenuItem,
    SelectMenuItem,

    // Profile
    RequestLogout,
    ConfirmLogout,
    CancelLogout,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: AppTab,
    library_tab: LibraryTab,
    input_mode: InputMode,
    show_help: bool,
    show_logout_confirm: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            return Some(UiEvent::Quit);
        }
    }

    // Handle popups first (same for all tabs)
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_logout_confirm {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmLogout),
            KeyCode::Char('n') | KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::CancelLogout),
            _ => None,
        };
    }

    // Search query editing captures everything except its own exits
    if input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitSearch),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Left => Some(UiEvent::SearchCursorLeft),
            KeyCode::Right => Some(UiEvent::SearchCursorRight),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        };
    }

    // Tab switching: number keys in normal mode
    match key.code {
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Home)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::Courses)),
        KeyCode::Char('3') => return Some(UiEvent::SwitchTab(AppTab::Library)),
        KeyCode::Char('4') => return Some(UiEvent::SwitchTab(AppTab::More)),
        KeyCode::Char('5') => return Some(UiEvent::SwitchTab(AppTab::Profile)),
        _ => {}
    }

    // Shared keys
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => return Some(UiEvent::Refresh),
        _ => {}
    }

    // Screen-specific keys
    match active_tab {
        AppTab::Home | AppTab::Courses => match key.code {
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        AppTab::Library => match key.code {
            KeyCode::Tab => Some(UiEvent::ToggleLibraryTab),
            KeyCode::Char('/') | KeyCode::Char('e') if library_tab == LibraryTab::Search => {
                Some(UiEvent::StartSearchEdit)
            }
            KeyCode::Enter if library_tab == LibraryTab::Search => Some(UiEvent::SubmitSearch),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        AppTab::More => match key.code {
            KeyCode::Up => Some(UiEvent::PrevMenuItem),
            KeyCode::Down => Some(UiEvent::NextMenuItem),
            KeyCode::Enter => Some(UiEvent::SelectMenuItem),
            _ => None,
        },
        AppTab::Profile => match key.code {
            KeyCode::Char('l') | KeyCode::Enter => Some(UiEvent::RequestLogout),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn map(key: KeyEvent, tab: AppTab, library_tab: LibraryTab, mode: InputMode) -> Option<UiEvent> {
        key_to_ui_event(key, tab, library_tab, mode, false, false)
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let ev = map(press(KeyCode::Char('3')), AppTab::Home, LibraryTab::Search, InputMode::Normal);
        assert!(matches!(ev, Some(UiEvent::SwitchTab(AppTab::Library))));
    }

    #[test]
    fn test_editing_mode_captures_chars() {
        let ev = map(press(KeyCode::Char('q')), AppTab::Library, LibraryTab::Search, InputMode::Editing);
        assert!(matches!(ev, Some(UiEvent::SearchChar('q'))));
    }

    #[test]
    fn test_enter_submits_search_from_editing() {
        let ev = map(press(KeyCode::Enter), AppTab::Library, LibraryTab::Search, InputMode::Editing);
        assert!(matches!(ev, Some(UiEvent::SubmitSearch)));
    }

    #[test]
    fn test_search_edit_key_ignored_on_issued_tab() {
        let ev = map(press(KeyCode::Char('/')), AppTab::Library, LibraryTab::Issued, InputMode::Normal);
        assert!(ev.is_none());
    }

    #[test]
    fn test_logout_popup_keys() {
        let confirm = key_to_ui_event(
            press(KeyCode::Char('y')),
            AppTab::Profile,
            LibraryTab::Search,
            InputMode::Normal,
            false,
            true,
        );
        assert!(matches!(confirm, Some(UiEvent::ConfirmLogout)));

        let cancel = key_to_ui_event(
            press(KeyCode::Esc),
            AppTab::Profile,
            LibraryTab::Search,
            InputMode::Normal,
            false,
            true,
        );
        assert!(matches!(cancel, Some(UiEvent::CancelLogout)));
    }

    #[test]
    fn test_any_key_closes_help() {
        let ev = key_to_ui_event(
            press(KeyCode::Char('x')),
            AppTab::Home,
            LibraryTab::Search,
            InputMode::Normal,
            true,
            false,
        );
        assert!(matches!(ev, Some(UiEvent::CloseHelp)));
    }
}
