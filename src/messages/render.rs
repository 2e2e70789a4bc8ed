//! Render state - data structure sent from App layer to UI for rendering

use crate::app::loader::Loader;
use crate::messages::ui_events::{AppTab, InputMode, LibraryTab};
use crate::models::{Book, DashboardSnapshot, IssuedBook, Subject, User};

/// Complete state needed by the UI to render. Built by
/// `AppState::to_render_state` after every mutation.
#[derive(Debug, Clone)]
pub struct RenderState {
    // Tab
    pub active_tab: AppTab,

    // Session
    pub user: User,

    // Screen loaders
    pub dashboard: Loader<DashboardSnapshot>,
    pub subjects: Loader<Vec<Subject>>,
    pub books: Loader<Vec<Book>>,
    pub issued: Loader<Vec<IssuedBook>>,

    // Library screen
    pub library_tab: LibraryTab,
    pub search_query: String,
    pub search_cursor: usize,
    pub input_mode: InputMode,

    // More screen
    pub selected_menu_item: usize,

    // Scrolling for the active list
    pub scroll: u16,

    // Popups
    pub show_help: bool,
    pub show_logout_confirm: bool,
}
