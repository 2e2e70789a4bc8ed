//! App state - pure data structure with no I/O logic

use crate::app::loader::Loader;
use crate::messages::ui_events::{AppTab, InputMode, LibraryTab};
use crate::messages::RenderState;
use crate::models::{Book, DashboardSnapshot, IssuedBook, Subject};
use crate::session::Session;

/// One row of the More screen menu
#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    pub title: &'static str,
    pub route: &'static str,
}

/// Static navigation menu shown on the More screen
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { title: "Exam Scores", route: "/results" },
    MenuItem { title: "Fee Payment", route: "/fees" },
    MenuItem { title: "Course Registration", route: "/registration" },
    MenuItem { title: "Notifications", route: "/notifications" },
    MenuItem { title: "Announcements", route: "/announcements" },
    MenuItem { title: "Settings", route: "/settings" },
    MenuItem { title: "Help & Support", route: "/help" },
];

/// Resolve a route path to an in-app tab, if one exists
pub fn route_to_tab(route: &str) -> Option<AppTab> {
    match route {
        "/home" => Some(AppTab::Home),
        "/courses" => Some(AppTab::Courses),
        "/library" => Some(AppTab::Library),
        "/more" => Some(AppTab::More),
        "/profile" => Some(AppTab::Profile),
        _ => None,
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Tab navigation
    pub active_tab: AppTab,

    // Session context (read-only, established at startup)
    pub session: Session,

    // One loader per fetching screen
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

    // Set when the user confirms logout; the actor tears down on it
    pub logout_requested: bool,

    next_request_id: u64,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        AppState {
            active_tab: AppTab::Home,
            session,
            dashboard: Loader::new(),
            subjects: Loader::new(),
            books: Loader::new(),
            issued: Loader::new(),
            library_tab: LibraryTab::Search,
            search_query: String::new(),
            search_cursor: 0,
            input_mode: InputMode::Normal,
            selected_menu_item: 0,
            scroll: 0,
            show_help: false,
            show_logout_confirm: false,
            logout_requested: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            user: self.session.user().clone(),
            dashboard: self.dashboard.clone(),
            subjects: self.subjects.clone(),
            books: self.books.clone(),
            issued: self.issued.clone(),
            library_tab: self.library_tab,
            search_query: self.search_query.clone(),
            search_cursor: self.search_cursor,
            input_mode: self.input_mode,
            selected_menu_item: self.selected_menu_item,
            scroll: self.scroll,
            show_help: self.show_help,
            show_logout_confirm: self.show_logout_confirm,
        }
    }
}
