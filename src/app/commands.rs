//! Command handlers - business logic for processing UI events

use crate::app::state::{route_to_tab, AppState, MENU_ITEMS};
use crate::messages::ui_events::{AppTab, InputMode, LibraryTab};
use crate::messages::{FetchKind, NetworkCommand, NetworkResponse, Payload};

impl AppState {
    // ========================
    // Startup
    // ========================

    /// Fetch for the initial screen (Home), issued once by the actor
    pub fn initial_load(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        if self.dashboard.begin_load(id) {
            Some(NetworkCommand::Fetch {
                id,
                kind: FetchKind::Dashboard,
            })
        } else {
            None
        }
    }

    // ========================
    // Tab navigation
    // ========================

    /// Switch screens. The first visit to a fetching screen triggers its
    /// load, mirroring a mount effect; later visits render cached data.
    pub fn switch_tab(&mut self, tab: AppTab) -> Option<NetworkCommand> {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        self.scroll = 0;

        match tab {
            AppTab::Home => self.load_dashboard_if_new(),
            AppTab::Courses => self.load_subjects_if_new(),
            AppTab::Library => match self.library_tab {
                LibraryTab::Issued => self.load_issued_if_new(),
                LibraryTab::Search => None,
            },
            AppTab::More | AppTab::Profile => None,
        }
    }

    fn load_dashboard_if_new(&mut self) -> Option<NetworkCommand> {
        if self.dashboard.loaded_once() || self.dashboard.in_flight() {
            return None;
        }
        let id = self.next_id();
        self.dashboard.begin_load(id);
        Some(NetworkCommand::Fetch {
            id,
            kind: FetchKind::Dashboard,
        })
    }

    fn load_subjects_if_new(&mut self) -> Option<NetworkCommand> {
        if self.subjects.loaded_once() || self.subjects.in_flight() {
            return None;
        }
        let id = self.next_id();
        self.subjects.begin_load(id);
        Some(NetworkCommand::Fetch {
            id,
            kind: FetchKind::Subjects,
        })
    }

    fn load_issued_if_new(&mut self) -> Option<NetworkCommand> {
        if self.issued.loaded_once() || self.issued.in_flight() {
            return None;
        }
        let id = self.next_id();
        self.issued.begin_load(id);
        Some(NetworkCommand::Fetch {
            id,
            kind: FetchKind::IssuedBooks,
        })
    }

    // ========================
    // Refresh
    // ========================

    /// Re-fetch the active screen's data with the stale view still visible.
    /// Screens without a refreshable loader (and the search results, which
    /// are query-driven) are a no-op.
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        match self.active_tab {
            AppTab::Home => {
                if self.dashboard.in_flight() {
                    return None;
                }
                let id = self.next_id();
                self.dashboard.begin_refresh(id);
                Some(NetworkCommand::Fetch {
                    id,
                    kind: FetchKind::Dashboard,
                })
            }
            AppTab::Courses => {
                if self.subjects.in_flight() {
                    return None;
                }
                let id = self.next_id();
                self.subjects.begin_refresh(id);
                Some(NetworkCommand::Fetch {
                    id,
                    kind: FetchKind::Subjects,
                })
            }
            AppTab::Library => match self.library_tab {
                LibraryTab::Issued => {
                    if self.issued.in_flight() {
                        return None;
                    }
                    let id = self.next_id();
                    self.issued.begin_refresh(id);
                    Some(NetworkCommand::Fetch {
                        id,
                        kind: FetchKind::IssuedBooks,
                    })
                }
                LibraryTab::Search => None,
            },
            AppTab::More | AppTab::Profile => None,
        }
    }

    // ========================
    // Library
    // ========================

    /// Flip between the search and issued sub-tabs. The issued list is
    /// fetched on its first activation only.
    pub fn toggle_library_tab(&mut self) -> Option<NetworkCommand> {
        self.library_tab = match self.library_tab {
            LibraryTab::Search => LibraryTab::Issued,
            LibraryTab::Issued => LibraryTab::Search,
        };
        self.input_mode = InputMode::Normal;
        self.scroll = 0;

        match self.library_tab {
            LibraryTab::Issued => self.load_issued_if_new(),
            LibraryTab::Search => None,
        }
    }

    /// Run the book search. A blank query is a no-op and leaves any previous
    /// results untouched.
    pub fn submit_search(&mut self) -> Option<NetworkCommand> {
        self.input_mode = InputMode::Normal;

        if self.search_query.trim().is_empty() {
            return None;
        }
        if self.books.in_flight() {
            return None;
        }

        let id = self.next_id();
        self.books.begin_load(id);
        Some(NetworkCommand::Fetch {
            id,
            kind: FetchKind::BookSearch {
                query: self.search_query.clone(),
            },
        })
    }

    // ========================
    // Search input editing
    // ========================

    pub fn start_search_edit(&mut self) {
        self.input_mode = InputMode::Editing;
        self.search_cursor = self.search_query.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_char(&mut self, c: char) {
        if self.search_cursor <= self.search_query.len() {
            self.search_query.insert(self.search_cursor, c);
            self.search_cursor += c.len_utf8();
        }
    }

    pub fn search_backspace(&mut self) {
        if self.search_cursor > 0 {
            let prev_pos = self.search_query[..self.search_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.search_query.remove(prev_pos);
            self.search_cursor = prev_pos;
        }
    }

    pub fn search_cursor_left(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor = self.search_query[..self.search_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn search_cursor_right(&mut self) {
        if self.search_cursor < self.search_query.len() {
            self.search_cursor = self.search_query[self.search_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.search_cursor + i)
                .unwrap_or(self.search_query.len());
        }
    }

    // ========================
    // More menu
    // ========================

    pub fn next_menu_item(&mut self) {
        self.selected_menu_item = (self.selected_menu_item + 1) % MENU_ITEMS.len();
    }

    pub fn prev_menu_item(&mut self) {
        self.selected_menu_item = self
            .selected_menu_item
            .checked_sub(1)
            .unwrap_or(MENU_ITEMS.len() - 1);
    }

    /// Resolve the selected menu route; routes without an in-app tab are
    /// logged and ignored
    pub fn select_menu_item(&mut self) -> Option<NetworkCommand> {
        let item = MENU_ITEMS.get(self.selected_menu_item)?;
        match route_to_tab(item.route) {
            Some(tab) => self.switch_tab(tab),
            None => {
                tracing::debug!(route = item.route, "no screen registered for route");
                None
            }
        }
    }

    // ========================
    // Scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Logout
    // ========================

    pub fn request_logout(&mut self) {
        self.show_logout_confirm = true;
    }

    pub fn confirm_logout(&mut self) {
        self.show_logout_confirm = false;
        self.logout_requested = true;
        tracing::info!(user = %self.session.user().email, "session ended by logout");
    }

    pub fn cancel_logout(&mut self) {
        self.show_logout_confirm = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Route a network response to the loader that issued it. Responses for
    /// stale ids fall through every loader and are dropped. Failures only
    /// log; the screens keep showing whatever they had.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Loaded { id, payload, time_ms } => match payload {
                Payload::Dashboard(snapshot) if self.dashboard.matches(id) => {
                    self.dashboard.succeed(id, snapshot);
                    tracing::info!(id, time_ms, "dashboard loaded");
                }
                Payload::Subjects(subjects) if self.subjects.matches(id) => {
                    tracing::info!(id, time_ms, count = subjects.len(), "subjects loaded");
                    self.subjects.succeed(id, subjects);
                }
                Payload::Books(books) if self.books.matches(id) => {
                    tracing::info!(id, time_ms, count = books.len(), "book search completed");
                    self.books.succeed(id, books);
                }
                Payload::IssuedBooks(issued) if self.issued.matches(id) => {
                    tracing::info!(id, time_ms, count = issued.len(), "issued books loaded");
                    self.issued.succeed(id, issued);
                }
                _ => {
                    tracing::debug!(id, "dropping response for a stale request");
                }
            },
            NetworkResponse::Failed { id, error, time_ms } => {
                let matched = self.dashboard.fail(id)
                    || self.subjects.fail(id)
                    || self.books.fail(id)
                    || self.issued.fail(id);
                if matched {
                    tracing::warn!(id, time_ms, %error, "fetch failed; keeping previous data");
                } else {
                    tracing::debug!(id, %error, "dropping failure for a stale request");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, DashboardSnapshot, DashboardStats, Subject, User};
    use crate::session::Session;

    fn test_state() -> AppState {
        let user = User {
            id: "u1".into(),
            name: "Priya".into(),
            email: "priya@example.edu".into(),
            roll_no: "CSE042".into(),
            program: "B.Tech CSE".into(),
            year: 3,
            semester: 6,
            section: "B".into(),
        };
        AppState::new(Session::new(user))
    }

    fn subject(id: &str) -> Subject {
        Subject {
            id: id.into(),
            code: format!("19CSE{}", id),
            name: "Algorithms".into(),
            credits: 4,
            category: "Core".into(),
            lecture_hours: 3,
            tutorial_hours: 1,
            practical_hours: 0,
            evaluation_pattern: "50/50".into(),
        }
    }

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.into(),
            title: title.into(),
            author: "Knuth".into(),
            isbn: "978".into(),
            category: "CS".into(),
            available_copies: 1,
            total_copies: 2,
        }
    }

    fn snapshot(fee_due: i64) -> DashboardSnapshot {
        DashboardSnapshot {
            stats: DashboardStats {
                pending_assignments: 1,
                upcoming_quizzes: 2,
                fee_due,
                unread_notifications: 0,
            },
            announcements: vec![],
        }
    }

    fn command_id(cmd: &NetworkCommand) -> u64 {
        match cmd {
            NetworkCommand::Fetch { id, .. } => *id,
            NetworkCommand::Shutdown => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_initial_load_fetches_dashboard() {
        let mut state = test_state();
        let cmd = state.initial_load().unwrap();
        assert!(matches!(
            cmd,
            NetworkCommand::Fetch { kind: FetchKind::Dashboard, .. }
        ));
        assert!(state.dashboard.is_loading());
    }

    #[test]
    fn test_first_courses_visit_loads_then_caches() {
        let mut state = test_state();
        let cmd = state.switch_tab(AppTab::Courses).unwrap();
        let id = command_id(&cmd);
        assert!(matches!(
            cmd,
            NetworkCommand::Fetch { kind: FetchKind::Subjects, .. }
        ));

        state.handle_response(NetworkResponse::Loaded {
            id,
            payload: Payload::Subjects(vec![subject("1")]),
            time_ms: 5,
        });

        // moving away and back does not re-fetch
        assert!(state.switch_tab(AppTab::Home).is_none());
        assert!(state.switch_tab(AppTab::Courses).is_none());
        assert_eq!(state.subjects.data().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_subjects_response_is_loaded_not_loading() {
        let mut state = test_state();
        let cmd = state.switch_tab(AppTab::Courses).unwrap();
        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&cmd),
            payload: Payload::Subjects(vec![]),
            time_ms: 3,
        });
        assert!(!state.subjects.busy());
        assert_eq!(state.subjects.data().unwrap().len(), 0);
    }

    #[test]
    fn test_issued_tab_fetches_exactly_once() {
        let mut state = test_state();
        state.switch_tab(AppTab::Library);

        let cmd = state.toggle_library_tab().unwrap();
        assert!(matches!(
            cmd,
            NetworkCommand::Fetch { kind: FetchKind::IssuedBooks, .. }
        ));
        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&cmd),
            payload: Payload::IssuedBooks(vec![]),
            time_ms: 4,
        });

        // back to search, then to issued again: no additional fetch
        assert!(state.toggle_library_tab().is_none());
        assert!(state.toggle_library_tab().is_none());
    }

    #[test]
    fn test_issued_toggle_while_in_flight_does_not_duplicate() {
        let mut state = test_state();
        state.switch_tab(AppTab::Library);
        assert!(state.toggle_library_tab().is_some());
        // flip away and back before the response arrives
        assert!(state.toggle_library_tab().is_none());
        assert!(state.toggle_library_tab().is_none());
    }

    #[test]
    fn test_blank_search_is_a_noop() {
        let mut state = test_state();
        state.switch_tab(AppTab::Library);
        state.search_query = String::from("   ");
        assert!(state.submit_search().is_none());
        assert!(state.books.data().is_none());
        assert!(!state.books.busy());
    }

    #[test]
    fn test_blank_search_leaves_previous_results_untouched() {
        let mut state = test_state();
        state.switch_tab(AppTab::Library);
        state.search_query = String::from("algorithms");
        let cmd = state.submit_search().unwrap();
        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&cmd),
            payload: Payload::Books(vec![book("b1", "TAOCP"), book("b2", "CLRS")]),
            time_ms: 8,
        });

        state.search_query = String::from("  ");
        assert!(state.submit_search().is_none());
        let books = state.books.data().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "TAOCP");
        assert_eq!(books[1].title, "CLRS");
    }

    #[test]
    fn test_search_results_preserve_backend_order() {
        let mut state = test_state();
        state.search_query = String::from("algorithms");
        let cmd = state.submit_search().unwrap();
        assert!(matches!(
            &cmd,
            NetworkCommand::Fetch { kind: FetchKind::BookSearch { query }, .. }
                if query == "algorithms"
        ));
        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&cmd),
            payload: Payload::Books(vec![book("z", "Zebra"), book("a", "Aardvark")]),
            time_ms: 2,
        });
        let books = state.books.data().unwrap();
        assert_eq!(books[0].id, "z");
        assert_eq!(books[1].id, "a");
    }

    #[test]
    fn test_failed_fetch_keeps_data_and_clears_flags() {
        let mut state = test_state();
        let cmd = state.initial_load().unwrap();
        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&cmd),
            payload: Payload::Dashboard(snapshot(500)),
            time_ms: 5,
        });

        let refresh = state.refresh().unwrap();
        state.handle_response(NetworkResponse::Failed {
            id: command_id(&refresh),
            error: String::from("server returned HTTP 500"),
            time_ms: 7,
        });

        assert!(!state.dashboard.busy());
        assert_eq!(state.dashboard.data().unwrap().stats.fee_due, 500);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = test_state();
        let first = state.initial_load().unwrap();
        let first_id = command_id(&first);
        state.handle_response(NetworkResponse::Loaded {
            id: first_id,
            payload: Payload::Dashboard(snapshot(100)),
            time_ms: 5,
        });

        let refresh = state.refresh().unwrap();
        // a duplicate of the old response arrives late
        state.handle_response(NetworkResponse::Loaded {
            id: first_id,
            payload: Payload::Dashboard(snapshot(999)),
            time_ms: 50,
        });
        assert_eq!(state.dashboard.data().unwrap().stats.fee_due, 100);
        assert!(state.dashboard.is_refreshing());

        state.handle_response(NetworkResponse::Loaded {
            id: command_id(&refresh),
            payload: Payload::Dashboard(snapshot(0)),
            time_ms: 9,
        });
        assert_eq!(state.dashboard.data().unwrap().stats.fee_due, 0);
    }

    #[test]
    fn test_refresh_on_search_subtab_is_noop() {
        let mut state = test_state();
        state.switch_tab(AppTab::Library);
        assert!(state.refresh().is_none());
    }

    #[test]
    fn test_search_editing_handles_multibyte() {
        let mut state = test_state();
        state.start_search_edit();
        state.search_char('a');
        state.search_char('é');
        state.search_char('b');
        assert_eq!(state.search_query, "aéb");
        state.search_cursor_left();
        state.search_cursor_left();
        state.search_backspace();
        assert_eq!(state.search_query, "éb");
        assert_eq!(state.search_cursor, 0);
    }

    #[test]
    fn test_menu_selection_wraps_and_unknown_routes_noop() {
        let mut state = test_state();
        state.switch_tab(AppTab::More);
        state.prev_menu_item();
        assert_eq!(state.selected_menu_item, MENU_ITEMS.len() - 1);
        state.next_menu_item();
        assert_eq!(state.selected_menu_item, 0);

        // "Exam Scores" has no in-app screen
        assert!(state.select_menu_item().is_none());
        assert_eq!(state.active_tab, AppTab::More);
    }

    #[test]
    fn test_logout_confirmation_flow() {
        let mut state = test_state();
        state.switch_tab(AppTab::Profile);
        state.request_logout();
        assert!(state.show_logout_confirm);

        state.cancel_logout();
        assert!(!state.show_logout_confirm);
        assert!(!state.logout_requested);

        state.request_logout();
        state.confirm_logout();
        assert!(state.logout_requested);
    }
}
