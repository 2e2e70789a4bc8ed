//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::session::Session;

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        session: Session,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(session),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Kick off the initial screen's fetch and send the first render
        if let Some(cmd) = self.state.initial_load() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tab switching
            UiEvent::SwitchTab(tab) => {
                if let Some(cmd) = self.state.switch_tab(tab) {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Shared screen actions
            UiEvent::Refresh => {
                if let Some(cmd) = self.state.refresh() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Library
            UiEvent::ToggleLibraryTab => {
                if let Some(cmd) = self.state.toggle_library_tab() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::StartSearchEdit => self.state.start_search_edit(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::SearchChar(c) => self.state.search_char(c),
            UiEvent::SearchBackspace => self.state.search_backspace(),
            UiEvent::SearchCursorLeft => self.state.search_cursor_left(),
            UiEvent::SearchCursorRight => self.state.search_cursor_right(),
            UiEvent::SubmitSearch => {
                if let Some(cmd) = self.state.submit_search() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // More menu
            UiEvent::NextMenuItem => self.state.next_menu_item(),
            UiEvent::PrevMenuItem => self.state.prev_menu_item(),
            UiEvent::SelectMenuItem => {
                if let Some(cmd) = self.state.select_menu_item() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Profile
            UiEvent::RequestLogout => self.state.request_logout(),
            UiEvent::ConfirmLogout => {
                self.state.confirm_logout();
                return self.state.logout_requested;
            }
            UiEvent::CancelLogout => self.state.cancel_logout(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
