//! Campus TUI - terminal student portal client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP fetches

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use app::state::MENU_ITEMS;
use app::AppActor;
use config::{Config, ENV_TOKEN};
use constants::{APP_NAME, APP_VERSION, TICK_RATE_MS};
use messages::ui_events::{key_to_ui_event, InputMode, LibraryTab};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::{Book, IssuedBook, Subject};
use network::{NetworkActor, PortalClient};
use session::Session;
use ui::{
    availability_color, fee_badge, fine_line, format_date, issue_status_color, priority_color,
    render_tabs, search_empty_text, shows_empty_state,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "campus-tui.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Establish the session before touching the terminal so failures print
    // as plain errors
    let config = Config::load()?;
    if config.token.is_empty() {
        anyhow::bail!(
            "no API token configured; set `token` in ~/.campus-portal/config.json or {}",
            ENV_TOKEN
        );
    }
    let client = PortalClient::new(&config)?;
    let user = client
        .me()
        .await
        .context("fetching the signed-in student from /auth/me")?;
    tracing::info!(user = %user.email, "session established");
    let session = Session::new(user);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(session, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    // The app actor sends the first render immediately
    let mut current_state = render_rx
        .recv()
        .await
        .context("app actor exited before the first render")?;

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(TICK_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_tab,
                    current_state.library_tab,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.show_logout_confirm,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                // App actor gone (logout confirmed): leave the UI loop
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Main layout with tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    // Draw content based on active tab
    use messages::ui_events::AppTab;
    match state.active_tab {
        AppTab::Home => draw_home(f, state, main_chunks[1]),
        AppTab::Courses => draw_courses(f, state, main_chunks[1]),
        AppTab::Library => draw_library(f, state, main_chunks[1]),
        AppTab::More => draw_more(f, state, main_chunks[1]),
        AppTab::Profile => draw_profile(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.show_logout_confirm {
        draw_logout_popup(f, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    use messages::ui_events::AppTab;

    const TABS: [AppTab; 5] = [
        AppTab::Home,
        AppTab::Courses,
        AppTab::Library,
        AppTab::More,
        AppTab::Profile,
    ];
    let titles: Vec<String> = TABS
        .iter()
        .map(|tab| format!(" {}:{} ", tab.index() + 1, tab.title()))
        .collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let tabs = render_tabs(&title_refs, state.active_tab.index());
    f.render_widget(tabs, area);
}

/// Centered "Loading..." shown while a first load is in flight
fn draw_spinner(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(loading, chunks[1]);
}

fn draw_empty_state(f: &mut Frame, text: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Percentage(40),
        ])
        .split(area);

    let empty = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(empty, chunks[1]);
}

// ============================================================================
// Home screen
// ============================================================================

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.dashboard.is_loading() {
        draw_spinner(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(5), // Quick access tiles
            Constraint::Length(4), // Stat cards
            Constraint::Min(3),    // Announcements
        ])
        .split(area);

    let today = chrono::Local::now().format("%A, %B %-d, %Y").to_string();
    let refreshing = if state.dashboard.is_refreshing() {
        "  [refreshing]"
    } else {
        ""
    };
    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hello, {}!{}", state.user.name, refreshing),
            Style::default().bold(),
        )),
        Line::from(Span::styled(today, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(greeting, chunks[0]);

    draw_home_tiles(f, state, chunks[1]);
    draw_home_stats(f, state, chunks[2]);
    draw_home_announcements(f, state, chunks[3]);
}

fn draw_home_tiles(f: &mut Frame, state: &RenderState, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let fee_due = state
        .dashboard
        .data()
        .map(|d| d.stats.fee_due)
        .unwrap_or(0);

    render_tile(f, tiles[0], "Courses", Some("View all courses".into()), Color::Cyan);
    render_tile(f, tiles[1], "Exam Scores", Some("View results".into()), Color::Yellow);
    render_tile(
        f,
        tiles[2],
        "Fee Payment",
        fee_badge(fee_due),
        Color::Green,
    );
    render_tile(
        f,
        tiles[3],
        "Registration",
        Some("Course registration".into()),
        Color::Magenta,
    );
}

fn render_tile(f: &mut Frame, area: Rect, title: &str, subtitle: Option<String>, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title));

    let mut lines = Vec::new();
    if let Some(text) = subtitle {
        let style = if text.starts_with('₹') {
            // Due amount badge
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let tile = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(tile, area);
}

fn draw_home_stats(f: &mut Frame, state: &RenderState, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (pending, quizzes) = state
        .dashboard
        .data()
        .map(|d| (d.stats.pending_assignments, d.stats.upcoming_quizzes))
        .unwrap_or((0, 0));

    render_stat_card(f, cards[0], pending, "Pending Assignments");
    render_stat_card(f, cards[1], quizzes, "Upcoming Quizzes");
}

fn render_stat_card(f: &mut Frame, area: Rect, value: u32, label: &str) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().bold().fg(Color::Cyan),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(card, area);
}

fn draw_home_announcements(f: &mut Frame, state: &RenderState, area: Rect) {
    let announcements = state
        .dashboard
        .data()
        .map(|d| d.announcements.as_slice())
        .unwrap_or(&[]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Announcements ");

    if announcements.is_empty() {
        let empty = Paragraph::new("No announcements")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for a in announcements {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", a.priority.as_str()),
                Style::default().fg(priority_color(a.priority)),
            ),
            Span::styled(a.title.clone(), Style::default().bold()),
        ]));
        lines.push(Line::from(Span::raw(format!("  {}", a.message))));
        lines.push(Line::from(Span::styled(
            format!("  {}", format_date(&a.created_at)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(list, area);
}

// ============================================================================
// Courses screen
// ============================================================================

fn draw_courses(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.subjects.is_loading() {
        draw_spinner(f, area);
        return;
    }

    let refreshing = if state.subjects.is_refreshing() {
        " [refreshing]"
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" My Courses{} ", refreshing));

    let subjects = state
        .subjects
        .data()
        .map(|s| s.as_slice())
        .unwrap_or(&[]);

    if shows_empty_state(subjects.len(), state.subjects.busy()) {
        f.render_widget(block, area);
        draw_empty_state(f, "No courses enrolled", area);
        return;
    }

    let lines = subject_lines(subjects);
    let list = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(list, area);
}

fn subject_lines(subjects: &[Subject]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for s in subjects {
        lines.push(Line::from(vec![
            Span::styled(s.code.clone(), Style::default().fg(Color::Cyan).bold()),
            Span::raw("  "),
            Span::styled(s.name.clone(), Style::default().bold()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} Credits • {}", s.credits, s.category),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  L: {} | T: {} | P: {}   {}",
                s.lecture_hours, s.tutorial_hours, s.practical_hours, s.evaluation_pattern
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines
}

// ============================================================================
// Library screen
// ============================================================================

fn draw_library(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let selected = match state.library_tab {
        LibraryTab::Search => 0,
        LibraryTab::Issued => 1,
    };
    let tabs = render_tabs(&["Search Books", "Issued Books"], selected);
    f.render_widget(tabs, chunks[0]);

    match state.library_tab {
        LibraryTab::Search => draw_library_search(f, state, chunks[1]),
        LibraryTab::Issued => draw_library_issued(f, state, chunks[1]),
    }
}

fn draw_library_search(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    // Query input
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(state.search_query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search by title, author, or ISBN (/:edit Enter:search) "),
    );
    f.render_widget(input, chunks[0]);

    if editing {
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let cursor_x = (chunks[0].x + state.search_cursor as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, chunks[0].y + 1));
    }

    // Results
    if state.books.is_loading() {
        draw_spinner(f, chunks[1]);
        return;
    }

    let books = state.books.data().map(|b| b.as_slice()).unwrap_or(&[]);
    let block = Block::default().borders(Borders::ALL).title(" Results ");

    if shows_empty_state(books.len(), state.books.busy()) {
        f.render_widget(block, chunks[1]);
        draw_empty_state(f, search_empty_text(&state.search_query), chunks[1]);
        return;
    }

    let list = Paragraph::new(book_lines(books))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(list, chunks[1]);
}

fn book_lines(books: &[Book]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for b in books {
        lines.push(Line::from(Span::styled(
            b.title.clone(),
            Style::default().bold(),
        )));
        lines.push(Line::from(Span::raw(format!("  {}", b.author))));
        lines.push(Line::from(Span::styled(
            format!("  ISBN: {} • {}", b.isbn, b.category),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}/{} Available", b.available_copies, b.total_copies),
            Style::default().fg(availability_color(b.is_available())),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn draw_library_issued(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.issued.is_loading() {
        draw_spinner(f, area);
        return;
    }

    let refreshing = if state.issued.is_refreshing() {
        " [refreshing]"
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Issued Books{} ", refreshing));

    let issued = state.issued.data().map(|i| i.as_slice()).unwrap_or(&[]);

    if shows_empty_state(issued.len(), state.issued.busy()) {
        f.render_widget(block, area);
        draw_empty_state(f, "No books issued", area);
        return;
    }

    let list = Paragraph::new(issued_lines(issued))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(list, area);
}

fn issued_lines(issued: &[IssuedBook]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in issued {
        let title = entry
            .book
            .as_ref()
            .map(|b| b.title.clone())
            .unwrap_or_else(|| String::from("(unknown book)"));
        lines.push(Line::from(vec![
            Span::styled(title, Style::default().bold()),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", entry.status.label()),
                Style::default().fg(issue_status_color(entry.status)),
            ),
        ]));
        if let Some(book) = &entry.book {
            lines.push(Line::from(Span::raw(format!("  {}", book.author))));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "  Issued: {}   Due: {}",
                format_date(&entry.issue_date),
                format_date(&entry.due_date)
            ),
            Style::default().fg(Color::DarkGray),
        )));
        if let Some(fine) = fine_line(entry.fine_amount) {
            lines.push(Line::from(Span::styled(
                format!("  {}", fine),
                Style::default().fg(Color::Red).bold(),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

// ============================================================================
// More screen
// ============================================================================

fn draw_more(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|item| ListItem::new(format!("  {}", item.title)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" More "))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_menu_item));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(APP_NAME, Style::default().bold())),
        Line::from(Span::styled(
            format!("Version {}", APP_VERSION),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}

// ============================================================================
// Profile screen
// ============================================================================

fn draw_profile(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Avatar + name
            Constraint::Length(9),  // Student information
            Constraint::Min(3),     // Actions
        ])
        .split(area);

    let user = &state.user;

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("({})  {}", user.initial(), user.name),
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let info_rows = [
        ("Roll Number", user.roll_no.clone()),
        ("Program", user.program.clone()),
        ("Year", user.year.to_string()),
        ("Semester", user.semester.to_string()),
        ("Section", user.section.clone()),
    ];
    let mut lines = Vec::new();
    for (label, value) in info_rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(value, Style::default().bold()),
        ]));
    }
    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Student Information "),
    );
    f.render_widget(info, chunks[1]);

    let actions = Paragraph::new(vec![Line::from(vec![
        Span::styled("l", Style::default().fg(Color::Red).bold()),
        Span::raw("  Logout"),
    ])])
    .block(Block::default().borders(Borders::ALL).title(" Actions "));
    f.render_widget(actions, chunks[2]);
}

// ============================================================================
// Status bar and popups
// ============================================================================

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    use messages::ui_events::AppTab;

    let busy = state.dashboard.busy()
        || state.subjects.busy()
        || state.books.busy()
        || state.issued.busy();

    let status = if busy {
        " Loading... "
    } else if state.input_mode == InputMode::Editing {
        " Enter:search | Esc:cancel "
    } else {
        match state.active_tab {
            AppTab::Library => " 1-5:screens | Tab:sub-tab | /:search | r:refresh | ?:help | q:quit ",
            AppTab::More => " 1-5:screens | Up/Down:navigate | Enter:open | ?:help | q:quit ",
            AppTab::Profile => " 1-5:screens | l:logout | ?:help | q:quit ",
            _ => " 1-5:screens | r:refresh | Up/Down:scroll | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 CAMPUS TUI - Keyboard Shortcuts

 SCREENS
   1 / 2 / 3 / 4 / 5  Home, Courses, Library, More, Profile

 LISTS
   r                  Refresh current screen
   Up / Down          Scroll

 LIBRARY
   Tab                Switch Search / Issued sub-tab
   / or e             Edit search query
   Enter              Run search

 MORE
   Up / Down          Navigate menu
   Enter              Open entry

 PROFILE
   l                  Logout (asks for confirmation)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_logout_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Logout ")
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from("Are you sure you want to logout?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red).bold()),
            Span::raw(":logout   "),
            Span::styled("n", Style::default().fg(Color::Green).bold()),
            Span::raw(":cancel"),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
