//! # Campus TUI
//!
//! A terminal-based student portal client.
//!
//! ## Screens
//! - Home: dashboard tiles, stats and announcements
//! - Courses: enrolled subjects
//! - Library: book search and issued books
//! - More: navigation menu
//! - Profile: student record and logout
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, Loader};
pub use config::Config;
pub use messages::{FetchKind, NetworkCommand, NetworkResponse, Payload, RenderState, UiEvent};
pub use models::{Book, DashboardSnapshot, IssuedBook, Subject, User};
pub use network::{FetchError, NetworkActor, PortalClient};
pub use session::Session;
