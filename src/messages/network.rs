//! Network messages - communication between App and Network layers

use crate::models::{Book, DashboardSnapshot, IssuedBook, Subject};

/// Which portal endpoint a fetch targets
#[derive(Debug, Clone, PartialEq)]
pub enum FetchKind {
    Dashboard,
    Subjects,
    BookSearch { query: String },
    IssuedBooks,
}

impl FetchKind {
    /// Endpoint path, used for logging
    pub fn endpoint(&self) -> &'static str {
        match self {
            FetchKind::Dashboard => "/dashboard",
            FetchKind::Subjects => "/subjects",
            FetchKind::BookSearch { .. } => "/library/books",
            FetchKind::IssuedBooks => "/library/issued",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Perform one authenticated GET against a portal endpoint
    Fetch { id: u64, kind: FetchKind },
    /// Shutdown the network actor
    Shutdown,
}

/// A decoded response body, tagged per endpoint
#[derive(Debug, Clone)]
pub enum Payload {
    Dashboard(DashboardSnapshot),
    Subjects(Vec<Subject>),
    Books(Vec<Book>),
    IssuedBooks(Vec<IssuedBook>),
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Fetch succeeded and the body decoded
    Loaded {
        id: u64,
        payload: Payload,
        time_ms: u64,
    },
    /// Fetch failed (transport, HTTP status or decode); the error is only
    /// ever logged, never surfaced to the user
    Failed {
        id: u64,
        error: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Loaded { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
