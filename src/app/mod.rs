//! App layer - state, screen command handlers and the actor loop

pub mod actor;
pub mod commands;
pub mod loader;
pub mod state;

pub use actor::AppActor;
pub use loader::Loader;
pub use state::AppState;
