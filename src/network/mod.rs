//! Network layer - reqwest client and the async fetch actor

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{FetchError, PortalClient};
