//! Startup wiring for the relay service.
//!
//! Collaborators are built once from [`ServerConfig`](crate::config::ServerConfig) and handed
//! to the service explicitly, there is no global instance.
mod initialize_relay_service;
pub use initialize_relay_service::*;
