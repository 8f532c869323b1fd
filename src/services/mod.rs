//! # Services Module
//!
//! Collaborators of the relay service: the chain client and the gas station.

pub mod gas;
pub use gas::*;

pub mod provider;
pub use provider::*;
