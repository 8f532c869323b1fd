//! Lookup stores consumed by the relay service.
mod token;
pub use token::*;
