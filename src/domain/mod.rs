//! Relay policy: admission checks and gas pricing for relayed Safe transactions.
mod relay;
pub use relay::*;
