//! Configuration loaded at startup: server settings from the environment and the
//! gas token list from a JSON file.
use alloy::primitives::Address;
use thiserror::Error;

mod server_config;
pub use server_config::*;

mod token_list;
pub use token_list::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Duplicate token address: {0}")]
    DuplicateToken(Address),
    #[error("Invalid token {address}: {reason}")]
    InvalidToken { address: Address, reason: String },
}
