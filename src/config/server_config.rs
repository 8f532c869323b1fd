use std::{env, fmt, str::FromStr};

use super::ConfigError;
use crate::constants::{
    DEFAULT_FAST_GAS_PRICE_MULTIPLIER, DEFAULT_GAS_PRICE_CACHE_TTL_SECONDS,
    DEFAULT_RPC_TIMEOUT_SECONDS, DEFAULT_STANDARD_GAS_PRICE_MULTIPLIER,
};

const DEFAULT_TOKENS_FILE_PATH: &str = "config/tokens.json";

#[derive(Clone)]
pub struct ServerConfig {
    pub rpc_url: String,
    pub rpc_timeout_seconds: u64,
    /// Hex encoded key of the account paying for relayed transactions.
    pub relayer_private_key: Option<String>,
    pub fixed_creation_cost: Option<u128>,
    pub gas_price_cache_ttl_seconds: u64,
    pub gas_price_fast_multiplier: f64,
    pub gas_price_standard_multiplier: f64,
    pub tokens_file_path: String,
}

impl ServerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    /// `ConfigError::MissingField` when `RPC_URL` is unset, `ConfigError::InvalidValue`
    /// when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = env::var("RPC_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField("RPC_URL".into()))?;

        Ok(Self {
            rpc_url,
            rpc_timeout_seconds: parse_env("RPC_TIMEOUT_SECONDS")?
                .unwrap_or(DEFAULT_RPC_TIMEOUT_SECONDS),
            relayer_private_key: env::var("RELAYER_PRIVATE_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            fixed_creation_cost: parse_env("SAFE_FIXED_CREATION_COST")?,
            gas_price_cache_ttl_seconds: parse_env("GAS_PRICE_CACHE_TTL_SECONDS")?
                .unwrap_or(DEFAULT_GAS_PRICE_CACHE_TTL_SECONDS),
            gas_price_fast_multiplier: parse_env("GAS_PRICE_FAST_MULTIPLIER")?
                .unwrap_or(DEFAULT_FAST_GAS_PRICE_MULTIPLIER),
            gas_price_standard_multiplier: parse_env("GAS_PRICE_STANDARD_MULTIPLIER")?
                .unwrap_or(DEFAULT_STANDARD_GAS_PRICE_MULTIPLIER),
            tokens_file_path: env::var("TOKENS_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_TOKENS_FILE_PATH.to_string()),
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("rpc_url", &self.rpc_url)
            .field("rpc_timeout_seconds", &self.rpc_timeout_seconds)
            .field(
                "relayer_private_key",
                &self.relayer_private_key.as_ref().map(|_| "<redacted>"),
            )
            .field("fixed_creation_cost", &self.fixed_creation_cost)
            .field("gas_price_cache_ttl_seconds", &self.gas_price_cache_ttl_seconds)
            .field("gas_price_fast_multiplier", &self.gas_price_fast_multiplier)
            .field(
                "gas_price_standard_multiplier",
                &self.gas_price_standard_multiplier,
            )
            .field("tokens_file_path", &self.tokens_file_path)
            .finish()
    }
}

/// Unset or empty variables are `None`, unparsable ones an error.
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            }),
        _ => Ok(None),
    }
}
