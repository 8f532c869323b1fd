use std::{collections::HashSet, fs, path::Path};

use super::ConfigError;
use crate::models::Token;
use serde::{Deserialize, Serialize};

/// Token list file: `{ "tokens": [ { "address": ..., "symbol": ..., ... } ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenListConfig {
    pub tokens: Vec<Token>,
}

impl TokenListConfig {
    const MAX_DECIMALS: u8 = 36;

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: TokenListConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for token in &self.tokens {
            if !seen.insert(token.address) {
                return Err(ConfigError::DuplicateToken(token.address));
            }
            Self::validate_token(token)?;
        }
        Ok(())
    }

    fn validate_token(token: &Token) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidToken {
            address: token.address,
            reason: reason.to_string(),
        };

        if token.symbol.is_empty() {
            return Err(invalid("symbol must not be empty"));
        }
        if token.decimals > Self::MAX_DECIMALS {
            return Err(invalid("decimals must not exceed 36"));
        }
        // Gas tokens are priced, other tokens are listed for display only
        if token.gas && token.eth_value().is_err() {
            return Err(invalid("gas tokens need a positive fixed_eth_conversion"));
        }
        Ok(())
    }
}
