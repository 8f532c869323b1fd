//! Token registry: which tokens can pay relay fees and at what price.
use crate::models::{RepositoryError, Token};
use alloy::primitives::Address;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

mod token_in_memory;
pub use token_in_memory::*;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenRegistryTrait: Send + Sync {
    /// Returns the token at `address` only if it is flagged as a gas token.
    async fn get_gas_token(&self, address: Address) -> Result<Option<Token>, RepositoryError>;
}
