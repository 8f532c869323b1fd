//! This module provides an in-memory implementation of the token registry.
//!
//! The `InMemoryTokenRegistry` is filled from the token list at startup and
//! answers gas token lookups for the relay service.
use crate::{
    models::{RepositoryError, Token},
    repositories::TokenRegistryTrait,
};
use alloy::primitives::Address;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct InMemoryTokenRegistry {
    store: RwLock<HashMap<Address, Token>>,
}

impl InMemoryTokenRegistry {
    /// Builds a registry from a list of tokens, rejecting duplicated addresses.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, RepositoryError> {
        let mut store = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let address = token.address;
            if store.insert(address, token).is_some() {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Token {address} already registered"
                )));
            }
        }
        Ok(Self {
            store: RwLock::new(store),
        })
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl TokenRegistryTrait for InMemoryTokenRegistry {
    async fn get_gas_token(&self, address: Address) -> Result<Option<Token>, RepositoryError> {
        Ok(self
            .store
            .read()
            .await
            .get(&address)
            .filter(|token| token.gas)
            .cloned())
    }
}
