//! This module contains services related to gas price fetching.
use crate::{models::GasPrices, services::ProviderError};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

mod cache;
pub use cache::*;

mod evm_gas_station;
pub use evm_gas_station::*;

#[derive(Error, Debug)]
pub enum GasStationError {
    #[error("Failed to fetch network gas price: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid gas station configuration: {0}")]
    InvalidConfiguration(String),
}

impl GasStationError {
    pub fn is_transient(&self) -> bool {
        match self {
            GasStationError::Provider(err) => err.is_transient(),
            GasStationError::InvalidConfiguration(_) => false,
        }
    }
}

/// Source of current gas prices consumed by the relay service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GasStationTrait: Send + Sync {
    async fn get_gas_prices(&self) -> Result<GasPrices, GasStationError>;
}

/// Raw network gas price the gas station derives its prices from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GasPriceSourceTrait: Send + Sync {
    /// Gas price in wei as returned by `eth_gasPrice`.
    async fn get_network_gas_price(&self) -> Result<u128, ProviderError>;
}
