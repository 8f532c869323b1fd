//! Gas station deriving standard and fast prices from the node's `eth_gasPrice`.
use super::{GasPriceCache, GasPriceSourceTrait, GasStationError, GasStationTrait};
use crate::{
    constants::{
        DEFAULT_FAST_GAS_PRICE_MULTIPLIER, DEFAULT_GAS_PRICE_CACHE_TTL_SECONDS,
        DEFAULT_STANDARD_GAS_PRICE_MULTIPLIER,
    },
    models::GasPrices,
};
use async_trait::async_trait;
use log::debug;
use std::{sync::Arc, time::Duration};

#[derive(Debug, Clone, PartialEq)]
pub struct GasStationConfig {
    pub standard_multiplier: f64,
    pub fast_multiplier: f64,
    pub cache_ttl: Duration,
}

impl Default for GasStationConfig {
    fn default() -> Self {
        Self {
            standard_multiplier: DEFAULT_STANDARD_GAS_PRICE_MULTIPLIER,
            fast_multiplier: DEFAULT_FAST_GAS_PRICE_MULTIPLIER,
            cache_ttl: Duration::from_secs(DEFAULT_GAS_PRICE_CACHE_TTL_SECONDS),
        }
    }
}

impl GasStationConfig {
    fn validate(&self) -> Result<(), GasStationError> {
        for (name, multiplier) in [
            ("standard", self.standard_multiplier),
            ("fast", self.fast_multiplier),
        ] {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(GasStationError::InvalidConfiguration(format!(
                    "{name} multiplier must be a positive number, got {multiplier}"
                )));
            }
        }

        if self.fast_multiplier < self.standard_multiplier {
            return Err(GasStationError::InvalidConfiguration(format!(
                "fast multiplier ({}) must not be lower than standard multiplier ({})",
                self.fast_multiplier, self.standard_multiplier
            )));
        }
        Ok(())
    }
}

pub struct EvmGasStation<S>
where
    S: GasPriceSourceTrait,
{
    source: Arc<S>,
    config: GasStationConfig,
    cache: GasPriceCache,
}

impl<S> EvmGasStation<S>
where
    S: GasPriceSourceTrait,
{
    pub fn new(source: Arc<S>, config: GasStationConfig) -> Result<Self, GasStationError> {
        config.validate()?;
        let cache = GasPriceCache::new(config.cache_ttl);
        Ok(Self {
            source,
            config,
            cache,
        })
    }

    fn apply_multiplier(base: u128, multiplier: f64) -> u128 {
        ((base as f64) * multiplier).round() as u128
    }
}

#[async_trait]
impl<S> GasStationTrait for EvmGasStation<S>
where
    S: GasPriceSourceTrait,
{
    async fn get_gas_prices(&self) -> Result<GasPrices, GasStationError> {
        if let Some(prices) = self.cache.get() {
            return Ok(prices);
        }

        let base = self.source.get_network_gas_price().await?;
        let prices = GasPrices {
            fast: Self::apply_multiplier(base, self.config.fast_multiplier),
            standard: Self::apply_multiplier(base, self.config.standard_multiplier),
        };
        debug!(
            "Fetched gas prices: standard={} fast={} (network={})",
            prices.standard, prices.fast, base
        );

        self.cache.set(prices);
        Ok(prices)
    }
}
