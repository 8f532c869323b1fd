//! Gas Price Cache Module
//!
//! Keeps the last fetched gas prices for a fixed time so bursts of relay requests
//! do not hit the RPC node for every price lookup.

use crate::models::GasPrices;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

/// Represents an entry in the gas price cache.
#[derive(Clone, Debug)]
pub struct GasPriceCacheEntry {
    pub prices: GasPrices,
    pub fetched_at: Instant,
    pub expire_after: Duration,
}

impl GasPriceCacheEntry {
    pub fn new(prices: GasPrices, expire_after: Duration) -> Self {
        Self {
            prices,
            fetched_at: Instant::now(),
            expire_after,
        }
    }

    /// Checks if the cache entry has expired
    pub fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() >= self.expire_after
    }
}

/// Thread-safe single entry gas price cache
#[derive(Debug)]
pub struct GasPriceCache {
    entry: RwLock<Option<GasPriceCacheEntry>>,
    ttl: Duration,
}

impl GasPriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Returns the cached prices unless missing or expired
    pub fn get(&self) -> Option<GasPrices> {
        self.entry
            .read()
            .as_ref()
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.prices)
    }

    pub fn set(&self, prices: GasPrices) {
        *self.entry.write() = Some(GasPriceCacheEntry::new(prices, self.ttl));
    }
}
