//! Gas price and gas limit defaults.

/// Multiplier applied to `eth_gasPrice` to get the standard price.
pub const DEFAULT_STANDARD_GAS_PRICE_MULTIPLIER: f64 = 1.0;

/// Multiplier applied to `eth_gasPrice` to get the fast price.
pub const DEFAULT_FAST_GAS_PRICE_MULTIPLIER: f64 = 1.5;

/// Seconds a fetched pair of gas prices stays valid.
pub const DEFAULT_GAS_PRICE_CACHE_TTL_SECONDS: u64 = 10;

/// Gas limit buffer multiplier for estimated relay transactions, 10% increase
pub const GAS_LIMIT_BUFFER_MULTIPLIER: u64 = 110;

/// Default RPC request timeout
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 30;

/// Interval between receipt polls
pub const RECEIPT_POLL_INTERVAL_MS: u64 = 1_000;
