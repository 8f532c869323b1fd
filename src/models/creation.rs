use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Cost of deploying a new Safe, paid back to the relayer by the Safe itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeCreationEstimate {
    pub gas: u64,
    pub gas_price: u128,
    /// Amount charged, denominated in `payment_token` units.
    pub payment: u128,
    pub payment_token: Address,
}
