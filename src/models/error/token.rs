use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Cannot get ether price for token {0}")]
    PriceUnavailable(Address),
}
