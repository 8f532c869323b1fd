use crate::{constants::ETHER_DECIMALS, models::TokenError};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Token known to the relayer.
///
/// Only tokens flagged with `gas` can be used to pay relay fees or Safe creations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub gas: bool,
    /// Price of one whole token in ether. `None` or `0` means no fixed price.
    #[serde(default)]
    pub fixed_eth_conversion: Option<f64>,
}

impl Token {
    /// Value in wei of the smallest unit of the token.
    ///
    /// Ether has 18 decimals, the fixed conversion is scaled by the token decimals
    /// so tokens with fewer decimals get a proportionally higher unit value. A value
    /// that rounds to zero is treated as unpriced.
    pub fn eth_value(&self) -> Result<f64, TokenError> {
        let conversion = self
            .fixed_eth_conversion
            .filter(|conversion| *conversion > 0.0)
            .ok_or(TokenError::PriceUnavailable(self.address))?;

        let multiplier = 10f64.powi(i32::from(ETHER_DECIMALS) - i32::from(self.decimals));
        let eth_value = round_decimals(multiplier * conversion, 10);
        if !eth_value.is_finite() || eth_value <= 0.0 {
            return Err(TokenError::PriceUnavailable(self.address));
        }
        Ok(eth_value)
    }

    /// Converts a payment in wei into token units, rounding up.
    pub fn calculate_payment(&self, eth_payment: u128) -> Result<u128, TokenError> {
        let eth_value = self.eth_value()?;
        Ok((eth_payment as f64 / eth_value).ceil() as u128)
    }

    /// Token-denominated equivalent of a gas price in wei.
    pub fn calculate_gas_price(&self, gas_price: u128) -> Result<u128, TokenError> {
        self.calculate_payment(gas_price)
    }
}

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
