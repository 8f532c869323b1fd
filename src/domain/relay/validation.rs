/// Validator for relayed Safe transactions.
///
/// Each check is a hard gate of the relay pipeline:
/// * Refunds go to `tx.origin` (null refund receiver)
/// * The Safe pays a refund (non zero internal gas price)
/// * Enough signatures are attached to reach the threshold
/// * The internal gas price covers the current standard price, in ether or gas token
use crate::{
    constants::{NULL_ADDRESS, SIGNATURE_SIZE},
    models::{GasPrices, RelayServiceError, Token},
};
use alloy::primitives::{Address, U256};

pub struct RelayTransactionValidator;

impl RelayTransactionValidator {
    /// Only `tx.origin` is accepted as refund receiver, so a signed transaction cannot
    /// send the refund of a relayer-paid execution to a third party.
    pub fn validate_refund_receiver(refund_receiver: Address) -> Result<(), RelayServiceError> {
        if refund_receiver != NULL_ADDRESS {
            return Err(RelayServiceError::InvalidRefundReceiver(refund_receiver));
        }
        Ok(())
    }

    pub fn validate_refund_enabled(gas_price: U256) -> Result<(), RelayServiceError> {
        if gas_price.is_zero() {
            return Err(RelayServiceError::RefundMustBeEnabled);
        }
        Ok(())
    }

    /// Number of complete signatures in a packed signature blob.
    pub fn count_signatures(signatures: &[u8]) -> usize {
        signatures.len() / SIGNATURE_SIZE
    }

    /// Only the count is checked, the Safe verifies the signatures on execution.
    pub fn validate_signatures(
        signatures: &[u8],
        threshold: U256,
    ) -> Result<(), RelayServiceError> {
        let provided = Self::count_signatures(signatures);
        if U256::from(provided) < threshold {
            return Err(RelayServiceError::SignaturesNotFound {
                threshold,
                provided,
            });
        }
        Ok(())
    }

    /// Internal gas price paid in ether must reach the standard network price.
    pub fn validate_native_gas_price(
        gas_price: U256,
        prices: &GasPrices,
    ) -> Result<(), RelayServiceError> {
        Self::validate_minimum_gas_price(gas_price, prices.standard)
    }

    /// Internal gas price paid in `token` must reach the token equivalent of the
    /// standard network price.
    pub fn validate_token_gas_price(
        gas_price: U256,
        token: &Token,
        prices: &GasPrices,
    ) -> Result<(), RelayServiceError> {
        let required = token.calculate_gas_price(prices.standard)?;
        Self::validate_minimum_gas_price(gas_price, required)
    }

    fn validate_minimum_gas_price(gas_price: U256, required: u128) -> Result<(), RelayServiceError> {
        if gas_price < U256::from(required) {
            return Err(RelayServiceError::GasPriceTooLow {
                gas_price,
                required,
            });
        }
        Ok(())
    }
}
