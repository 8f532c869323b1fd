use crate::{
    models::{RepositoryError, TokenError},
    services::{GasStationError, ProviderError},
};
use alloy::primitives::{Address, U256};
use thiserror::Error;

/// Reasons a relay request is rejected, or a collaborator failure surfaced unchanged.
#[derive(Error, Debug)]
pub enum RelayServiceError {
    #[error("Invalid refund receiver {0}, refunds must go to tx.origin (null address)")]
    InvalidRefundReceiver(Address),

    #[error("Tx internal gas price cannot be 0")]
    RefundMustBeEnabled,

    #[error("Need at least {threshold} signatures, got {provided}")]
    SignaturesNotFound { threshold: U256, provided: usize },

    #[error("Gas token {0} not valid")]
    InvalidGasToken(Address),

    #[error("Required gas-price>={required}, got {gas_price}")]
    GasPriceTooLow { gas_price: U256, required: u128 },

    #[error("Chain client error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Gas station error: {0}")]
    GasStation(#[from] GasStationError),

    #[error("Token registry error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl RelayServiceError {
    /// Determines if this error is transient (can retry) or permanent (should fail).
    ///
    /// Policy rejections never change on retry. Collaborator failures delegate to the
    /// underlying error. The relay service itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            RelayServiceError::Provider(err) => err.is_transient(),
            RelayServiceError::GasStation(err) => err.is_transient(),
            RelayServiceError::Repository(err) => err.is_transient(),

            RelayServiceError::InvalidRefundReceiver(_)
            | RelayServiceError::RefundMustBeEnabled
            | RelayServiceError::SignaturesNotFound { .. }
            | RelayServiceError::InvalidGasToken(_)
            | RelayServiceError::GasPriceTooLow { .. }
            | RelayServiceError::Token(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_service_error_display() {
        let address = Address::repeat_byte(0x42);
        let test_cases = vec![
            (
                RelayServiceError::InvalidRefundReceiver(address),
                format!(
                    "Invalid refund receiver {address}, refunds must go to tx.origin (null address)"
                ),
            ),
            (
                RelayServiceError::RefundMustBeEnabled,
                "Tx internal gas price cannot be 0".to_string(),
            ),
            (
                RelayServiceError::SignaturesNotFound {
                    threshold: U256::from(2),
                    provided: 1,
                },
                "Need at least 2 signatures, got 1".to_string(),
            ),
            (
                RelayServiceError::InvalidGasToken(address),
                format!("Gas token {address} not valid"),
            ),
            (
                RelayServiceError::GasPriceTooLow {
                    gas_price: U256::from(5),
                    required: 10,
                },
                "Required gas-price>=10, got 5".to_string(),
            ),
        ];

        for (error, expected) in test_cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_policy_errors_are_permanent() {
        assert!(!RelayServiceError::RefundMustBeEnabled.is_transient());
        assert!(!RelayServiceError::InvalidGasToken(Address::ZERO).is_transient());
        assert!(!RelayServiceError::InvalidRefundReceiver(Address::ZERO).is_transient());
        assert!(!RelayServiceError::GasPriceTooLow {
            gas_price: U256::from(1),
            required: 2
        }
        .is_transient());
        assert!(!RelayServiceError::Token(TokenError::PriceUnavailable(Address::ZERO)).is_transient());
    }

    #[test]
    fn test_collaborator_errors_delegate() {
        assert!(RelayServiceError::Provider(ProviderError::Timeout).is_transient());
        assert!(!RelayServiceError::Provider(ProviderError::SimulationFailed(
            "GS026".to_string()
        ))
        .is_transient());
        assert!(
            RelayServiceError::GasStation(GasStationError::Provider(ProviderError::RateLimited))
                .is_transient()
        );
        assert!(
            RelayServiceError::Repository(RepositoryError::ConnectionError("down".to_string()))
                .is_transient()
        );
        assert!(
            !RelayServiceError::Repository(RepositoryError::ConstraintViolation("bad".to_string()))
                .is_transient()
        );
    }
}
