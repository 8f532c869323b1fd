//! Gas and payment estimation for the deployment of a new Safe.
use crate::{
    constants::{
        NULL_ADDRESS, SAFE_CREATION_BASE_GAS, SAFE_CREATION_ETHER_PAYMENT_GAS,
        SAFE_CREATION_GAS_PER_OWNER, SAFE_CREATION_TOKEN_PAYMENT_GAS,
    },
    models::SafeCreationEstimate,
    services::ProviderError,
};
use alloy::primitives::Address;

/// Estimates gas and payment for deploying a Safe with `number_owners` owners.
///
/// The payment is `fixed_creation_cost` when configured, otherwise the gas cost in wei
/// converted to `payment_token` units with `payment_token_eth_value`.
pub fn estimate_safe_creation_cost(
    number_owners: usize,
    gas_price: u128,
    payment_token: Address,
    payment_token_eth_value: f64,
    fixed_creation_cost: Option<u128>,
) -> Result<SafeCreationEstimate, ProviderError> {
    if number_owners == 0 {
        return Err(ProviderError::InvalidArgument(
            "A Safe needs at least one owner".to_string(),
        ));
    }

    if payment_token_eth_value.is_nan() || payment_token_eth_value <= 0.0 {
        return Err(ProviderError::InvalidArgument(format!(
            "Payment token eth value must be positive, got {payment_token_eth_value}"
        )));
    }

    let payment_gas = if payment_token == NULL_ADDRESS {
        SAFE_CREATION_ETHER_PAYMENT_GAS
    } else {
        SAFE_CREATION_TOKEN_PAYMENT_GAS
    };
    let owners_gas = SAFE_CREATION_GAS_PER_OWNER.saturating_mul(number_owners as u64);
    let gas = SAFE_CREATION_BASE_GAS
        .saturating_add(owners_gas)
        .saturating_add(payment_gas);

    let payment = match fixed_creation_cost {
        Some(cost) => cost,
        None => {
            let base_payment = u128::from(gas).saturating_mul(gas_price);
            (base_payment as f64 / payment_token_eth_value).ceil() as u128
        }
    };

    Ok(SafeCreationEstimate {
        gas,
        gas_price,
        payment,
        payment_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAS_PRICE: u128 = 10_000_000_000;

    #[test]
    fn test_estimate_with_ether() {
        let estimate = estimate_safe_creation_cost(3, GAS_PRICE, NULL_ADDRESS, 1.0, None).unwrap();

        let expected_gas = SAFE_CREATION_BASE_GAS
            + 3 * SAFE_CREATION_GAS_PER_OWNER
            + SAFE_CREATION_ETHER_PAYMENT_GAS;
        assert_eq!(estimate.gas, expected_gas);
        assert_eq!(estimate.gas_price, GAS_PRICE);
        assert_eq!(estimate.payment, u128::from(expected_gas) * GAS_PRICE);
        assert_eq!(estimate.payment_token, NULL_ADDRESS);
    }

    #[test]
    fn test_estimate_with_token_uses_token_value() {
        let token = Address::repeat_byte(0x22);
        let estimate = estimate_safe_creation_cost(1, GAS_PRICE, token, 0.5, None).unwrap();

        let expected_gas =
            SAFE_CREATION_BASE_GAS + SAFE_CREATION_GAS_PER_OWNER + SAFE_CREATION_TOKEN_PAYMENT_GAS;
        assert_eq!(estimate.gas, expected_gas);
        assert_eq!(estimate.payment, u128::from(expected_gas) * GAS_PRICE * 2);
        assert_eq!(estimate.payment_token, token);
    }

    #[test]
    fn test_more_owners_cost_more_gas() {
        let two = estimate_safe_creation_cost(2, GAS_PRICE, NULL_ADDRESS, 1.0, None).unwrap();
        let five = estimate_safe_creation_cost(5, GAS_PRICE, NULL_ADDRESS, 1.0, None).unwrap();
        assert_eq!(five.gas - two.gas, 3 * SAFE_CREATION_GAS_PER_OWNER);
    }

    #[test]
    fn test_fixed_creation_cost_overrides_payment() {
        let estimate =
            estimate_safe_creation_cost(3, GAS_PRICE, NULL_ADDRESS, 1.0, Some(1_000)).unwrap();
        assert_eq!(estimate.payment, 1_000);
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        assert!(matches!(
            estimate_safe_creation_cost(0, GAS_PRICE, NULL_ADDRESS, 1.0, None),
            Err(ProviderError::InvalidArgument(_))
        ));
        assert!(matches!(
            estimate_safe_creation_cost(1, GAS_PRICE, NULL_ADDRESS, 0.0, None),
            Err(ProviderError::InvalidArgument(_))
        ));
        assert!(matches!(
            estimate_safe_creation_cost(1, GAS_PRICE, NULL_ADDRESS, f64::NAN, None),
            Err(ProviderError::InvalidArgument(_))
        ));
    }
}
