//! Relay policy engine for Safe multisig transactions.
//!
//! [`RelayService`] decides whether a pre-signed Safe transaction is admissible and at which
//! gas price it is sent to the network. Checks run in a fixed order and the first failure
//! aborts the request before anything is submitted:
//!
//! 1. Optional fields are normalized (`data` to empty bytes, addresses to the null address)
//! 2. The refund receiver must be the null address
//! 3. The internal gas price must be non zero
//! 4. The signature count must reach the Safe threshold
//! 5. The internal gas price must cover the `standard` price, in ether or in the gas token
//!
//! Accepted transactions are always sent with the `fast` gas price.
use std::sync::Arc;

use super::RelayTransactionValidator;
use crate::{
    constants::{NATIVE_TOKEN_ETH_VALUE, NULL_ADDRESS},
    models::{
        RelayRequest, RelayResult, RelayServiceError, SafeCreationEstimate, SafeInfo,
        SafeMultisigTx, Token,
    },
    repositories::TokenRegistryTrait,
    services::{GasStationTrait, SafeChainClientTrait},
};
use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
use log::{debug, info, warn};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayServiceConfig {
    /// Flat Safe creation payment, replaces the gas based estimate when set.
    pub fixed_creation_cost: Option<u128>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RelayServiceTrait: Send + Sync {
    /// Reads the current on-chain state of a Safe.
    async fn retrieve_safe_info(&self, safe_address: Address)
        -> Result<SafeInfo, RelayServiceError>;

    /// Estimates the cost of deploying a Safe with `number_owners` owners, paid in
    /// `payment_token` (ether when `None` or the null address).
    async fn estimate_safe_creation(
        &self,
        number_owners: usize,
        payment_token: Option<Address>,
    ) -> Result<SafeCreationEstimate, RelayServiceError>;

    /// Gas price a client should sign to get its transaction relayed, in `gas_token` units.
    async fn estimate_tx_gas_price(
        &self,
        gas_token: Option<Address>,
    ) -> Result<u128, RelayServiceError>;

    /// Validates a pre-signed Safe transaction and submits it to the network.
    async fn send_multisig_tx(
        &self,
        request: RelayRequest,
    ) -> Result<RelayResult, RelayServiceError>;
}

pub struct RelayService<C, G, T>
where
    C: SafeChainClientTrait,
    G: GasStationTrait,
    T: TokenRegistryTrait,
{
    chain_client: Arc<C>,
    gas_station: Arc<G>,
    token_registry: Arc<T>,
    config: RelayServiceConfig,
}

impl<C, G, T> RelayService<C, G, T>
where
    C: SafeChainClientTrait,
    G: GasStationTrait,
    T: TokenRegistryTrait,
{
    pub fn new(
        chain_client: Arc<C>,
        gas_station: Arc<G>,
        token_registry: Arc<T>,
        config: RelayServiceConfig,
    ) -> Self {
        Self {
            chain_client,
            gas_station,
            token_registry,
            config,
        }
    }

    pub fn config(&self) -> &RelayServiceConfig {
        &self.config
    }

    /// Looks up a registered gas token, tokens not flagged for gas are rejected too.
    async fn get_gas_token(&self, address: Address) -> Result<Token, RelayServiceError> {
        self.token_registry
            .get_gas_token(address)
            .await?
            .ok_or(RelayServiceError::InvalidGasToken(address))
    }

    async fn validate_multisig_tx(
        &self,
        request: RelayRequest,
    ) -> Result<SafeMultisigTx, RelayServiceError> {
        let data = request.data.unwrap_or_else(Bytes::new);
        let gas_token = request.gas_token.unwrap_or(NULL_ADDRESS);
        let refund_receiver = request.refund_receiver.unwrap_or(NULL_ADDRESS);
        let to = request.to.unwrap_or(NULL_ADDRESS);

        RelayTransactionValidator::validate_refund_receiver(refund_receiver)?;
        RelayTransactionValidator::validate_refund_enabled(request.gas_price)?;

        let threshold = self
            .chain_client
            .retrieve_threshold(request.safe_address)
            .await?;
        RelayTransactionValidator::validate_signatures(&request.signatures, threshold)?;

        let gas_prices = self.gas_station.get_gas_prices().await?;
        if gas_token != NULL_ADDRESS {
            let token = self.get_gas_token(gas_token).await?;
            RelayTransactionValidator::validate_token_gas_price(
                request.gas_price,
                &token,
                &gas_prices,
            )?;
        } else {
            RelayTransactionValidator::validate_native_gas_price(request.gas_price, &gas_prices)?;
        }

        Ok(SafeMultisigTx {
            safe_address: request.safe_address,
            to,
            value: request.value,
            data,
            operation: request.operation,
            safe_tx_gas: request.safe_tx_gas,
            data_gas: request.data_gas,
            gas_price: request.gas_price,
            gas_token,
            refund_receiver,
            signatures: request.signatures,
            tx_sender: request.tx_sender,
            tx_gas: request.tx_gas,
            tx_gas_price: gas_prices.fast,
            block_identifier: request.block_identifier,
        })
    }
}

#[async_trait]
impl<C, G, T> RelayServiceTrait for RelayService<C, G, T>
where
    C: SafeChainClientTrait,
    G: GasStationTrait,
    T: TokenRegistryTrait,
{
    async fn retrieve_safe_info(
        &self,
        safe_address: Address,
    ) -> Result<SafeInfo, RelayServiceError> {
        let (nonce, threshold, owners, master_copy) = futures::try_join!(
            self.chain_client.retrieve_nonce(safe_address),
            self.chain_client.retrieve_threshold(safe_address),
            self.chain_client.retrieve_owners(safe_address),
            self.chain_client.retrieve_master_copy_address(safe_address),
        )?;

        Ok(SafeInfo {
            address: safe_address,
            nonce,
            threshold,
            owners,
            master_copy,
        })
    }

    async fn estimate_safe_creation(
        &self,
        number_owners: usize,
        payment_token: Option<Address>,
    ) -> Result<SafeCreationEstimate, RelayServiceError> {
        let payment_token = payment_token.unwrap_or(NULL_ADDRESS);
        let payment_token_eth_value = if payment_token == NULL_ADDRESS {
            NATIVE_TOKEN_ETH_VALUE
        } else {
            self.get_gas_token(payment_token).await?.eth_value()?
        };

        let gas_price = self.gas_station.get_gas_prices().await?.fast;
        debug!(
            "Estimating Safe creation for {} owners, payment token {}, gas price {}",
            number_owners, payment_token, gas_price
        );

        let estimate = self.chain_client.estimate_safe_creation(
            number_owners,
            gas_price,
            payment_token,
            payment_token_eth_value,
            self.config.fixed_creation_cost,
        )?;
        Ok(estimate)
    }

    async fn estimate_tx_gas_price(
        &self,
        gas_token: Option<Address>,
    ) -> Result<u128, RelayServiceError> {
        let gas_token = gas_token.unwrap_or(NULL_ADDRESS);
        let fast = self.gas_station.get_gas_prices().await?.fast;

        if gas_token == NULL_ADDRESS {
            return Ok(fast);
        }

        let token = self.get_gas_token(gas_token).await?;
        let gas_price = token.calculate_gas_price(fast)?;
        debug!(
            "Relay gas price for token {}: {} (network fast price {})",
            token.symbol, gas_price, fast
        );
        Ok(gas_price)
    }

    async fn send_multisig_tx(
        &self,
        request: RelayRequest,
    ) -> Result<RelayResult, RelayServiceError> {
        let safe_address = request.safe_address;
        let tx = self
            .validate_multisig_tx(request)
            .await
            .inspect_err(|err| warn!("Rejected multisig tx for Safe {}: {}", safe_address, err))?;

        let tx_gas_price = tx.tx_gas_price;
        let result = self.chain_client.send_multisig_tx(tx).await?;
        info!(
            "Relayed multisig tx {} for Safe {} with gas price {}",
            result.tx_hash, safe_address, tx_gas_price
        );
        Ok(result)
    }
}
