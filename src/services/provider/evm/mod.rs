//! EVM chain client for Safes.
//!
//! Reads Safe state through `eth_call`/`eth_getStorageAt` and relays signed Safe
//! transactions by wrapping them in an `execTransaction` call sent from the relayer
//! account (or a per-request sender).

use std::{sync::Arc, time::Duration};

use alloy::{
    eips::BlockId,
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, B256, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{
        client::{ClientBuilder, RpcClient},
        types::{TransactionReceipt, TransactionRequest},
    },
    signers::local::PrivateKeySigner,
    sol_types::SolCall,
    transports::http::Http,
};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{ClientBuilder as ReqwestClientBuilder, Url};
use tokio::sync::Mutex;

#[cfg(test)]
use mockall::automock;

use super::{estimate_safe_creation_cost, ISafe, ProviderError};
use crate::{
    constants::{GAS_LIMIT_BUFFER_MULTIPLIER, RECEIPT_POLL_INTERVAL_MS},
    models::{RelayResult, SafeCreationEstimate, SafeMultisigTx},
    services::GasPriceSourceTrait,
    utils::poll_until,
};

/// Chain operations the relay service depends on.
///
/// Implementations own their timeouts and the nonce ordering of the accounts they
/// submit from. Failures are returned as-is, nothing is retried by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SafeChainClientTrait: Send + Sync {
    /// Current nonce of the Safe.
    async fn retrieve_nonce(&self, safe_address: Address) -> Result<U256, ProviderError>;

    /// Number of owner signatures required to execute a Safe transaction.
    async fn retrieve_threshold(&self, safe_address: Address) -> Result<U256, ProviderError>;

    async fn retrieve_owners(&self, safe_address: Address) -> Result<Vec<Address>, ProviderError>;

    /// Address of the logic contract the Safe proxy delegates to.
    async fn retrieve_master_copy_address(
        &self,
        safe_address: Address,
    ) -> Result<Address, ProviderError>;

    /// Estimates gas and payment for deploying a new Safe.
    fn estimate_safe_creation(
        &self,
        number_owners: usize,
        gas_price: u128,
        payment_token: Address,
        payment_token_eth_value: f64,
        fixed_creation_cost: Option<u128>,
    ) -> Result<SafeCreationEstimate, ProviderError>;

    /// Simulates and sends `execTransaction` for an already validated Safe transaction.
    async fn send_multisig_tx(&self, tx: SafeMultisigTx) -> Result<RelayResult, ProviderError>;

    /// Polls for the receipt of `tx_hash`, returns `None` once `timeout` elapses.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Option<TransactionReceipt>;
}

/// Chain client backed by a single HTTP JSON-RPC endpoint.
#[derive(Clone)]
pub struct EvmSafeProvider {
    provider: RootProvider,
    rpc_url: Url,
    /// Timeout in seconds for HTTP requests
    timeout_seconds: u64,
    /// Account paying for relayed transactions
    relayer_signer: Option<PrivateKeySigner>,
    /// Serializes submissions so nonces are assigned in order
    submission_lock: Arc<Mutex<()>>,
}

impl EvmSafeProvider {
    /// Creates a new chain client.
    ///
    /// # Arguments
    /// * `rpc_url` - JSON-RPC endpoint
    /// * `timeout_seconds` - Timeout applied to every HTTP request
    /// * `relayer_signer` - Default sender of relayed transactions, read-only client when `None`
    pub fn new(
        rpc_url: &str,
        timeout_seconds: u64,
        relayer_signer: Option<PrivateKeySigner>,
    ) -> Result<Self, ProviderError> {
        let rpc_url: Url = rpc_url
            .parse()
            .map_err(|e| ProviderError::NetworkConfiguration(format!("Invalid URL format: {e}")))?;

        let client = Self::build_rpc_client(&rpc_url, timeout_seconds)?;

        Ok(Self {
            provider: RootProvider::new(client),
            rpc_url,
            timeout_seconds,
            relayer_signer,
            submission_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Address of the default relayer account, if any.
    pub fn relayer_address(&self) -> Option<Address> {
        self.relayer_signer.as_ref().map(|signer| signer.address())
    }

    fn build_rpc_client(rpc_url: &Url, timeout_seconds: u64) -> Result<RpcClient, ProviderError> {
        let http_client = ReqwestClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        let transport = Http::with_client(http_client, rpc_url.clone());
        let is_local = transport.guess_local();

        Ok(ClientBuilder::default().transport(transport, is_local))
    }

    /// Calls a view function of the Safe and decodes its return value.
    async fn call_safe<C: SolCall>(
        &self,
        safe_address: Address,
        call: C,
    ) -> Result<C::Return, ProviderError> {
        let tx = TransactionRequest::default()
            .with_to(safe_address)
            .with_input(call.abi_encode());

        let output = self.provider.call(tx).await?;
        Ok(C::abi_decode_returns(&output)?)
    }

    /// Runs `execTransaction` with `eth_call` so reverts are caught before paying for them.
    async fn simulate_exec_transaction(
        &self,
        request: &TransactionRequest,
        block_identifier: BlockId,
    ) -> Result<(), ProviderError> {
        let output = match self.provider.call(request.clone()).block(block_identifier).await {
            Ok(output) => output,
            Err(err) => {
                return Err(match err.as_error_resp() {
                    Some(payload) => ProviderError::SimulationFailed(payload.message.to_string()),
                    None => err.into(),
                });
            }
        };

        let success = ISafe::execTransactionCall::abi_decode_returns(&output)?;
        if !success {
            return Err(ProviderError::SimulationFailed(
                "execTransaction returned false".to_string(),
            ));
        }
        Ok(())
    }

    /// Estimates the outer transaction gas limit, with a safety buffer.
    async fn estimate_tx_gas(
        &self,
        request: &TransactionRequest,
        block_identifier: BlockId,
    ) -> Result<u64, ProviderError> {
        let estimated = self
            .provider
            .estimate_gas(request.clone())
            .block(block_identifier)
            .await?;
        Ok(estimated.saturating_mul(GAS_LIMIT_BUFFER_MULTIPLIER) / 100)
    }
}

/// ABI encodes the `execTransaction` call for a validated Safe transaction.
pub fn encode_exec_transaction(tx: &SafeMultisigTx) -> Bytes {
    let call = ISafe::execTransactionCall::new((
        tx.to,
        tx.value,
        tx.data.clone(),
        tx.operation.into(),
        tx.safe_tx_gas,
        tx.data_gas,
        tx.gas_price,
        tx.gas_token,
        tx.refund_receiver,
        tx.signatures.clone(),
    ));
    call.abi_encode().into()
}

#[async_trait]
impl SafeChainClientTrait for EvmSafeProvider {
    async fn retrieve_nonce(&self, safe_address: Address) -> Result<U256, ProviderError> {
        self.call_safe(safe_address, ISafe::nonceCall::new(())).await
    }

    async fn retrieve_threshold(&self, safe_address: Address) -> Result<U256, ProviderError> {
        self.call_safe(safe_address, ISafe::getThresholdCall::new(()))
            .await
    }

    async fn retrieve_owners(&self, safe_address: Address) -> Result<Vec<Address>, ProviderError> {
        self.call_safe(safe_address, ISafe::getOwnersCall::new(())).await
    }

    async fn retrieve_master_copy_address(
        &self,
        safe_address: Address,
    ) -> Result<Address, ProviderError> {
        // Proxies keep the master copy in storage slot 0
        let slot = self
            .provider
            .get_storage_at(safe_address, U256::ZERO)
            .await?;
        Ok(Address::from_word(B256::from(slot.to_be_bytes::<32>())))
    }

    fn estimate_safe_creation(
        &self,
        number_owners: usize,
        gas_price: u128,
        payment_token: Address,
        payment_token_eth_value: f64,
        fixed_creation_cost: Option<u128>,
    ) -> Result<SafeCreationEstimate, ProviderError> {
        estimate_safe_creation_cost(
            number_owners,
            gas_price,
            payment_token,
            payment_token_eth_value,
            fixed_creation_cost,
        )
    }

    async fn send_multisig_tx(&self, tx: SafeMultisigTx) -> Result<RelayResult, ProviderError> {
        let signer = match tx.tx_sender.clone().or_else(|| self.relayer_signer.clone()) {
            Some(signer) => signer,
            None => {
                return Err(ProviderError::SignerError(
                    "No sender key configured for relayed transactions".to_string(),
                ))
            }
        };

        let mut request = TransactionRequest::default()
            .with_from(signer.address())
            .with_to(tx.safe_address)
            .with_input(encode_exec_transaction(&tx))
            .with_gas_price(tx.tx_gas_price);

        self.simulate_exec_transaction(&request, tx.block_identifier)
            .await?;

        let gas_limit = match tx.tx_gas {
            Some(gas_limit) => gas_limit,
            None => self.estimate_tx_gas(&request, tx.block_identifier).await?,
        };
        request.set_gas_limit(gas_limit);

        debug!(
            "Sending execTransaction for safe {} from {} with gas limit {} and gas price {}",
            tx.safe_address,
            signer.address(),
            gas_limit,
            tx.tx_gas_price
        );

        let _guard = self.submission_lock.lock().await;
        let wallet_provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(Self::build_rpc_client(&self.rpc_url, self.timeout_seconds)?);

        let pending_tx = wallet_provider.send_transaction(request.clone()).await?;
        let tx_hash = *pending_tx.tx_hash();

        info!("Relayed transaction {} for safe {}", tx_hash, tx.safe_address);

        Ok(RelayResult {
            tx_hash,
            tx: request,
        })
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Option<TransactionReceipt> {
        poll_until(
            || async {
                self.provider
                    .get_transaction_receipt(tx_hash)
                    .await
                    .map_err(ProviderError::from)
            },
            timeout,
            Duration::from_millis(RECEIPT_POLL_INTERVAL_MS),
            "transaction receipt",
        )
        .await
    }
}

#[async_trait]
impl GasPriceSourceTrait for EvmSafeProvider {
    async fn get_network_gas_price(&self) -> Result<u128, ProviderError> {
        Ok(self.provider.get_gas_price().await?)
    }
}
