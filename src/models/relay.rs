use crate::models::SafeOperation;
use alloy::{
    eips::BlockId,
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};

/// A pre-signed Safe transaction submitted for relaying.
///
/// Optional fields are resolved by the relay service before any check runs:
/// missing `data` becomes empty, missing `to`, `gas_token` and `refund_receiver`
/// become the null address.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub safe_address: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Option<Bytes>,
    pub operation: SafeOperation,
    pub safe_tx_gas: U256,
    pub data_gas: U256,
    /// Internal gas price used by the Safe to compute the refund.
    pub gas_price: U256,
    pub gas_token: Option<Address>,
    pub refund_receiver: Option<Address>,
    /// Concatenated 65 byte signatures.
    pub signatures: Bytes,
    /// Signs the outer transaction instead of the relayer account.
    pub tx_sender: Option<PrivateKeySigner>,
    /// Gas limit of the outer transaction, estimated when `None`.
    pub tx_gas: Option<u64>,
    pub block_identifier: BlockId,
}

impl RelayRequest {
    pub fn new(safe_address: Address, gas_price: U256, signatures: Bytes) -> Self {
        Self {
            safe_address,
            to: None,
            value: U256::ZERO,
            data: None,
            operation: SafeOperation::Call,
            safe_tx_gas: U256::ZERO,
            data_gas: U256::ZERO,
            gas_price,
            gas_token: None,
            refund_receiver: None,
            signatures,
            tx_sender: None,
            tx_gas: None,
            block_identifier: BlockId::pending(),
        }
    }
}

/// Validated Safe transaction, ready for submission by the chain client.
#[derive(Debug, Clone)]
pub struct SafeMultisigTx {
    pub safe_address: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub operation: SafeOperation,
    pub safe_tx_gas: U256,
    pub data_gas: U256,
    pub gas_price: U256,
    pub gas_token: Address,
    pub refund_receiver: Address,
    pub signatures: Bytes,
    pub tx_sender: Option<PrivateKeySigner>,
    pub tx_gas: Option<u64>,
    /// Gas price of the outer transaction sent to the network.
    pub tx_gas_price: u128,
    pub block_identifier: BlockId,
}

/// Hash and body of the transaction sent to the network.
#[derive(Debug, Clone)]
pub struct RelayResult {
    pub tx_hash: TxHash,
    pub tx: TransactionRequest,
}
