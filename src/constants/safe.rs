//! Safe contract related constants.
use alloy::primitives::Address;

/// Size in bytes of a single Safe signature (`r`, `s`, `v`).
pub const SIGNATURE_SIZE: usize = 65;

/// Sentinel used by Safes for "no gas token" and "refund to `tx.origin`".
pub const NULL_ADDRESS: Address = Address::ZERO;

/// ETH value of the native asset when a creation is paid without a token.
pub const NATIVE_TOKEN_ETH_VALUE: f64 = 1.0;

/// Ether has 18 decimals; token prices are normalized against it.
pub const ETHER_DECIMALS: u8 = 18;

// === Safe creation gas estimation ===
/// Gas used by the proxy deployment and `setup` call with no owners.
pub const SAFE_CREATION_BASE_GAS: u64 = 205_000;
/// Extra gas per owner stored by `setup` (owner linked list + event data).
pub const SAFE_CREATION_GAS_PER_OWNER: u64 = 25_000;
/// Refund transfer to the deployer when paying in ether.
pub const SAFE_CREATION_ETHER_PAYMENT_GAS: u64 = 23_000;
/// Refund transfer to the deployer when paying with an ERC20 token.
pub const SAFE_CREATION_TOKEN_PAYMENT_GAS: u64 = 55_000;
