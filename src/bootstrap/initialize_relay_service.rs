use crate::{
    config::{ServerConfig, TokenListConfig},
    domain::{RelayService, RelayServiceConfig},
    repositories::InMemoryTokenRegistry,
    services::{EvmGasStation, EvmSafeProvider, GasStationConfig},
};
use alloy::signers::local::PrivateKeySigner;
use color_eyre::{eyre::WrapErr, Result};
use log::{info, warn};
use std::{sync::Arc, time::Duration};

pub type DefaultRelayService =
    RelayService<EvmSafeProvider, EvmGasStation<EvmSafeProvider>, InMemoryTokenRegistry>;

/// Parses a hex encoded private key, with or without `0x` prefix.
pub fn parse_relayer_signer(private_key: &str) -> Result<PrivateKeySigner> {
    let key = private_key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(key).wrap_err("Relayer private key is not valid hex")?;
    PrivateKeySigner::from_slice(&bytes).wrap_err("Relayer private key is not a valid key")
}

/// Loads the token list and builds the relay service with its EVM collaborators.
///
/// # Errors
///
/// Returns error if:
/// - The relayer private key cannot be parsed
/// - The RPC URL is invalid
/// - The gas price multipliers are invalid
/// - The token list cannot be read or fails validation
pub async fn initialize_relay_service(config: &ServerConfig) -> Result<DefaultRelayService> {
    let relayer_signer = config
        .relayer_private_key
        .as_deref()
        .map(parse_relayer_signer)
        .transpose()?;
    if relayer_signer.is_none() {
        warn!("RELAYER_PRIVATE_KEY not set, only transactions with a sender key can be relayed");
    }

    let chain_client = Arc::new(EvmSafeProvider::new(
        &config.rpc_url,
        config.rpc_timeout_seconds,
        relayer_signer,
    )?);

    let gas_station = Arc::new(EvmGasStation::new(
        chain_client.clone(),
        GasStationConfig {
            standard_multiplier: config.gas_price_standard_multiplier,
            fast_multiplier: config.gas_price_fast_multiplier,
            cache_ttl: Duration::from_secs(config.gas_price_cache_ttl_seconds),
        },
    )?);

    let token_list = TokenListConfig::load_from_file(&config.tokens_file_path)
        .wrap_err_with(|| format!("Failed to load token list {}", config.tokens_file_path))?;
    let token_registry = Arc::new(InMemoryTokenRegistry::from_tokens(token_list.tokens)?);
    info!(
        "Loaded {} tokens from {}",
        token_registry.count().await,
        config.tokens_file_path
    );

    Ok(RelayService::new(
        chain_client,
        gas_station,
        token_registry,
        RelayServiceConfig {
            fixed_creation_cost: config.fixed_creation_cost,
        },
    ))
}
