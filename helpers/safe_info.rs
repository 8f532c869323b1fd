//! Safe Info Tool
//!
//! Prints the on-chain state of a Safe as JSON: nonce, threshold, owners and master copy.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example safe_info -- 0x5afe000000000000000000000000000000005afe
//! ```
use alloy::primitives::Address;
use clap::Parser;
use color_eyre::Result;
use dotenvy::dotenv;
use safe_relayer::{
    bootstrap::initialize_relay_service, config::ServerConfig, domain::RelayServiceTrait,
    logging::setup_logging,
};

#[derive(Parser, Debug)]
#[command(about = "Show the on-chain state of a Safe")]
struct Args {
    /// Address of the Safe proxy
    safe_address: Address,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    setup_logging()?;

    let args = Args::parse();
    let config = ServerConfig::from_env()?;
    let service = initialize_relay_service(&config).await?;

    let info = service.retrieve_safe_info(args.safe_address).await?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
