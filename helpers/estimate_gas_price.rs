//! Relay Gas Price Tool
//!
//! Prints the gas price a client has to sign for its Safe transaction to be relayed,
//! in wei or in units of the given gas token.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example estimate_gas_price
//! cargo run --example estimate_gas_price -- --gas-token 0x6b175474e89094c44da98b954eedeac495271d0f
//! cargo run --example estimate_gas_price -- --owners 3
//! ```
//!
//! Configuration is read from the environment (or `.env`), `RPC_URL` is required.
use alloy::primitives::Address;
use clap::Parser;
use color_eyre::Result;
use dotenvy::dotenv;
use safe_relayer::{
    bootstrap::initialize_relay_service, config::ServerConfig, domain::RelayServiceTrait,
    logging::setup_logging,
};

#[derive(Parser, Debug)]
#[command(about = "Estimate the gas price accepted by the relayer")]
struct Args {
    /// Gas token the Safe pays the refund in, ether when omitted
    #[arg(long)]
    gas_token: Option<Address>,

    /// Also estimate the creation cost of a Safe with this many owners
    #[arg(long)]
    owners: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    setup_logging()?;

    let args = Args::parse();
    let config = ServerConfig::from_env()?;
    let service = initialize_relay_service(&config).await?;

    let gas_price = service.estimate_tx_gas_price(args.gas_token).await?;
    println!("Relay gas price: {}", gas_price);

    if let Some(owners) = args.owners {
        let estimate = service
            .estimate_safe_creation(owners, args.gas_token)
            .await?;
        println!(
            "Safe creation with {} owners: gas {}, gas price {}, payment {} (token {})",
            owners, estimate.gas, estimate.gas_price, estimate.payment, estimate.payment_token
        );
    }

    Ok(())
}
