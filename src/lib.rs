//! Relayer for pre-signed Safe multisig transactions.
//!
//! The relay service checks each transaction against the relay policy (refund receiver,
//! signature count, gas price floor in ether or gas token) and submits the accepted ones
//! to an EVM network, paying the network fee from the relayer account.
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
