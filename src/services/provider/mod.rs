//! Chain client used by the relay service to read Safe state and submit transactions.
use alloy::transports::RpcError;
use thiserror::Error;

pub mod evm;
pub use evm::*;

mod safe_contract;
pub use safe_contract::*;

mod safe_creation;
pub use safe_creation::*;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
    #[error("Request timeout")]
    Timeout,
    #[error("Rate limited (HTTP 429)")]
    RateLimited,
    #[error("Bad gateway (HTTP 502)")]
    BadGateway,
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },
    #[error("JSON-RPC error (code {code}): {message}")]
    RpcErrorCode { code: i64, message: String },
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Safe transaction simulation failed: {0}")]
    SimulationFailed(String),
    #[error("Signer error: {0}")]
    SignerError(String),
    #[error("Other provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// Determines if this error is transient (can retry) or permanent (should fail).
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Timeout
            | ProviderError::RateLimited
            | ProviderError::BadGateway
            | ProviderError::TransportError(_) => true,
            ProviderError::RequestError { status_code, .. } => *status_code >= 500,
            ProviderError::InvalidArgument(_)
            | ProviderError::NetworkConfiguration(_)
            | ProviderError::RpcErrorCode { .. }
            | ProviderError::SimulationFailed(_)
            | ProviderError::SignerError(_)
            | ProviderError::Other(_) => false,
        }
    }
}

/// Categorizes a reqwest error into an appropriate `ProviderError` variant.
///
/// - Timeout errors become `ProviderError::Timeout`
/// - HTTP 429 responses become `ProviderError::RateLimited`
/// - HTTP 502 responses become `ProviderError::BadGateway`
/// - All other errors become `ProviderError::Other` with the error message
fn categorize_reqwest_error(err: &reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::Timeout;
    }

    if let Some(status) = err.status() {
        match status.as_u16() {
            429 => return ProviderError::RateLimited,
            502 => return ProviderError::BadGateway,
            _ => {
                return ProviderError::RequestError {
                    error: err.to_string(),
                    status_code: status.as_u16(),
                }
            }
        }
    }

    ProviderError::Other(err.to_string())
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        categorize_reqwest_error(&err)
    }
}

impl From<alloy::sol_types::Error> for ProviderError {
    fn from(err: alloy::sol_types::Error) -> Self {
        ProviderError::Other(format!("ABI decoding error: {err}"))
    }
}

impl<E> From<RpcError<E>> for ProviderError
where
    E: std::fmt::Display,
{
    fn from(err: RpcError<E>) -> Self {
        match err {
            RpcError::Transport(transport_err) => {
                ProviderError::TransportError(transport_err.to_string())
            }
            RpcError::ErrorResp(json_rpc_err) => ProviderError::RpcErrorCode {
                code: json_rpc_err.code,
                message: json_rpc_err.message.to_string(),
            },
            _ => ProviderError::Other(format!("Other RPC error: {err}")),
        }
    }
}
