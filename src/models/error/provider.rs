use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    #[error("RPC client error: {0}")]
    RpcError(String),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for ProviderError {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        ProviderError::RpcError(err.to_string())
    }
}
