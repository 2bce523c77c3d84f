//! EVM Provider implementation for interacting with EVM-compatible blockchain networks.
//!
//! This module wraps an HTTP RPC provider behind a small async trait so
//! read-only queries can be exercised against mocks in tests. Each call is a
//! single round trip; failures surface to the caller unchanged.

use std::time::Duration;

use alloy::{
    primitives::Bytes,
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{client::ClientBuilder, types::TransactionRequest},
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use reqwest::ClientBuilder as ReqwestClientBuilder;

use crate::models::ProviderError;

#[cfg(test)]
use mockall::automock;

/// Trait defining the read-only EVM interactions this crate needs.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait EvmProviderTrait: Send + Sync {
    /// Gets the current block number of the chain.
    async fn get_block_number(&self) -> Result<u64, ProviderError>;

    /// Performs a health check by attempting to get the latest block number.
    async fn health_check(&self) -> Result<bool, ProviderError>;

    /// Calls a contract function.
    ///
    /// # Arguments
    /// * `tx` - The transaction request to call the contract function
    async fn call_contract(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError>;
}

/// Provider implementation for EVM-compatible blockchain networks.
#[derive(Clone, Debug)]
pub struct EvmProvider {
    provider: RootProvider<Http<Client>>,
}

impl EvmProvider {
    /// Creates a new EVM provider for the given RPC URL.
    ///
    /// # Arguments
    /// * `url` - The HTTP RPC endpoint
    /// * `timeout_seconds` - Request timeout applied to the underlying client
    pub fn new(url: &str, timeout_seconds: u64) -> Result<Self, ProviderError> {
        let rpc_url = url.parse().map_err(|e| {
            ProviderError::NetworkConfiguration(format!("Invalid URL format: {}", e))
        })?;

        let client = ReqwestClientBuilder::default()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                ProviderError::NetworkConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        let mut transport = Http::new(rpc_url);
        transport.set_client(client);

        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);
        let provider = ProviderBuilder::new().on_client(client);

        Ok(Self { provider })
    }
}

#[async_trait]
impl EvmProviderTrait for EvmProvider {
    async fn get_block_number(&self) -> Result<u64, ProviderError> {
        self.provider
            .get_block_number()
            .await
            .map_err(ProviderError::from)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        match self.get_block_number().await {
            Ok(_) => Ok(true),
            Err(e) => Err(e),
        }
    }

    async fn call_contract(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError> {
        self.provider.call(tx).await.map_err(ProviderError::from)
    }
}
