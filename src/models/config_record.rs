//! Network Configuration Record
//!
//! The assembled configuration for one marketplace network: endpoints,
//! deployed contract addresses and chain metadata. Records are immutable
//! values produced fresh by each resolution; every field is optional so a
//! record can carry exactly what a given network defines.

use serde::{Deserialize, Serialize};

/// The configuration record consumed by the marketplace frontend.
///
/// Serialized camelCase to match the JSON shape the frontend exchanges.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketNetworkConfig {
    /// Symbolic network name (e.g., "mainnet", "testnet", "development").
    pub network: Option<String>,
    /// The unique chain identifier (Chain ID) for the EVM network.
    pub chain_id: Option<u64>,
    /// RPC endpoint URL for the network node.
    pub node_uri: Option<String>,
    /// Ocean Provider service endpoint URL.
    pub provider_uri: Option<String>,
    /// Subgraph (indexing) endpoint URL.
    pub subgraph_uri: Option<String>,
    /// Metadata cache (Aquarius) endpoint URL.
    pub metadata_cache_uri: Option<String>,
    /// Block explorer URL.
    pub explorer_uri: Option<String>,
    /// Deployed OCEAN token contract address.
    pub ocean_token_address: Option<String>,
    /// Symbol of the OCEAN token on this network (e.g., "OCEAN", "mOCEAN").
    pub ocean_token_symbol: Option<String>,
    /// Deployed FixedRateExchange contract address.
    pub fixed_rate_exchange_address: Option<String>,
    /// Deployed Dispenser contract address.
    pub dispenser_address: Option<String>,
    /// Deployed ERC721 NFT factory contract address.
    pub nft_factory_address: Option<String>,
    /// OPF community fee collector address.
    pub opf_community_fee_collector: Option<String>,
    /// Data Farming rewards contract address.
    pub df_rewards: Option<String>,
    /// Data Farming strategy (v1) contract address.
    pub df_strategy_v1: Option<String>,
    /// Multiplier applied to estimated gas fees.
    pub gas_fee_multiplier: Option<f64>,
    /// Block at which the deployment starts being indexed.
    pub start_block: Option<u64>,
    /// Number of blocks to wait before a transaction send times out.
    pub transaction_block_timeout: Option<u64>,
    /// Number of block confirmations before a transaction is considered final.
    pub transaction_confirmation_blocks: Option<u64>,
    /// Polling timeout, in blocks, while waiting for confirmations.
    pub transaction_polling_timeout: Option<u64>,
}
