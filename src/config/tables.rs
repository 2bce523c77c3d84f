//! Network Data Tables
//!
//! Static tables driving resolution: fully inlined preset records served
//! without consulting any provider or source, the set of networks that must
//! not receive the API-project credential, and the local-sandbox sentinel.

use crate::models::{MarketNetworkConfig, NetworkId};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Chain id of the local development sandbox (barge).
pub const DEVELOPMENT_CHAIN_ID: u64 = 8996;

/// Chain id of the Nexis testnet, served from a preset record.
pub const NEXIS_CHAIN_ID: u64 = 2370;

/// The Nexis testnet configuration, inlined in full.
fn nexis_preset() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("testnet".to_string()),
        chain_id: Some(NEXIS_CHAIN_ID),
        node_uri: Some("https://mainnet.infura.io/v3".to_string()),
        provider_uri: Some("https://v4.provider.oceanprotocol.com".to_string()),
        subgraph_uri: Some("https://v4.subgraph.mainnet.oceanprotocol.com".to_string()),
        metadata_cache_uri: Some("https://v4.aquarius.oceanprotocol.com".to_string()),
        explorer_uri: Some("https://evm-testnet.nexscan.io".to_string()),
        ocean_token_address: Some("0x8F1C77D54f58456f34E04Ddc8F7981539c277A5b".to_string()),
        ocean_token_symbol: Some("OCEAN".to_string()),
        fixed_rate_exchange_address: Some("0x9F86AC4Bc0Ad104f741ecbe95E4A7E3c87357819".to_string()),
        dispenser_address: Some("0x5DFc34101a9E5EC5e1327A4B1bf79fEe318Bf558".to_string()),
        nft_factory_address: Some("0x65e5B7aA9C03821CAca7F5EB30bFD9a8B26C39AB".to_string()),
        opf_community_fee_collector: Some("0xc2636c767E555EB97C01D491E0a79446F2262cF8".to_string()),
        df_rewards: Some("0xFe27534EA0c016634b2DaA97Ae3eF43fEe71EEB0".to_string()),
        df_strategy_v1: Some("0x545138e8D76C304C916B1261B3f6c446fe4f63e3".to_string()),
        gas_fee_multiplier: Some(1.04),
        start_block: Some(9445599),
        transaction_block_timeout: Some(150),
        transaction_confirmation_blocks: Some(5),
        transaction_polling_timeout: Some(1750),
    }
}

/// Preset records keyed by every selector that resolves to them.
static PRESETS: Lazy<HashMap<NetworkId, MarketNetworkConfig>> = Lazy::new(|| {
    let mut presets = HashMap::new();
    presets.insert(NetworkId::Chain(NEXIS_CHAIN_ID), nexis_preset());
    presets.insert(NetworkId::from("nexis"), nexis_preset());
    presets
});

/// Networks that must be resolved without the API-project credential.
static NO_CREDENTIAL_NETWORKS: Lazy<HashSet<NetworkId>> = Lazy::new(|| {
    HashSet::from([
        NetworkId::from("polygon"),
        NetworkId::from("moonbeamalpha"),
        NetworkId::Chain(1287),
        NetworkId::from("bsc"),
        NetworkId::Chain(56),
        NetworkId::from("gaiaxtestnet"),
        NetworkId::Chain(2021000),
        NetworkId::Chain(DEVELOPMENT_CHAIN_ID),
    ])
});

/// Looks up the preset record for `network`, if it has one.
pub fn preset_for(network: &NetworkId) -> Option<MarketNetworkConfig> {
    PRESETS.get(network).cloned()
}

/// Returns true when `network` must not receive the API-project credential.
pub fn omits_credential(network: &NetworkId) -> bool {
    NO_CREDENTIAL_NETWORKS.contains(network)
}

/// Returns true when `network` selects the local development sandbox.
pub fn is_development(network: &NetworkId) -> bool {
    *network == NetworkId::Chain(DEVELOPMENT_CHAIN_ID)
}
