//! Development Configuration Sanitizer
//!
//! Rebuilds a configuration record for local development, preferring values
//! from the injected source over the supplied base configuration. Covers the
//! endpoints plus the contract addresses deployed when running barge locally.

use super::source::{keys, ConfigSource};
use crate::models::MarketNetworkConfig;

/// Returns a record containing exactly the development-relevant fields.
///
/// Each field equals the source value for its key when present, else the
/// corresponding field of `config`. Every other field of the returned record
/// is unset.
pub fn sanitize_development_config<S: ConfigSource + ?Sized>(
    config: &MarketNetworkConfig,
    source: &S,
) -> MarketNetworkConfig {
    MarketNetworkConfig {
        subgraph_uri: source
            .get(keys::SUBGRAPH_URI)
            .or_else(|| config.subgraph_uri.clone()),
        metadata_cache_uri: source
            .get(keys::METADATACACHE_URI)
            .or_else(|| config.metadata_cache_uri.clone()),
        provider_uri: source
            .get(keys::PROVIDER_URL)
            .or_else(|| config.provider_uri.clone()),
        node_uri: source.get(keys::RPC_URL).or_else(|| config.node_uri.clone()),
        fixed_rate_exchange_address: source
            .get(keys::FIXED_RATE_EXCHANGE_ADDRESS)
            .or_else(|| config.fixed_rate_exchange_address.clone()),
        dispenser_address: source
            .get(keys::DISPENSER_ADDRESS)
            .or_else(|| config.dispenser_address.clone()),
        ocean_token_address: source
            .get(keys::OCEAN_TOKEN_ADDRESS)
            .or_else(|| config.ocean_token_address.clone()),
        nft_factory_address: source
            .get(keys::NFT_FACTORY_ADDRESS)
            .or_else(|| config.nft_factory_address.clone()),
        ..Default::default()
    }
}

/// Overlays the sanitizer's output on `config`.
///
/// Only the sanitizer's fixed field set is replaced; all other fields of
/// `config` stay as resolved.
pub fn apply_development_overrides<S: ConfigSource + ?Sized>(
    config: &MarketNetworkConfig,
    source: &S,
) -> MarketNetworkConfig {
    let sanitized = sanitize_development_config(config, source);
    MarketNetworkConfig {
        subgraph_uri: sanitized.subgraph_uri,
        metadata_cache_uri: sanitized.metadata_cache_uri,
        provider_uri: sanitized.provider_uri,
        node_uri: sanitized.node_uri,
        fixed_rate_exchange_address: sanitized.fixed_rate_exchange_address,
        dispenser_address: sanitized.dispenser_address,
        ocean_token_address: sanitized.ocean_token_address,
        nft_factory_address: sanitized.nft_factory_address,
        ..config.clone()
    }
}
