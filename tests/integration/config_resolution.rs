//! End-to-end configuration resolution through the public API.
//!
//! Exercises the resolver against the shipped `NetworkRegistry` with a
//! map-backed configuration source, so no process-environment state is
//! touched. Refer to `src/config/resolver.rs` for more details.

use ocean_market_config::config::{
    development_config, keys, ConfigResolver, ConfigSource, NetworkRegistry,
};
use ocean_market_config::models::{ConfigError, NetworkId};
use std::collections::HashMap;

/// Configuration source backed by an in-memory map.
struct MapSource(HashMap<&'static str, String>);

impl MapSource {
    fn empty() -> Self {
        MapSource(HashMap::new())
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

fn resolver_with(source: MapSource) -> ConfigResolver<NetworkRegistry, MapSource> {
    ConfigResolver::new(NetworkRegistry::new(), source)
}

#[test]
fn nexis_preset_is_served_field_for_field() {
    let resolver = resolver_with(MapSource::empty());

    let by_id = resolver.resolve(&NetworkId::Chain(2370)).unwrap();
    let by_name = resolver.resolve(&NetworkId::from("nexis")).unwrap();

    assert_eq!(by_id, by_name);
    assert_eq!(by_id.chain_id, Some(2370));
    assert_eq!(by_id.network.as_deref(), Some("testnet"));
    assert_eq!(
        by_id.explorer_uri.as_deref(),
        Some("https://evm-testnet.nexscan.io")
    );
    assert_eq!(
        by_id.dispenser_address.as_deref(),
        Some("0x5DFc34101a9E5EC5e1327A4B1bf79fEe318Bf558")
    );
    assert_eq!(by_id.transaction_confirmation_blocks, Some(5));
}

#[test]
fn registry_network_resolves_with_credential() {
    let source = MapSource(HashMap::from([(
        keys::INFURA_PROJECT_ID,
        "my-project".to_string(),
    )]));
    let resolver = resolver_with(source);

    let config = resolver.resolve(&NetworkId::from("mainnet")).unwrap();
    assert_eq!(config.chain_id, Some(1));
    assert_eq!(
        config.node_uri.as_deref(),
        Some("https://mainnet.infura.io/v3/my-project")
    );
}

#[test]
fn allow_listed_network_never_sees_the_credential() {
    let source = MapSource(HashMap::from([(
        keys::INFURA_PROJECT_ID,
        "my-project".to_string(),
    )]));
    let resolver = resolver_with(source);

    // polygon is allow-listed, so its Infura gateway URI stays bare
    let config = resolver.resolve(&NetworkId::from("polygon")).unwrap();
    assert_eq!(
        config.node_uri.as_deref(),
        Some("https://polygon-mainnet.infura.io/v3")
    );
}

#[test]
fn development_network_overlays_source_values() {
    let source = MapSource(HashMap::from([
        (keys::SUBGRAPH_URI, "http://localhost:9000".to_string()),
        (
            keys::OCEAN_TOKEN_ADDRESS,
            "0x2473f4F7bf40ed9310838edFCA6262C17A59DF64".to_string(),
        ),
    ]));
    let resolver = resolver_with(source);

    let config = resolver.resolve(&NetworkId::Chain(8996)).unwrap();

    // source-supplied values win
    assert_eq!(config.subgraph_uri.as_deref(), Some("http://localhost:9000"));
    assert_eq!(
        config.ocean_token_address.as_deref(),
        Some("0x2473f4F7bf40ed9310838edFCA6262C17A59DF64")
    );
    // registry values survive where the source is silent
    assert_eq!(config.node_uri.as_deref(), Some("http://127.0.0.1:8545"));
    assert_eq!(config.network.as_deref(), Some("development"));
}

#[test]
fn empty_source_values_count_as_unset() {
    let source = MapSource(HashMap::from([(keys::SUBGRAPH_URI, String::new())]));
    let resolver = resolver_with(source);

    let config = resolver.resolve(&NetworkId::Chain(8996)).unwrap();
    assert_eq!(
        config.subgraph_uri.as_deref(),
        Some("http://172.15.0.15:8000")
    );
}

#[test]
fn unknown_network_error_passes_through() {
    let resolver = resolver_with(MapSource::empty());

    let result = resolver.resolve(&NetworkId::from("gnosis"));
    assert!(matches!(result, Err(ConfigError::UnknownNetwork(ref name)) if name == "gnosis"));
}

#[test]
fn development_config_sets_only_the_subgraph_uri() {
    let config = development_config();
    assert_eq!(
        config.subgraph_uri.as_deref(),
        Some("https://v4.subgraph.sepolia.oceanprotocol.com")
    );
    assert!(config.chain_id.is_none());
    assert!(config.node_uri.is_none());
    assert!(config.ocean_token_address.is_none());
}
