//! Built-in Network Registry
//!
//! A [`ConfigProvider`](super::ConfigProvider) backed by a static table of
//! known Ocean deployments, addressable by chain id or symbolic name. Infura
//! gateway URIs get the API-project credential appended as a path segment
//! when one is supplied.

use super::resolver::ConfigProvider;
use crate::models::{ConfigError, MarketNetworkConfig, NetworkId};
use once_cell::sync::Lazy;

struct RegistryEntry {
    chain_id: u64,
    name: &'static str,
    config: fn() -> MarketNetworkConfig,
}

/// Defaults shared by every registry network.
fn base_config() -> MarketNetworkConfig {
    MarketNetworkConfig {
        provider_uri: Some("https://v4.provider.oceanprotocol.com".to_string()),
        metadata_cache_uri: Some("https://v4.aquarius.oceanprotocol.com".to_string()),
        gas_fee_multiplier: Some(1.0),
        transaction_block_timeout: Some(50),
        transaction_confirmation_blocks: Some(1),
        transaction_polling_timeout: Some(750),
        ..Default::default()
    }
}

fn mainnet() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("mainnet".to_string()),
        chain_id: Some(1),
        node_uri: Some("https://mainnet.infura.io/v3".to_string()),
        subgraph_uri: Some("https://v4.subgraph.mainnet.oceanprotocol.com".to_string()),
        explorer_uri: Some("https://etherscan.io".to_string()),
        ocean_token_address: Some("0x967da4048cD07aB37855c090aAF366e4ce1b9F48".to_string()),
        ocean_token_symbol: Some("OCEAN".to_string()),
        nft_factory_address: Some("0x27eC73E24fC295A97cC6C7c1CB4A8d52a089Ab36".to_string()),
        opf_community_fee_collector: Some("0xad8D6501Be35Bdf94e97a18a8A98e9906bc35737".to_string()),
        start_block: Some(13304410),
        ..base_config()
    }
}

fn sepolia() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("sepolia".to_string()),
        chain_id: Some(11155111),
        node_uri: Some("https://sepolia.infura.io/v3".to_string()),
        subgraph_uri: Some("https://v4.subgraph.sepolia.oceanprotocol.com".to_string()),
        explorer_uri: Some("https://sepolia.etherscan.io".to_string()),
        ocean_token_address: Some("0x1B083D8584dd3e6Ff37d04a6e7e82b5F622f3985".to_string()),
        ocean_token_symbol: Some("OCEAN".to_string()),
        nft_factory_address: Some("0xe8c6Dc39602031A152440311e364818ba25C2Bc1".to_string()),
        ..base_config()
    }
}

fn polygon() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("polygon".to_string()),
        chain_id: Some(137),
        node_uri: Some("https://polygon-mainnet.infura.io/v3".to_string()),
        subgraph_uri: Some("https://v4.subgraph.polygon.oceanprotocol.com".to_string()),
        explorer_uri: Some("https://polygonscan.com".to_string()),
        ocean_token_address: Some("0x282d8efCe846A88B159800bd4130ad77443Fa1A1".to_string()),
        ocean_token_symbol: Some("mOCEAN".to_string()),
        nft_factory_address: Some("0x3d0f9b57E4c387F0d5e3600f5c0bb50a1de0B162".to_string()),
        start_block: Some(20049925),
        ..base_config()
    }
}

fn bsc() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("bsc".to_string()),
        chain_id: Some(56),
        node_uri: Some("https://bsc-dataseed.binance.org".to_string()),
        subgraph_uri: Some("https://v4.subgraph.bsc.oceanprotocol.com".to_string()),
        explorer_uri: Some("https://bscscan.com".to_string()),
        ocean_token_address: Some("0xDCe07662CA8EbC241316a15B611c89711414Dd1a".to_string()),
        ocean_token_symbol: Some("OCEAN".to_string()),
        nft_factory_address: Some("0xCE9F2d047fbBD4ccB5d3B6C90E95bBaf68B6D637".to_string()),
        start_block: Some(11270768),
        ..base_config()
    }
}

fn development() -> MarketNetworkConfig {
    MarketNetworkConfig {
        network: Some("development".to_string()),
        chain_id: Some(8996),
        node_uri: Some("http://127.0.0.1:8545".to_string()),
        provider_uri: Some("http://172.15.0.4:8030".to_string()),
        subgraph_uri: Some("http://172.15.0.15:8000".to_string()),
        metadata_cache_uri: Some("http://127.0.0.1:5000".to_string()),
        ocean_token_symbol: Some("OCEAN".to_string()),
        ..base_config()
    }
}

static NETWORKS: Lazy<Vec<RegistryEntry>> = Lazy::new(|| {
    vec![
        RegistryEntry {
            chain_id: 1,
            name: "mainnet",
            config: mainnet,
        },
        RegistryEntry {
            chain_id: 11155111,
            name: "sepolia",
            config: sepolia,
        },
        RegistryEntry {
            chain_id: 137,
            name: "polygon",
            config: polygon,
        },
        RegistryEntry {
            chain_id: 56,
            name: "bsc",
            config: bsc,
        },
        RegistryEntry {
            chain_id: 8996,
            name: "development",
            config: development,
        },
    ]
});

/// Registry of built-in Ocean network deployments.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry;

impl NetworkRegistry {
    pub fn new() -> Self {
        Self
    }

    fn lookup(&self, network: &NetworkId) -> Option<&'static RegistryEntry> {
        NETWORKS.iter().find(|entry| match network {
            NetworkId::Chain(chain_id) => entry.chain_id == *chain_id,
            NetworkId::Name(name) => entry.name == name,
        })
    }
}

impl ConfigProvider for NetworkRegistry {
    fn get_config(
        &self,
        network: &NetworkId,
        credential: Option<String>,
    ) -> Result<MarketNetworkConfig, ConfigError> {
        let entry = self
            .lookup(network)
            .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))?;

        let mut config = (entry.config)();
        if let Some(credential) = credential {
            // Infura-style gateways take the project id as a path segment
            config.node_uri = config.node_uri.map(|node_uri| {
                if node_uri.contains("infura.io") {
                    format!("{}/{}", node_uri, credential)
                } else {
                    node_uri
                }
            });
        }
        Ok(config)
    }
}
