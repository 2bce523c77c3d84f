//! Local Development Configuration

use crate::models::MarketNetworkConfig;

/// Returns the configuration used against a local barge deployment.
///
/// Contract addresses are left unset here; they come from the development
/// overrides once barge exports them.
pub fn development_config() -> MarketNetworkConfig {
    MarketNetworkConfig {
        // There is no subgraph in barge so we hardcode the Sepolia one for now
        subgraph_uri: Some("https://v4.subgraph.sepolia.oceanprotocol.com".to_string()),
        ..Default::default()
    }
}
