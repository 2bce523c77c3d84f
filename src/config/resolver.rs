//! Network Configuration Resolution
//!
//! Assembles the configuration record for a requested network: preset
//! networks are served from the data tables, everything else is delegated to
//! a [`ConfigProvider`], with the development sandbox additionally overlaid
//! by source-supplied values.

use super::sanitize::apply_development_overrides;
use super::source::{keys, ConfigSource};
use super::tables;
use crate::models::{ConfigError, MarketNetworkConfig, NetworkId};
use log::debug;

#[cfg(test)]
use mockall::automock;

/// Supplies configuration records for networks not covered by the presets.
///
/// Implementations may fail however they see fit; resolution propagates
/// their errors unchanged.
#[cfg_attr(test, automock)]
pub trait ConfigProvider: Send + Sync {
    /// Returns the configuration for `network`, optionally scoped to an
    /// API-project credential.
    fn get_config(
        &self,
        network: &NetworkId,
        credential: Option<String>,
    ) -> Result<MarketNetworkConfig, ConfigError>;
}

/// Resolves network configuration through an injected provider and source.
pub struct ConfigResolver<P, S> {
    provider: P,
    source: S,
}

impl<P: ConfigProvider, S: ConfigSource> ConfigResolver<P, S> {
    pub fn new(provider: P, source: S) -> Self {
        Self { provider, source }
    }

    /// Resolves the configuration record for `network`.
    ///
    /// Preset networks short-circuit without touching the provider or the
    /// source. The development sandbox gets source-supplied overrides layered
    /// on top of the provider's result.
    pub fn resolve(&self, network: &NetworkId) -> Result<MarketNetworkConfig, ConfigError> {
        if let Some(preset) = tables::preset_for(network) {
            debug!("Serving preset configuration for network {}", network);
            return Ok(preset);
        }

        let credential = if tables::omits_credential(network) {
            None
        } else {
            self.source.get(keys::INFURA_PROJECT_ID)
        };

        debug!(
            "Resolving configuration for network {} (credential: {})",
            network,
            credential.is_some()
        );
        let config = self.provider.get_config(network, credential)?;

        if tables::is_development(network) {
            return Ok(apply_development_overrides(&config, &self.source));
        }
        Ok(config)
    }
}
