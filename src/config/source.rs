//! Configuration Sources
//!
//! Resolution never reads process state directly; it goes through an injected
//! [`ConfigSource`] so callers (and tests) control where override values come
//! from. [`ProcessEnv`] is the production source backed by environment
//! variables.

use std::env;

#[cfg(test)]
use mockall::automock;

/// Keys a [`ConfigSource`] is consulted for.
///
/// These match the variable names the marketplace frontend documents.
pub mod keys {
    pub const SUBGRAPH_URI: &str = "NEXT_PUBLIC_SUBGRAPH_URI";
    pub const METADATACACHE_URI: &str = "NEXT_PUBLIC_METADATACACHE_URI";
    pub const PROVIDER_URL: &str = "NEXT_PUBLIC_PROVIDER_URL";
    pub const RPC_URL: &str = "NEXT_PUBLIC_RPC_URL";
    pub const FIXED_RATE_EXCHANGE_ADDRESS: &str = "NEXT_PUBLIC_FIXED_RATE_EXCHANGE_ADDRESS";
    pub const DISPENSER_ADDRESS: &str = "NEXT_PUBLIC_DISPENSER_ADDRESS";
    pub const OCEAN_TOKEN_ADDRESS: &str = "NEXT_PUBLIC_OCEAN_TOKEN_ADDRESS";
    pub const NFT_FACTORY_ADDRESS: &str = "NEXT_PUBLIC_NFT_FACTORY_ADDRESS";
    pub const INFURA_PROJECT_ID: &str = "NEXT_PUBLIC_INFURA_PROJECT_ID";
}

/// A read-only key/value source of configuration overrides.
#[cfg_attr(test, automock)]
pub trait ConfigSource: Send + Sync {
    /// Returns the value for `key`, or `None` when the key is unset or empty.
    fn get(&self, key: &str) -> Option<String>;
}

/// Production [`ConfigSource`] reading the host process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}
