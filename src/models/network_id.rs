//! Network Selector
//!
//! Networks are requested either by numeric chain id or by symbolic name.
//! The selector performs no validation of its own: unrecognized values are
//! passed through to whichever configuration provider handles resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a marketplace network, by chain id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkId {
    /// Numeric EVM chain id (e.g., 1, 137, 8996).
    Chain(u64),
    /// Symbolic network name (e.g., "mainnet", "polygon", "nexis").
    Name(String),
}

impl From<u64> for NetworkId {
    fn from(chain_id: u64) -> Self {
        NetworkId::Chain(chain_id)
    }
}

impl From<&str> for NetworkId {
    fn from(name: &str) -> Self {
        NetworkId::Name(name.to_string())
    }
}

impl From<String> for NetworkId {
    fn from(name: String) -> Self {
        NetworkId::Name(name)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Chain(chain_id) => write!(f, "{}", chain_id),
            NetworkId::Name(name) => write!(f, "{}", name),
        }
    }
}
