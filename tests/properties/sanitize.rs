//! Property-based tests for the development-configuration sanitizer.
//!
//! These verify the sanitizer's stated invariant over arbitrary inputs: the
//! output carries exactly the fixed field set, and each field equals the
//! source's value when present, else the corresponding input field.
//!
//!   Refer to `src/config/sanitize.rs` for more details.

use ocean_market_config::config::{keys, sanitize_development_config, ConfigSource};
use ocean_market_config::models::MarketNetworkConfig;
use proptest::{option, prelude::*, test_runner::Config};
use std::collections::HashMap;

struct MapSource(HashMap<String, String>);

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

fn opt_value() -> impl Strategy<Value = Option<String>> {
    option::of("[a-z0-9:/._-]{1,24}")
}

prop_compose! {
    fn arb_config()(
        subgraph_uri in opt_value(),
        metadata_cache_uri in opt_value(),
        provider_uri in opt_value(),
        node_uri in opt_value(),
        fixed_rate_exchange_address in opt_value(),
        dispenser_address in opt_value(),
        ocean_token_address in opt_value(),
        nft_factory_address in opt_value(),
        network in opt_value(),
        chain_id in option::of(any::<u64>()),
        gas_fee_multiplier in option::of(0.5f64..3.0),
    ) -> MarketNetworkConfig {
        MarketNetworkConfig {
            subgraph_uri,
            metadata_cache_uri,
            provider_uri,
            node_uri,
            fixed_rate_exchange_address,
            dispenser_address,
            ocean_token_address,
            nft_factory_address,
            network,
            chain_id,
            gas_fee_multiplier,
            ..Default::default()
        }
    }
}

/// (key, field accessor) pairs covering the sanitizer's fixed field set.
fn sanitized_fields() -> Vec<(
    &'static str,
    fn(&MarketNetworkConfig) -> Option<String>,
)> {
    vec![
        (keys::SUBGRAPH_URI, |c| c.subgraph_uri.clone()),
        (keys::METADATACACHE_URI, |c| c.metadata_cache_uri.clone()),
        (keys::PROVIDER_URL, |c| c.provider_uri.clone()),
        (keys::RPC_URL, |c| c.node_uri.clone()),
        (keys::FIXED_RATE_EXCHANGE_ADDRESS, |c| {
            c.fixed_rate_exchange_address.clone()
        }),
        (keys::DISPENSER_ADDRESS, |c| c.dispenser_address.clone()),
        (keys::OCEAN_TOKEN_ADDRESS, |c| c.ocean_token_address.clone()),
        (keys::NFT_FACTORY_ADDRESS, |c| c.nft_factory_address.clone()),
    ]
}

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  /// Each sanitized field is the source value when set, else the input field.
  #[test]
  fn prop_source_wins_else_input(
    config in arb_config(),
    values in proptest::collection::vec(opt_value(), 8),
  ) {
      let mut map = HashMap::new();
      for ((key, _), value) in sanitized_fields().iter().zip(values.iter()) {
          if let Some(value) = value {
              map.insert(key.to_string(), value.clone());
          }
      }
      let source = MapSource(map);

      let sanitized = sanitize_development_config(&config, &source);
      for ((key, field), value) in sanitized_fields().iter().zip(values.iter()) {
          let expected = value.clone().or_else(|| field(&config));
          prop_assert_eq!(field(&sanitized), expected, "field for {}", key);
      }
  }

  /// Fields outside the fixed set never leak into the sanitized record.
  #[test]
  fn prop_output_is_exactly_the_fixed_field_set(config in arb_config()) {
      let source = MapSource(HashMap::new());
      let sanitized = sanitize_development_config(&config, &source);

      prop_assert!(sanitized.network.is_none());
      prop_assert!(sanitized.chain_id.is_none());
      prop_assert!(sanitized.explorer_uri.is_none());
      prop_assert!(sanitized.gas_fee_multiplier.is_none());
      prop_assert!(sanitized.start_block.is_none());
      prop_assert!(sanitized.transaction_block_timeout.is_none());
      prop_assert!(sanitized.opf_community_fee_collector.is_none());
  }
}
