//! Read-only Datatoken Queries
//!
//! One-shot accessors against deployed datatoken (ERC20 template) contracts.
//! Calls go through the [`EvmProviderTrait`] seam; any provider failure
//! propagates to the caller unchanged.

use alloy::{
    primitives::{keccak256, Address, TxKind},
    rpc::types::{TransactionInput, TransactionRequest},
};
use log::debug;

use super::provider::EvmProviderTrait;
use crate::models::ProviderError;

/// Solidity signature of the payment-collector accessor.
const GET_PAYMENT_COLLECTOR: &str = "getPaymentCollector()";

/// Returns the current payment collector of a datatoken contract.
///
/// # Arguments
/// * `dt_address` - The datatoken contract address
/// * `provider` - The EVM provider to issue the call through
///
/// # Returns
/// The collector address as an EIP-55 checksummed string.
pub async fn get_payment_collector<P: EvmProviderTrait>(
    dt_address: &str,
    provider: &P,
) -> Result<String, ProviderError> {
    let address = dt_address
        .parse::<Address>()
        .map_err(|e| ProviderError::InvalidAddress(e.to_string()))?;

    let selector = &keccak256(GET_PAYMENT_COLLECTOR.as_bytes())[..4];
    let tx = TransactionRequest {
        to: Some(TxKind::Call(address)),
        input: TransactionInput::from(selector.to_vec()),
        ..Default::default()
    };

    debug!("Querying payment collector of datatoken {}", address);
    let data = provider.call_contract(&tx).await?;

    // a single ABI-encoded address word
    if data.len() < 32 {
        return Err(ProviderError::UnexpectedResponse(format!(
            "return data too short for an address: {} bytes",
            data.len()
        )));
    }
    let collector = Address::from_slice(&data[12..32]);
    Ok(collector.to_checksum(None))
}
