//! Transaction configuration builder

use ethers::core::types::U256;

use crate::client::{BlockTag, ChainClient};
use crate::contract::ContractMethod;
use crate::error::{Error, Result};
use crate::transaction::{
    u256_to_u64, ChainSide, FeeModel, TransactionConfig, TransactionOption,
};

/// Merges defaults, overrides, and resolved network values into one config
///
/// Field resolution is a three-tier table: the caller value wins, else the
/// chain-side default, else (write mode only) the value resolved from the
/// chain client. The fee representation is picked last, from the fee-market
/// support of the target side.
pub struct TransactionConfigBuilder<'a> {
    client: &'a dyn ChainClient,
}

impl<'a> TransactionConfigBuilder<'a> {
    /// Create a builder over the chain client of the target side
    pub fn new(client: &'a dyn ChainClient) -> Self {
        Self { client }
    }

    /// Build a transaction config
    ///
    /// Read-mode builds stop after the merge. Write-mode builds launch the
    /// four field resolutions together and wait for all of them; the first
    /// failure aborts the whole build.
    pub async fn build(
        &self,
        option: TransactionOption,
        method: Option<&dyn ContractMethod>,
        side: ChainSide,
        defaults: &TransactionOption,
        is_write: bool,
    ) -> Result<TransactionConfig> {
        let merged = option.merge_over(defaults);

        if !is_write {
            return Ok(merged.into_config());
        }

        let dynamic_supported = self.client.supports_dynamic_fees();
        if side == ChainSide::Child && !dynamic_supported && merged.has_dynamic_fee_fields() {
            return Err(Error::ProtocolMismatch(
                "maxFeePerGas and maxPriorityFeePerGas are not supported on the child chain"
                    .to_string(),
            ));
        }

        let from = merged.from.clone().ok_or_else(|| {
            Error::Validation("A sender address is required for write transactions".to_string())
        })?;

        let (gas_limit, gas_price, nonce, chain_id) = tokio::try_join!(
            self.resolve_gas_limit(&merged, method),
            self.resolve_gas_price(&merged),
            self.resolve_nonce(&merged, &from),
            self.resolve_chain_id(&merged),
        )?;

        // Exactly one fee representation survives. A side without fee-market
        // support drops any dynamic fields; a supported side without the full
        // pair falls back to the resolved legacy price.
        let fee = if dynamic_supported {
            match (merged.max_fee_per_gas, merged.max_priority_fee_per_gas) {
                (Some(max_fee_per_gas), Some(max_priority_fee_per_gas)) => FeeModel::Dynamic {
                    max_fee_per_gas,
                    max_priority_fee_per_gas,
                },
                _ => FeeModel::Legacy { gas_price },
            }
        } else {
            FeeModel::Legacy { gas_price }
        };

        Ok(TransactionConfig {
            from: Some(from),
            to: merged.to,
            value: merged.value,
            data: None,
            gas_limit: Some(gas_limit),
            fee: Some(fee),
            nonce: Some(nonce),
            chain_id: Some(chain_id),
        })
    }

    async fn resolve_gas_limit(
        &self,
        merged: &TransactionOption,
        method: Option<&dyn ContractMethod>,
    ) -> Result<u64> {
        if let Some(gas_limit) = merged.gas_limit {
            return Ok(gas_limit);
        }

        let estimate = match method {
            Some(method) => {
                method
                    .estimate_gas(merged.from.as_deref(), merged.value.as_deref())
                    .await?
            }
            None => {
                self.client
                    .estimate_gas(merged.from.as_deref(), merged.value.as_deref())
                    .await?
            }
        };

        u256_to_u64(estimate, "gas estimate")
    }

    async fn resolve_gas_price(&self, merged: &TransactionOption) -> Result<U256> {
        if let Some(gas_price) = merged.gas_price {
            return Ok(gas_price);
        }
        self.client.gas_price().await
    }

    async fn resolve_nonce(&self, merged: &TransactionOption, from: &str) -> Result<u64> {
        if let Some(nonce) = merged.nonce {
            return Ok(nonce);
        }
        self.client.transaction_count(from, BlockTag::Pending).await
    }

    async fn resolve_chain_id(&self, merged: &TransactionOption) -> Result<u64> {
        if let Some(chain_id) = merged.chain_id {
            return Ok(chain_id);
        }
        self.client.chain_id().await
    }
}
