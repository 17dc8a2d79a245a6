//! Chain client capability
//!
//! One client instance serves one side of the bridge; the transaction
//! pipeline only ever talks to this facade, never to a transport directly.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::core::types::U256;

use crate::contract::BoundContract;
use crate::error::Result;
use crate::transaction::{TransactionConfig, WriteResult};

mod http;

pub use http::*;

/// Block tag for state-dependent queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// Latest mined block
    Latest,
    /// Pending block, including queued transactions
    Pending,
}

/// Per-chain-side client facade
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Estimate the gas limit for a plain send from the given sender
    async fn estimate_gas(&self, from: Option<&str>, value: Option<&str>) -> Result<U256>;

    /// Get the current legacy gas price
    async fn gas_price(&self) -> Result<U256>;

    /// Get the sender's transaction count at the given block tag
    async fn transaction_count(&self, address: &str, tag: BlockTag) -> Result<u64>;

    /// Get the chain ID
    async fn chain_id(&self) -> Result<u64>;

    /// Execute a read call and return the raw result
    async fn read(&self, config: &TransactionConfig) -> Result<String>;

    /// Submit a write transaction
    async fn write(&self, config: &TransactionConfig) -> Result<WriteResult>;

    /// Whether this chain side supports the dynamic fee market
    fn supports_dynamic_fees(&self) -> bool;

    /// Fetch the ABI artifact for a named contract of the given bridge type
    async fn fetch_abi(&self, name: &str, bridge_type: &str) -> Result<serde_json::Value>;

    /// Bind a contract instance at the given address with a fetched ABI
    fn bind_contract(
        &self,
        address: &str,
        abi: &serde_json::Value,
    ) -> Result<Arc<dyn BoundContract>>;
}
