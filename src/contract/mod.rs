//! Bound contracts and contract methods
//!
//! A bound contract is produced by the chain client from a fetched ABI; its
//! method handles carry pre-encoded call data and know their target address.

use async_trait::async_trait;
use ethers::abi::Token;
use ethers::core::types::U256;

use crate::error::Result;
use crate::transaction::{TransactionConfig, WriteResult};

mod http;
mod loader;

pub use http::*;
pub use loader::*;

/// A contract instance bound to an address and an ABI
pub trait BoundContract: Send + Sync {
    /// The contract's address
    fn address(&self) -> &str;

    /// Create a handle for a named method with the given arguments
    fn method(&self, name: &str, args: &[Token]) -> Result<Box<dyn ContractMethod>>;
}

/// A bound contract method
#[async_trait]
pub trait ContractMethod: Send + Sync {
    /// Estimate the gas limit for calling this method
    async fn estimate_gas(&self, from: Option<&str>, value: Option<&str>) -> Result<U256>;

    /// The ABI-encoded call data for this method invocation
    fn encode_call_data(&self) -> Result<String>;

    /// The address the call targets
    fn target_address(&self) -> &str;

    /// Execute the method as a read call
    async fn read(&self, config: &TransactionConfig) -> Result<String>;

    /// Submit the method as a write transaction
    async fn write(&self, config: &TransactionConfig) -> Result<WriteResult>;
}
