//! Contract binding over a fetched ABI
//!
//! ABIs are fetched per network at runtime, so contracts are bound through
//! the dynamic `ethers::abi` layer rather than compile-time bindings.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::abi::{Abi, Token};
use ethers::core::types::{Address, Bytes, TransactionRequest, U256};
use ethers::core::types::transaction::eip2718::TypedTransaction;
use ethers_providers::{Http, Middleware, Provider};

use crate::client::{parse_address, parse_value, to_typed_transaction};
use crate::contract::{BoundContract, ContractMethod};
use crate::error::{Error, Result};
use crate::transaction::{TransactionConfig, WriteResult};

/// A contract bound to an address and a runtime-parsed ABI
pub struct HttpContract {
    /// Contract address in its original string form
    address: String,
    /// Parsed contract address
    target: Address,
    /// Parsed ABI
    abi: Abi,
    /// Ethers provider shared with the owning client
    provider: Arc<Provider<Http>>,
}

impl HttpContract {
    /// Bind a contract from a fetched ABI artifact
    ///
    /// Accepts either a bare ABI array or an artifact wrapping it under an
    /// "abi" key.
    pub fn new(
        address: &str,
        abi: &serde_json::Value,
        provider: Arc<Provider<Http>>,
    ) -> Result<Self> {
        let raw = abi.get("abi").unwrap_or(abi);
        let abi: Abi = serde_json::from_value(raw.clone())
            .map_err(|e| Error::Upstream(format!("Invalid ABI: {}", e)))?;

        Ok(Self {
            address: address.to_string(),
            target: parse_address(address)?,
            abi,
            provider,
        })
    }
}

impl BoundContract for HttpContract {
    fn address(&self) -> &str {
        &self.address
    }

    fn method(&self, name: &str, args: &[Token]) -> Result<Box<dyn ContractMethod>> {
        let function = self
            .abi
            .function(name)
            .map_err(|e| Error::Validation(format!("Unknown contract method {}: {}", name, e)))?;

        let data = function
            .encode_input(args)
            .map_err(|e| Error::Validation(format!("Failed to encode {} arguments: {}", name, e)))?;

        Ok(Box::new(HttpContractMethod {
            address: self.address.clone(),
            target: self.target,
            data,
            provider: self.provider.clone(),
        }))
    }
}

/// A method handle with pre-encoded call data
pub struct HttpContractMethod {
    /// Target address in its original string form
    address: String,
    /// Parsed target address
    target: Address,
    /// Encoded call data
    data: Vec<u8>,
    /// Ethers provider shared with the owning client
    provider: Arc<Provider<Http>>,
}

impl HttpContractMethod {
    /// Apply this method's target and call data to a prepared config
    fn bind_call(&self, config: &TransactionConfig) -> Result<TypedTransaction> {
        let mut tx = to_typed_transaction(config)?;
        tx.set_to(self.target);
        tx.set_data(Bytes::from(self.data.clone()));
        Ok(tx)
    }
}

#[async_trait]
impl ContractMethod for HttpContractMethod {
    async fn estimate_gas(&self, from: Option<&str>, value: Option<&str>) -> Result<U256> {
        let mut tx = TransactionRequest::new()
            .to(self.target)
            .data(Bytes::from(self.data.clone()));
        if let Some(from) = from {
            tx = tx.from(parse_address(from)?);
        }
        if let Some(value) = value {
            tx = tx.value(parse_value(value)?);
        }

        let tx: TypedTransaction = tx.into();
        self.provider
            .estimate_gas(&tx, None)
            .await
            .map_err(|e| Error::Upstream(format!("Failed to estimate gas: {}", e)))
    }

    fn encode_call_data(&self) -> Result<String> {
        Ok(format!("0x{}", hex::encode(&self.data)))
    }

    fn target_address(&self) -> &str {
        &self.address
    }

    async fn read(&self, config: &TransactionConfig) -> Result<String> {
        let tx = self.bind_call(config)?;
        let result = self
            .provider
            .call(&tx, None)
            .await
            .map_err(|e| Error::Upstream(format!("Read call failed: {}", e)))?;

        Ok(format!("0x{}", hex::encode(result)))
    }

    async fn write(&self, config: &TransactionConfig) -> Result<WriteResult> {
        let tx = self.bind_call(config)?;
        let pending = self
            .provider
            .send_transaction(tx, None)
            .await
            .map_err(|e| Error::Upstream(format!("Failed to send transaction: {}", e)))?;

        Ok(WriteResult {
            transaction_hash: format!("{:?}", pending.tx_hash()),
            receipt: None,
        })
    }
}
