//! Shared call-counting stubs for integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ethers::abi::Token;
use ethers::core::types::U256;
use serde_json::{json, Value};

use pos_bridge::client::{BlockTag, ChainClient};
use pos_bridge::config::{BridgeConfig, SideConfig};
use pos_bridge::contract::{BoundContract, ContractMethod};
use pos_bridge::transaction::{TransactionConfig, TransactionOption, WriteResult};
use pos_bridge::{Error, Result};

/// Per-capability call counters for the stub chain client
#[derive(Default)]
pub struct ClientCalls {
    pub estimate_gas: AtomicUsize,
    pub gas_price: AtomicUsize,
    pub transaction_count: AtomicUsize,
    pub chain_id: AtomicUsize,
    pub read: AtomicUsize,
    pub write: AtomicUsize,
    pub fetch_abi: AtomicUsize,
}

impl ClientCalls {
    /// Calls issued by the four concurrent field resolutions
    pub fn resolution_total(&self) -> usize {
        self.estimate_gas.load(Ordering::SeqCst)
            + self.gas_price.load(Ordering::SeqCst)
            + self.transaction_count.load(Ordering::SeqCst)
            + self.chain_id.load(Ordering::SeqCst)
    }

    /// Every call issued to the client
    pub fn total(&self) -> usize {
        self.resolution_total()
            + self.read.load(Ordering::SeqCst)
            + self.write.load(Ordering::SeqCst)
            + self.fetch_abi.load(Ordering::SeqCst)
    }
}

/// Chain client stub with canned network values
pub struct StubClient {
    pub calls: Arc<ClientCalls>,
    pub dynamic_fees: bool,
    pub gas_estimate: u64,
    pub gas_price: u64,
    pub nonce: u64,
    pub chain_id: u64,
    pub fail_gas_price: bool,
}

impl StubClient {
    pub fn new(dynamic_fees: bool) -> Self {
        Self {
            calls: Arc::new(ClientCalls::default()),
            dynamic_fees,
            gas_estimate: 21_000,
            gas_price: 10,
            nonce: 5,
            chain_id: 137,
            fail_gas_price: false,
        }
    }
}

#[async_trait]
impl ChainClient for StubClient {
    async fn estimate_gas(&self, _from: Option<&str>, _value: Option<&str>) -> Result<U256> {
        self.calls.estimate_gas.fetch_add(1, Ordering::SeqCst);
        Ok(U256::from(self.gas_estimate))
    }

    async fn gas_price(&self) -> Result<U256> {
        self.calls.gas_price.fetch_add(1, Ordering::SeqCst);
        if self.fail_gas_price {
            return Err(Error::Upstream("gas price unavailable".to_string()));
        }
        Ok(U256::from(self.gas_price))
    }

    async fn transaction_count(&self, _address: &str, _tag: BlockTag) -> Result<u64> {
        self.calls.transaction_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.nonce)
    }

    async fn chain_id(&self) -> Result<u64> {
        self.calls.chain_id.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain_id)
    }

    async fn read(&self, _config: &TransactionConfig) -> Result<String> {
        self.calls.read.fetch_add(1, Ordering::SeqCst);
        Ok("0x01".to_string())
    }

    async fn write(&self, _config: &TransactionConfig) -> Result<WriteResult> {
        self.calls.write.fetch_add(1, Ordering::SeqCst);
        Ok(WriteResult {
            transaction_hash: "0xclientwrite".to_string(),
            receipt: None,
        })
    }

    fn supports_dynamic_fees(&self) -> bool {
        self.dynamic_fees
    }

    async fn fetch_abi(&self, _name: &str, _bridge_type: &str) -> Result<Value> {
        self.calls.fetch_abi.fetch_add(1, Ordering::SeqCst);
        Ok(json!([]))
    }

    fn bind_contract(&self, address: &str, _abi: &Value) -> Result<Arc<dyn BoundContract>> {
        Ok(Arc::new(StubContract {
            address: address.to_string(),
        }))
    }
}

/// Bound-contract stub; methods carry canned call data
pub struct StubContract {
    pub address: String,
}

impl BoundContract for StubContract {
    fn address(&self) -> &str {
        &self.address
    }

    fn method(&self, _name: &str, _args: &[Token]) -> Result<Box<dyn ContractMethod>> {
        Ok(Box::new(StubMethod::new()))
    }
}

/// Per-capability call counters for the stub contract method
#[derive(Default)]
pub struct MethodCalls {
    pub estimate_gas: AtomicUsize,
    pub read: AtomicUsize,
    pub write: AtomicUsize,
}

/// Contract-method stub with canned call data and target
pub struct StubMethod {
    pub calls: Arc<MethodCalls>,
    pub data: String,
    pub target: String,
    pub gas_estimate: u64,
}

impl StubMethod {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(MethodCalls::default()),
            data: "0xdeadbeef".to_string(),
            target: "0xC0FFEE".to_string(),
            gas_estimate: 60_000,
        }
    }
}

#[async_trait]
impl ContractMethod for StubMethod {
    async fn estimate_gas(&self, _from: Option<&str>, _value: Option<&str>) -> Result<U256> {
        self.calls.estimate_gas.fetch_add(1, Ordering::SeqCst);
        Ok(U256::from(self.gas_estimate))
    }

    fn encode_call_data(&self) -> Result<String> {
        Ok(self.data.clone())
    }

    fn target_address(&self) -> &str {
        &self.target
    }

    async fn read(&self, _config: &TransactionConfig) -> Result<String> {
        self.calls.read.fetch_add(1, Ordering::SeqCst);
        Ok("0x01".to_string())
    }

    async fn write(&self, _config: &TransactionConfig) -> Result<WriteResult> {
        self.calls.write.fetch_add(1, Ordering::SeqCst);
        Ok(WriteResult {
            transaction_hash: "0xmethodwrite".to_string(),
            receipt: None,
        })
    }
}

/// Bridge configuration used by token-scoped tests
pub fn sample_config() -> BridgeConfig {
    BridgeConfig {
        network: "testnet".to_string(),
        version: "v1".to_string(),
        bridge_type: "pos".to_string(),
        parent: SideConfig {
            rpc_url: "https://parent.example".to_string(),
            abi_url: None,
            supports_dynamic_fees: true,
            defaults: TransactionOption::default(),
        },
        child: SideConfig {
            rpc_url: "https://child.example".to_string(),
            abi_url: None,
            supports_dynamic_fees: false,
            defaults: TransactionOption::default(),
        },
    }
}
