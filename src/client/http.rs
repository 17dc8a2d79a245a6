//! HTTP chain client backed by ethers

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use ethers::core::types::transaction::eip2718::TypedTransaction;
use ethers::core::types::{
    Address, BlockNumber, Bytes, Eip1559TransactionRequest, TransactionRequest, U256,
};
use ethers_providers::{Http, Middleware, Provider};

use crate::client::{BlockTag, ChainClient};
use crate::config::SideConfig;
use crate::contract::{BoundContract, HttpContract};
use crate::error::{Error, Result};
use crate::transaction::{u256_to_u64, FeeModel, TransactionConfig, WriteResult};

/// Chain client for one bridge side, speaking JSON-RPC over HTTP
pub struct HttpChainClient {
    /// Ethers provider
    provider: Arc<Provider<Http>>,
    /// HTTP client for ABI artifact fetches
    http: reqwest::Client,
    /// Base URL of the ABI artifact store
    abi_url: Option<String>,
    /// Whether this side supports the dynamic fee market
    dynamic_fees: bool,
}

impl HttpChainClient {
    /// Create a client for one side of the bridge
    pub fn new(config: &SideConfig) -> Result<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.clone())
            .map_err(|e| Error::Upstream(format!("Failed to create provider: {}", e)))?;

        Ok(Self {
            provider: Arc::new(provider),
            http: reqwest::Client::new(),
            abi_url: config.abi_url.clone(),
            dynamic_fees: config.supports_dynamic_fees,
        })
    }
}

pub(crate) fn parse_address(address: &str) -> Result<Address> {
    Address::from_str(address).map_err(|e| Error::Validation(format!("Invalid address: {}", e)))
}

pub(crate) fn parse_value(value: &str) -> Result<U256> {
    U256::from_dec_str(value).map_err(|e| Error::Validation(format!("Invalid value: {}", e)))
}

fn parse_data(data: &str) -> Result<Bytes> {
    let bytes = hex::decode(data.trim_start_matches("0x"))
        .map_err(|e| Error::Validation(format!("Invalid call data: {}", e)))?;
    Ok(Bytes::from(bytes))
}

/// Convert a prepared config into an ethers typed transaction
///
/// The fee representation on the config picks the envelope: the dynamic pair
/// yields an EIP-1559 request, anything else a legacy request.
pub(crate) fn to_typed_transaction(config: &TransactionConfig) -> Result<TypedTransaction> {
    let from = config.from.as_deref().map(parse_address).transpose()?;
    let to = config.to.as_deref().map(parse_address).transpose()?;
    let value = config.value.as_deref().map(parse_value).transpose()?;
    let data = config.data.as_deref().map(parse_data).transpose()?;

    match config.fee {
        Some(FeeModel::Dynamic {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        }) => {
            let mut tx = Eip1559TransactionRequest::new()
                .max_fee_per_gas(max_fee_per_gas)
                .max_priority_fee_per_gas(max_priority_fee_per_gas);
            if let Some(from) = from {
                tx = tx.from(from);
            }
            if let Some(to) = to {
                tx = tx.to(to);
            }
            if let Some(value) = value {
                tx = tx.value(value);
            }
            if let Some(data) = data {
                tx = tx.data(data);
            }
            if let Some(gas_limit) = config.gas_limit {
                tx = tx.gas(gas_limit);
            }
            if let Some(nonce) = config.nonce {
                tx = tx.nonce(nonce);
            }
            if let Some(chain_id) = config.chain_id {
                tx = tx.chain_id(chain_id);
            }
            Ok(TypedTransaction::Eip1559(tx))
        }
        _ => {
            let mut tx = TransactionRequest::new();
            if let Some(FeeModel::Legacy { gas_price }) = config.fee {
                tx = tx.gas_price(gas_price);
            }
            if let Some(from) = from {
                tx = tx.from(from);
            }
            if let Some(to) = to {
                tx = tx.to(to);
            }
            if let Some(value) = value {
                tx = tx.value(value);
            }
            if let Some(data) = data {
                tx = tx.data(data);
            }
            if let Some(gas_limit) = config.gas_limit {
                tx = tx.gas(gas_limit);
            }
            if let Some(nonce) = config.nonce {
                tx = tx.nonce(nonce);
            }
            if let Some(chain_id) = config.chain_id {
                tx = tx.chain_id(chain_id);
            }
            Ok(tx.into())
        }
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn estimate_gas(&self, from: Option<&str>, value: Option<&str>) -> Result<U256> {
        let mut tx = TransactionRequest::new();
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

    async fn gas_price(&self) -> Result<U256> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to get gas price: {}", e)))
    }

    async fn transaction_count(&self, address: &str, tag: BlockTag) -> Result<u64> {
        let block = match tag {
            BlockTag::Latest => BlockNumber::Latest,
            BlockTag::Pending => BlockNumber::Pending,
        };

        let count = self
            .provider
            .get_transaction_count(parse_address(address)?, Some(block.into()))
            .await
            .map_err(|e| Error::Upstream(format!("Failed to get transaction count: {}", e)))?;

        u256_to_u64(count, "transaction count")
    }

    async fn chain_id(&self) -> Result<u64> {
        let chain_id = self
            .provider
            .get_chainid()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to get chain id: {}", e)))?;

        u256_to_u64(chain_id, "chain id")
    }

    async fn read(&self, config: &TransactionConfig) -> Result<String> {
        let tx = to_typed_transaction(config)?;
        let result = self
            .provider
            .call(&tx, None)
            .await
            .map_err(|e| Error::Upstream(format!("Read call failed: {}", e)))?;

        Ok(format!("0x{}", hex::encode(result)))
    }

    async fn write(&self, config: &TransactionConfig) -> Result<WriteResult> {
        let tx = to_typed_transaction(config)?;
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

    fn supports_dynamic_fees(&self) -> bool {
        self.dynamic_fees
    }

    async fn fetch_abi(&self, name: &str, bridge_type: &str) -> Result<serde_json::Value> {
        let base = self
            .abi_url
            .as_deref()
            .ok_or_else(|| Error::Upstream("No ABI artifact store configured".to_string()))?;

        let url = format!("{}/{}/{}.json", base.trim_end_matches('/'), bridge_type, name);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to fetch ABI {}: {}", name, e)))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "Failed to fetch ABI {}: HTTP {}",
                name,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Invalid ABI artifact {}: {}", name, e)))
    }

    fn bind_contract(
        &self,
        address: &str,
        abi: &serde_json::Value,
    ) -> Result<Arc<dyn BoundContract>> {
        Ok(Arc::new(HttpContract::new(
            address,
            abi,
            self.provider.clone(),
        )?))
    }
}
