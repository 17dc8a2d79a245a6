//! Bridge token objects

use std::sync::Arc;

use ethers::abi::Token;

use crate::client::ChainClient;
use crate::config::BridgeConfig;
use crate::contract::{BoundContract, ContractLazyLoader, ContractMethod};
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::transaction::{ChainSide, TransactionExecutor};

/// A token contract on one side of the bridge
///
/// Owns the transaction executor for its declared side and the lazily-built
/// contract instance. The contract memo is the only persistent state; it is
/// written once on first resolution and read-only afterwards.
pub struct BridgeToken {
    /// Contract address
    address: String,
    /// ABI artifact name, e.g. "ChildERC20"
    abi_name: String,
    /// The chain side this token lives on
    side: ChainSide,
    /// Executor scoped to the token's side
    executor: TransactionExecutor,
    /// Memoized bound contract
    contract: ContractLazyLoader,
}

impl BridgeToken {
    /// Create a token scoped to one chain side
    ///
    /// The client must be the one serving the declared side; the side's
    /// default option record is taken from the bridge configuration.
    pub fn new(
        client: Arc<dyn ChainClient>,
        config: &BridgeConfig,
        address: impl Into<String>,
        abi_name: impl Into<String>,
        side: ChainSide,
    ) -> Self {
        let address = address.into();
        let abi_name = abi_name.into();
        let defaults = config.side(side).defaults.clone();

        Self {
            executor: TransactionExecutor::new(client.clone(), side, defaults),
            contract: ContractLazyLoader::new(
                client,
                address.clone(),
                abi_name.clone(),
                config.bridge_type.clone(),
            ),
            address,
            abi_name,
            side,
        }
    }

    /// Replace the executor's diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.executor = self.executor.with_sink(sink);
        self
    }

    /// The token's contract address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The token's ABI artifact name
    pub fn abi_name(&self) -> &str {
        &self.abi_name
    }

    /// The chain side this token is scoped to
    pub fn side(&self) -> ChainSide {
        self.side
    }

    /// The transaction executor for this token
    pub fn executor(&self) -> &TransactionExecutor {
        &self.executor
    }

    /// Resolve the bound contract, building it on first use
    pub async fn contract(&self) -> Result<Arc<dyn BoundContract>> {
        self.contract.get().await
    }

    /// Create a handle for a named contract method
    pub async fn method(&self, name: &str, args: &[Token]) -> Result<Box<dyn ContractMethod>> {
        self.contract.get().await?.method(name, args)
    }

    /// Guard for operations that only exist on the parent chain
    ///
    /// Checked eagerly, before any config building begins.
    pub fn require_parent(&self) -> Result<()> {
        if self.side.is_parent() {
            Ok(())
        } else {
            Err(Error::Usage(format!(
                "Token {} is scoped to the child chain; this operation is only available on the parent chain",
                self.address
            )))
        }
    }

    /// Guard for operations that only exist on the child chain
    pub fn require_child(&self) -> Result<()> {
        if self.side.is_parent() {
            Err(Error::Usage(format!(
                "Token {} is scoped to the parent chain; this operation is only available on the child chain",
                self.address
            )))
        } else {
            Ok(())
        }
    }
}
