//! Lazy contract resolution

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::ChainClient;
use crate::contract::BoundContract;
use crate::error::Result;

/// Memoizing loader for a token's bound contract
///
/// The first call fetches the ABI artifact and binds the contract; every
/// later call returns the already-built instance. The memo lives as long as
/// the owning token object; there is no expiry.
pub struct ContractLazyLoader {
    /// Chain client for the token's side
    client: Arc<dyn ChainClient>,
    /// Contract address
    address: String,
    /// ABI artifact name, e.g. "ChildERC20"
    abi_name: String,
    /// Bridge type the artifact belongs to, e.g. "pos"
    bridge_type: String,
    /// Memoized instance
    contract: OnceCell<Arc<dyn BoundContract>>,
}

impl ContractLazyLoader {
    /// Create a loader for the given contract tuple
    pub fn new(
        client: Arc<dyn ChainClient>,
        address: String,
        abi_name: String,
        bridge_type: String,
    ) -> Self {
        Self {
            client,
            address,
            abi_name,
            bridge_type,
            contract: OnceCell::new(),
        }
    }

    /// The contract address this loader resolves
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Resolve the bound contract, fetching the ABI at most once
    pub async fn get(&self) -> Result<Arc<dyn BoundContract>> {
        let contract = self
            .contract
            .get_or_try_init(|| async {
                let abi = self
                    .client
                    .fetch_abi(&self.abi_name, &self.bridge_type)
                    .await?;
                self.client.bind_contract(&self.address, &abi)
            })
            .await?;

        Ok(contract.clone())
    }
}
