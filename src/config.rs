//! Bridge configuration

use serde::{Deserialize, Serialize};

use crate::transaction::{ChainSide, TransactionOption};

/// Configuration for one side of the bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideConfig {
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Base URL of the ABI artifact store, if contracts are used
    pub abi_url: Option<String>,
    /// Whether this side supports the dynamic fee market
    pub supports_dynamic_fees: bool,
    /// Default transaction option record for this side
    #[serde(default)]
    pub defaults: TransactionOption,
}

/// Configuration for the whole bridge client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Network name, e.g. "mainnet"
    pub network: String,
    /// Artifact version tag, e.g. "v1"
    pub version: String,
    /// Bridge type the ABI artifacts belong to, e.g. "pos"
    pub bridge_type: String,
    /// Parent side configuration
    pub parent: SideConfig,
    /// Child side configuration
    pub child: SideConfig,
}

impl BridgeConfig {
    /// The configuration record for the given chain side
    pub fn side(&self, side: ChainSide) -> &SideConfig {
        match side {
            ChainSide::Parent => &self.parent,
            ChainSide::Child => &self.child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BridgeConfig {
        BridgeConfig {
            network: "mainnet".to_string(),
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

    #[test]
    fn test_side_lookup() {
        let config = sample();
        assert_eq!(config.side(ChainSide::Parent).rpc_url, "https://parent.example");
        assert_eq!(config.side(ChainSide::Child).rpc_url, "https://child.example");
    }
}
