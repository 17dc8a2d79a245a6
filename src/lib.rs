//! POS Bridge Core - Cross-chain token bridge client SDK
//!
//! This library provides the transaction-preparation core for a token bridge
//! spanning a parent chain and a child chain: it assembles protocol-correct
//! transaction configurations (gas limit, fee fields, nonce, chain id) by
//! merging caller overrides with chain-side defaults and values resolved from
//! the chain client, and drives generic contract reads and writes through
//! pluggable chain-client and contract-method capabilities.

pub mod error;
pub mod config;
pub mod diagnostics;
pub mod client;
pub mod contract;
pub mod transaction;
pub mod token;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use crate::transaction::ChainSide;

    #[test]
    fn chain_sides() {
        assert!(ChainSide::Parent.is_parent());
        assert!(!ChainSide::Child.is_parent());
    }
}
