//! Common transaction types

use ethers::core::types::U256;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which side of the bridge a transaction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainSide {
    /// The parent chain
    Parent,
    /// The child chain
    Child,
}

impl ChainSide {
    /// Whether this is the parent side of the bridge
    pub fn is_parent(self) -> bool {
        matches!(self, ChainSide::Parent)
    }
}

/// Caller-supplied transaction overrides
///
/// Every field is optional; anything left unset falls back to the chain-side
/// default and, for writes, to a value resolved from the chain client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionOption {
    /// Sender address
    pub from: Option<String>,
    /// Recipient address
    pub to: Option<String>,
    /// Value in wei, as a decimal string
    pub value: Option<String>,
    /// Gas limit
    pub gas_limit: Option<u64>,
    /// Legacy gas price
    pub gas_price: Option<U256>,
    /// Maximum total fee per gas (dynamic fee market)
    pub max_fee_per_gas: Option<U256>,
    /// Maximum priority fee per gas (dynamic fee market)
    pub max_priority_fee_per_gas: Option<U256>,
    /// Nonce
    pub nonce: Option<u64>,
    /// Chain ID
    pub chain_id: Option<u64>,
    /// Return the prepared configuration instead of executing it
    pub return_transaction: bool,
}

impl TransactionOption {
    /// Parse an option from a raw JSON value
    ///
    /// Fails with a validation error when the value is not a plain key-value
    /// object (an array, a scalar, or null). Runs before any network call.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Validation(
                "Transaction option must be a plain key-value object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| Error::Validation(format!("Invalid transaction option: {}", e)))
    }

    /// Merge this option over a chain-side default record
    ///
    /// Caller fields win on collision; default-only fields pass through.
    pub fn merge_over(&self, defaults: &Self) -> Self {
        Self {
            from: self.from.clone().or_else(|| defaults.from.clone()),
            to: self.to.clone().or_else(|| defaults.to.clone()),
            value: self.value.clone().or_else(|| defaults.value.clone()),
            gas_limit: self.gas_limit.or(defaults.gas_limit),
            gas_price: self.gas_price.or(defaults.gas_price),
            max_fee_per_gas: self.max_fee_per_gas.or(defaults.max_fee_per_gas),
            max_priority_fee_per_gas: self
                .max_priority_fee_per_gas
                .or(defaults.max_priority_fee_per_gas),
            nonce: self.nonce.or(defaults.nonce),
            chain_id: self.chain_id.or(defaults.chain_id),
            return_transaction: self.return_transaction,
        }
    }

    /// Whether either dynamic fee field is set
    pub fn has_dynamic_fee_fields(&self) -> bool {
        self.max_fee_per_gas.is_some() || self.max_priority_fee_per_gas.is_some()
    }

    /// Convert a merged option into a config without network resolution
    ///
    /// The dynamic fee pair takes precedence when complete; a lone legacy gas
    /// price is kept as-is; otherwise no fee field is carried.
    pub(crate) fn into_config(self) -> TransactionConfig {
        let fee = match (
            self.max_fee_per_gas,
            self.max_priority_fee_per_gas,
            self.gas_price,
        ) {
            (Some(max_fee_per_gas), Some(max_priority_fee_per_gas), _) => Some(FeeModel::Dynamic {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            }),
            (_, _, Some(gas_price)) => Some(FeeModel::Legacy { gas_price }),
            _ => None,
        };

        TransactionConfig {
            from: self.from,
            to: self.to,
            value: self.value,
            data: None,
            gas_limit: self.gas_limit,
            fee,
            nonce: self.nonce,
            chain_id: self.chain_id,
        }
    }
}

/// Conversion into a validated transaction option
///
/// Lets the executor operations accept a typed option, an optional one, or a
/// raw JSON value; the JSON form is shape-checked before anything else runs.
pub trait IntoTransactionOption {
    /// Convert into a transaction option, validating the shape
    fn into_option(self) -> Result<TransactionOption>;
}

impl IntoTransactionOption for TransactionOption {
    fn into_option(self) -> Result<TransactionOption> {
        Ok(self)
    }
}

impl IntoTransactionOption for Option<TransactionOption> {
    fn into_option(self) -> Result<TransactionOption> {
        Ok(self.unwrap_or_default())
    }
}

impl IntoTransactionOption for serde_json::Value {
    fn into_option(self) -> Result<TransactionOption> {
        TransactionOption::from_value(self)
    }
}

/// Fee representation of a prepared transaction
///
/// Exactly one representation exists per config: either a legacy gas price or
/// the dynamic fee pair, depending on the fee-market support of the target
/// chain side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeeModel {
    /// Dynamic fee market pair
    #[serde(rename_all = "camelCase")]
    Dynamic {
        /// Maximum total fee per gas
        max_fee_per_gas: U256,
        /// Maximum priority fee per gas
        max_priority_fee_per_gas: U256,
    },
    /// Single legacy gas price
    #[serde(rename_all = "camelCase")]
    Legacy {
        /// Gas price
        gas_price: U256,
    },
}

/// Resolved transaction configuration
///
/// Built fresh per call and never mutated afterwards. After a write-mode
/// build, gas limit, fee, nonce, and chain id are all present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfig {
    /// Sender address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Recipient address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Value in wei, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Encoded call data (0x-prefixed hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Gas limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    /// Fee representation
    #[serde(flatten)]
    pub fee: Option<FeeModel>,
    /// Nonce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Chain ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Transaction is pending
    Pending,
    /// Transaction is confirmed
    Confirmed,
    /// Transaction failed
    Failed,
}

/// Transaction receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Transaction hash
    pub hash: String,
    /// Status
    pub status: TransactionStatus,
    /// Block number
    pub block_number: Option<u64>,
}

/// Outcome of a submitted write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteResult {
    /// Hash of the submitted transaction
    pub transaction_hash: String,
    /// Receipt, when the client tracked confirmation
    pub receipt: Option<TransactionReceipt>,
}

/// Coerce a resolved network value to a plain integer
pub(crate) fn u256_to_u64(value: U256, what: &str) -> Result<u64> {
    if value > U256::from(u64::MAX) {
        return Err(Error::Upstream(format!("{} overflows u64: {}", what, value)));
    }
    Ok(value.as_u64())
}
