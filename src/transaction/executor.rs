//! Transaction execution

use std::sync::Arc;

use crate::client::ChainClient;
use crate::contract::ContractMethod;
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::Result;
use crate::transaction::{
    ChainSide, IntoTransactionOption, TransactionConfig, TransactionConfigBuilder,
    TransactionOption, WriteResult,
};

/// Outcome of a write operation
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// The prepared config, returned instead of submitting
    Unsent(TransactionConfig),
    /// The submitted transaction's result
    Submitted(WriteResult),
}

impl WriteOutcome {
    /// The unsent config, if this outcome carries one
    pub fn config(&self) -> Option<&TransactionConfig> {
        match self {
            WriteOutcome::Unsent(config) => Some(config),
            WriteOutcome::Submitted(_) => None,
        }
    }

    /// The write result, if the transaction was submitted
    pub fn result(&self) -> Option<&WriteResult> {
        match self {
            WriteOutcome::Unsent(_) => None,
            WriteOutcome::Submitted(result) => Some(result),
        }
    }
}

/// Outcome of a read operation
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// The prepared config, returned instead of reading
    Unsent(TransactionConfig),
    /// The raw read result
    Value(String),
}

impl ReadOutcome {
    /// The unsent config, if this outcome carries one
    pub fn config(&self) -> Option<&TransactionConfig> {
        match self {
            ReadOutcome::Unsent(config) => Some(config),
            ReadOutcome::Value(_) => None,
        }
    }

    /// The read value, if the call was executed
    pub fn value(&self) -> Option<&str> {
        match self {
            ReadOutcome::Unsent(_) => None,
            ReadOutcome::Value(value) => Some(value.as_str()),
        }
    }
}

/// Orchestrates the four public operation shapes
///
/// Holds no mutable state; every call builds a fresh config. Nonce and gas
/// price are re-resolved per call, so identical options against a live chain
/// are not idempotent, and concurrent callers may race on nonce allocation.
pub struct TransactionExecutor {
    /// Chain client for the scoped side
    client: Arc<dyn ChainClient>,
    /// The chain side every config is scoped to
    side: ChainSide,
    /// Chain-side default option record
    defaults: TransactionOption,
    /// Diagnostic sink, best-effort only
    sink: Arc<dyn DiagnosticSink>,
}

impl TransactionExecutor {
    /// Create an executor scoped to one chain side
    pub fn new(client: Arc<dyn ChainClient>, side: ChainSide, defaults: TransactionOption) -> Self {
        Self {
            client,
            side,
            defaults,
            sink: Arc::new(NoopSink),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The chain side this executor is scoped to
    pub fn side(&self) -> ChainSide {
        self.side
    }

    /// The chain client this executor delegates to
    pub fn client(&self) -> &Arc<dyn ChainClient> {
        &self.client
    }

    fn validate(&self, option: impl IntoTransactionOption) -> Result<TransactionOption> {
        option.into_option().map_err(|error| {
            self.sink.failure(&error);
            error
        })
    }

    async fn build(
        &self,
        option: TransactionOption,
        method: Option<&dyn ContractMethod>,
        is_write: bool,
    ) -> Result<TransactionConfig> {
        self.sink.checkpoint(if is_write {
            "building write transaction config"
        } else {
            "building read transaction config"
        });

        let result = TransactionConfigBuilder::new(self.client.as_ref())
            .build(option, method, self.side, &self.defaults, is_write)
            .await;

        match &result {
            Ok(_) => self.sink.checkpoint("transaction config ready"),
            Err(error) => self.sink.failure(error),
        }

        result
    }

    /// Write through a bound contract method
    ///
    /// With the return-unsent flag, yields the config augmented with the
    /// method's call data and target address instead of submitting.
    pub async fn write_via_method(
        &self,
        method: &dyn ContractMethod,
        option: impl IntoTransactionOption,
    ) -> Result<WriteOutcome> {
        let option = self.validate(option)?;
        let return_transaction = option.return_transaction;

        let mut config = self.build(option, Some(method), true).await?;
        if return_transaction {
            config.data = Some(method.encode_call_data()?);
            config.to = Some(method.target_address().to_string());
            return Ok(WriteOutcome::Unsent(config));
        }

        Ok(WriteOutcome::Submitted(method.write(&config).await?))
    }

    /// Write directly through the chain client
    ///
    /// With the return-unsent flag, yields the raw config unmodified; there
    /// is no method to inject call data or a target address.
    pub async fn write_via_client(
        &self,
        option: impl IntoTransactionOption,
    ) -> Result<WriteOutcome> {
        let option = self.validate(option)?;
        let return_transaction = option.return_transaction;

        let config = self.build(option, None, true).await?;
        if return_transaction {
            return Ok(WriteOutcome::Unsent(config));
        }

        Ok(WriteOutcome::Submitted(self.client.write(&config).await?))
    }

    /// Read directly through the chain client
    pub async fn read_via_client(
        &self,
        option: impl IntoTransactionOption,
    ) -> Result<ReadOutcome> {
        let option = self.validate(option)?;
        let return_transaction = option.return_transaction;

        let config = self.build(option, None, false).await?;
        if return_transaction {
            return Ok(ReadOutcome::Unsent(config));
        }

        Ok(ReadOutcome::Value(self.client.read(&config).await?))
    }

    /// Read through a bound contract method, returning the value unwrapped
    pub async fn read_via_method(
        &self,
        method: &dyn ContractMethod,
        option: impl IntoTransactionOption,
    ) -> Result<ReadOutcome> {
        let option = self.validate(option)?;
        let return_transaction = option.return_transaction;

        let mut config = self.build(option, Some(method), false).await?;
        if return_transaction {
            config.data = Some(method.encode_call_data()?);
            config.to = Some(method.target_address().to_string());
            return Ok(ReadOutcome::Unsent(config));
        }

        Ok(ReadOutcome::Value(method.read(&config).await?))
    }
}
