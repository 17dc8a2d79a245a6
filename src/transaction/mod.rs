//! Transaction preparation
//!
//! This module provides the core transaction pipeline: merging caller
//! overrides with chain-side defaults, resolving missing fields from the
//! chain client, and executing contract reads and writes.

mod types;
mod builder;
mod executor;

pub use types::*;
pub use builder::*;
pub use executor::*;
