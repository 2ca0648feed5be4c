//! Chain Adapters - Blockchain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with startup chain-id validation
//! - Compiled-artifact loading (creation bytecode by contract name)
//! - Gas price checks against the submission ceiling
//! - Deployment transaction submission and receipt handling

pub mod artifacts;
pub mod deployer;
pub mod gas;
pub mod provider;

pub use deployer::ChainDeployer;
pub use gas::GasOracle;
pub use provider::RpcProvider;
