//! Deployer Port - Contract Deployment Interface
//!
//! Defines the trait for the external deployment collaborator. The
//! invoker hands it a contract identifier plus the ordered router list
//! and gets back the deployment outcome; everything on-chain (artifact
//! lookup, signing, gas, receipt) lives behind this boundary.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

/// Outcome of a successful contract deployment.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
  /// Hash of the deployment transaction.
  pub tx_hash: TxHash,
  /// Address the contract was deployed at.
  pub contract_address: Address,
  /// Gas consumed by the deployment transaction.
  pub gas_used: u64,
}

/// Trait for deploying a contract with its constructor arguments.
///
/// Implementations receive the contract identifier first and the full
/// constructor address list second, and must pass both through
/// unchanged - no reordering, no deduplication.
#[async_trait]
pub trait ContractDeployer: Send + Sync + 'static {
  /// Deploy `contract` with `routers` as its `address[]` constructor
  /// argument and wait for the transaction to be mined.
  async fn deploy(
    &self,
    contract: &str,
    routers: &[Address],
  ) -> anyhow::Result<DeploymentOutcome>;

  /// Check if the underlying chain connection is healthy.
  async fn is_healthy(&self) -> bool;
}
