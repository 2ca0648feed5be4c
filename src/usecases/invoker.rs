//! Deployment Invoker - The Single Deployment Workflow
//!
//! Turns the raw router configuration value into a validated address
//! list and issues exactly one deployment call through the
//! `ContractDeployer` port: contract identifier first, the full ordered
//! router list second. The raw value is passed in explicitly rather
//! than read from the environment here, so the whole workflow is
//! testable without process state.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::config::DeployConfig;
use crate::domain::routers::parse_routers;
use crate::ports::deployer::{ContractDeployer, DeploymentOutcome};

/// Orchestrates the one-shot deployment.
pub struct DeploymentInvoker<D: ContractDeployer> {
  /// Deployment port.
  deployer: Arc<D>,
  /// Target contract identifier.
  contract: String,
  /// Dry-run mode: validate and log, submit nothing.
  dry_run: bool,
}

impl<D: ContractDeployer> DeploymentInvoker<D> {
  /// Create a new invoker from the loaded configuration.
  pub fn new(deployer: Arc<D>, config: &DeployConfig) -> Self {
    Self {
      deployer,
      contract: config.contract.name.clone(),
      dry_run: config.deployer.dry_run,
    }
  }

  /// Run the deployment with the raw router list value.
  ///
  /// Returns `Ok(None)` in dry-run mode, `Ok(Some(outcome))` after a
  /// mined deployment. The router list is validated before any chain
  /// interaction, and the port's health check gates the submission; the
  /// list reaches the port in configured order, unchanged.
  #[instrument(skip(self), fields(contract = %self.contract))]
  pub async fn run(&self, raw_routers: &str) -> Result<Option<DeploymentOutcome>> {
    let routers = parse_routers(raw_routers)
      .context("Invalid supported-routers configuration value")?;

    info!(
      contract = %self.contract,
      routers = ?routers,
      "Deployment request prepared"
    );

    if self.dry_run {
      warn!("Dry-run mode — deployment request NOT submitted");
      return Ok(None);
    }

    // Last check before the irreversible call: the connection was
    // validated at startup, but parsing and logging take time and a
    // deployment cannot be retried halfway.
    anyhow::ensure!(
      self.deployer.is_healthy().await,
      "Chain connection unhealthy, refusing to submit the deployment"
    );

    let outcome = self
      .deployer
      .deploy(&self.contract, &routers)
      .await
      .context("Deployment failed")?;

    Ok(Some(outcome))
  }
}
