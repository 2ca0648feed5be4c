//! Gas Oracle - Submission Ceiling for Deployments
//!
//! Queries the current gas price before the deployment transaction is
//! submitted. A deployment is a one-shot action with no retry loop, so
//! the only gas policy is a configurable ceiling: refuse to submit
//! while the network price is above `max_gas_gwei`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use super::provider::RpcProvider;

/// Gas price oracle enforcing the configured submission ceiling.
pub struct GasOracle {
    /// Shared RPC provider.
    provider: Arc<RpcProvider>,
    /// Ceiling for submitting the deployment transaction (gwei).
    max_gas_gwei: f64,
}

impl GasOracle {
    /// Create a new gas oracle with the configured ceiling.
    pub fn new(provider: Arc<RpcProvider>, max_gas_gwei: f64) -> Self {
        Self {
            provider,
            max_gas_gwei,
        }
    }

    /// Get the current gas price in gwei from the RPC node.
    #[instrument(skip(self))]
    pub async fn current_gas_gwei(&self) -> Result<f64> {
        let inner = self.provider.inner();

        let gas_price = inner
            .get_gas_price()
            .await
            .context("Failed to query gas price")?;

        // Convert wei to gwei (1 gwei = 1e9 wei)
        let gwei = gas_price as f64 / 1_000_000_000.0;

        debug!(gas_gwei = gwei, "Gas price queried");
        Ok(gwei)
    }

    /// Check the current price against the ceiling, returning it for
    /// logging on success.
    pub async fn check_ceiling(&self) -> Result<f64> {
        let gwei = self.current_gas_gwei().await?;
        ensure_below_ceiling(gwei, self.max_gas_gwei)?;
        Ok(gwei)
    }
}

/// Enforce the submission ceiling. The ceiling itself is still
/// submittable; only a strictly higher price is rejected.
fn ensure_below_ceiling(gwei: f64, ceiling_gwei: f64) -> Result<()> {
    anyhow::ensure!(
        gwei <= ceiling_gwei,
        "Gas price {gwei:.1} gwei exceeds the {ceiling_gwei:.1} gwei ceiling — retry later"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_below_ceiling_is_accepted() {
        assert!(ensure_below_ceiling(34.9, 35.0).is_ok());
    }

    #[test]
    fn price_at_ceiling_is_accepted() {
        assert!(ensure_below_ceiling(35.0, 35.0).is_ok());
    }

    #[test]
    fn price_above_ceiling_is_rejected() {
        let err = ensure_below_ceiling(35.1, 35.0).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }
}
