//! Chain Deployer - Deployment Transaction Submission
//!
//! Implements the `ContractDeployer` port via alloy-rs 0.9: loads the
//! compiled artifact, ABI-encodes the `address[]` constructor argument,
//! submits the deployment transaction through the signing provider and
//! waits for the receipt. The gas ceiling is checked immediately before
//! submission.

use std::sync::Arc;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::ports::deployer::{ContractDeployer, DeploymentOutcome};

use super::artifacts::ContractArtifact;
use super::gas::GasOracle;
use super::provider::RpcProvider;

/// ABI-encode a single `address[]` constructor argument.
///
/// Standard ABI layout for one dynamic argument: a 32-byte offset to
/// the tail (always 0x20 here), then the element count, then each
/// address left-padded to a 32-byte word, in the given order.
#[must_use]
pub fn encode_router_args(routers: &[Address]) -> Vec<u8> {
    let mut data = Vec::with_capacity(64 + routers.len() * 32);
    data.extend_from_slice(&U256::from(32).to_be_bytes::<32>());
    data.extend_from_slice(&U256::from(routers.len()).to_be_bytes::<32>());
    for router in routers {
        data.extend_from_slice(router.into_word().as_slice());
    }
    data
}

/// Submits deployment transactions via alloy-rs 0.9.
pub struct ChainDeployer {
    /// Shared signing RPC provider.
    provider: Arc<RpcProvider>,
    /// Gas oracle for the submission ceiling.
    gas_oracle: Arc<GasOracle>,
    /// Directory holding compiled contract artifacts.
    artifacts_dir: String,
}

impl ChainDeployer {
    /// Create a new chain deployer.
    pub fn new(
        provider: Arc<RpcProvider>,
        gas_oracle: Arc<GasOracle>,
        artifacts_dir: String,
    ) -> Self {
        Self {
            provider,
            gas_oracle,
            artifacts_dir,
        }
    }
}

#[async_trait]
impl ContractDeployer for ChainDeployer {
    #[instrument(skip(self), fields(contract = %contract, routers = routers.len()))]
    async fn deploy(
        &self,
        contract: &str,
        routers: &[Address],
    ) -> Result<DeploymentOutcome> {
        let artifact = ContractArtifact::load(&self.artifacts_dir, contract)?;
        let creation_code = artifact.creation_code()?;

        // Init code = creation bytecode + encoded constructor arguments
        let mut init_code = creation_code.to_vec();
        init_code.extend_from_slice(&encode_router_args(routers));

        let gas_gwei = self.gas_oracle.check_ceiling().await?;

        info!(
            contract,
            routers = routers.len(),
            init_code_bytes = init_code.len(),
            gas_gwei,
            deployer = %self.provider.deployer_address(),
            "Submitting deployment transaction"
        );

        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let receipt = self
            .provider
            .inner()
            .send_transaction(tx)
            .await
            .context("Failed to submit deployment transaction")?
            .get_receipt()
            .await
            .context("Failed to fetch deployment receipt")?;

        if !receipt.status() {
            bail!(
                "Deployment transaction {} reverted",
                receipt.transaction_hash
            );
        }

        let contract_address = receipt
            .contract_address
            .context("Deployment receipt carries no contract address")?;

        info!(
            contract,
            address = %contract_address,
            tx_hash = %receipt.transaction_hash,
            gas_used = receipt.gas_used,
            "Contract deployed"
        );

        Ok(DeploymentOutcome {
            tx_hash: receipt.transaction_hash,
            contract_address,
            gas_used: u64::try_from(receipt.gas_used).unwrap_or(u64::MAX),
        })
    }

    async fn is_healthy(&self) -> bool {
        self.provider.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_empty_router_list() {
        let data = encode_router_args(&[]);
        // offset word + length word, nothing else
        assert_eq!(data.len(), 64);
        assert_eq!(U256::from_be_slice(&data[..32]), U256::from(32));
        assert_eq!(U256::from_be_slice(&data[32..64]), U256::ZERO);
    }

    #[test]
    fn encodes_two_routers_in_order() {
        let a: Address = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
            .parse()
            .unwrap();
        let b: Address = "0xE592427A0AEce92De3Edee1F18E0157C05861564"
            .parse()
            .unwrap();

        let data = encode_router_args(&[a, b]);
        assert_eq!(data.len(), 64 + 2 * 32);

        // Tail layout: length, then each address left-padded to a word
        assert_eq!(U256::from_be_slice(&data[32..64]), U256::from(2));
        assert_eq!(&data[64..76], &[0u8; 12]);
        assert_eq!(&data[76..96], a.as_slice());
        assert_eq!(&data[108..128], b.as_slice());
    }
}
