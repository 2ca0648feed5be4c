//! Contract Artifacts - Compiled Bytecode Loading
//!
//! Resolves a contract identifier to its compiled artifact on disk.
//! Artifacts are the solc/Truffle build output: a JSON file named after
//! the contract, carrying at least `contractName` and the creation
//! `bytecode`. Only the fields the deployer needs are deserialized.

use std::path::{Path, PathBuf};

use alloy::primitives::Bytes;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

/// The subset of a compiled-contract artifact the deployer consumes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name as recorded by the compiler.
    pub contract_name: String,
    /// Creation bytecode as a 0x-prefixed hex string.
    bytecode: String,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse contract artifact JSON")
    }

    /// Load the artifact for `contract` from `artifacts_dir`.
    ///
    /// The artifact file must be named `<contract>.json` and its
    /// `contractName` field must match the requested identifier, so a
    /// stale or misnamed build output fails loudly instead of deploying
    /// the wrong contract.
    #[instrument(skip(artifacts_dir), fields(contract = %contract))]
    pub fn load(artifacts_dir: &str, contract: &str) -> Result<Self> {
        let path: PathBuf = Path::new(artifacts_dir).join(format!("{contract}.json"));

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read artifact: {}", path.display()))?;

        let artifact = Self::from_json(&json)?;

        anyhow::ensure!(
            artifact.contract_name == contract,
            "Artifact {} declares contractName {:?}, expected {:?}",
            path.display(),
            artifact.contract_name,
            contract
        );

        debug!(path = %path.display(), "Artifact loaded");
        Ok(artifact)
    }

    /// Decode the creation bytecode.
    ///
    /// An empty bytecode field means the source was compiled as an
    /// interface or abstract contract and cannot be deployed.
    pub fn creation_code(&self) -> Result<Bytes> {
        let code: Bytes = self
            .bytecode
            .parse()
            .context("Artifact bytecode is not valid hex")?;

        anyhow::ensure!(
            !code.is_empty(),
            "Artifact for {} has empty bytecode — is it abstract or an interface?",
            self.contract_name
        );

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_truffle_style_artifact() {
        let json = r#"{
            "contractName": "DiamondHands",
            "abi": [],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;

        let artifact = ContractArtifact::from_json(json).unwrap();
        assert_eq!(artifact.contract_name, "DiamondHands");
        assert_eq!(
            artifact.creation_code().unwrap().as_ref(),
            &[0x60, 0x80, 0x60, 0x40, 0x52]
        );
    }

    #[test]
    fn rejects_empty_bytecode() {
        let json = r#"{"contractName": "IRouter", "bytecode": "0x"}"#;

        let artifact = ContractArtifact::from_json(json).unwrap();
        assert!(artifact.creation_code().is_err());
    }

    #[test]
    fn load_missing_artifact_fails() {
        let result = ContractArtifact::load("does/not/exist", "DiamondHands");
        assert!(result.is_err());
    }
}
