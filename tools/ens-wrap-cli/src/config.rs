//! Contract address configuration.
//!
//! Addresses come from a deployments JSON file in the shape
//! `{ "network": "...", "deployments": { "<key>": { "address": "0x..." } } }`,
//! or default to the mainnet deployment when no file is given.

use std::{collections::BTreeMap, fs, path::Path};

use alloy_primitives::Address;
use anyhow::{anyhow, Context, Result};
use ens_wrap_types::ContractAddresses;
use serde::Deserialize;

pub const REGISTRY_KEY: &str = "ens-registry";
pub const BASE_REGISTRAR_KEY: &str = "base-registrar";
pub const NAME_WRAPPER_KEY: &str = "name-wrapper";
pub const PUBLIC_RESOLVER_KEY: &str = "public-resolver";

#[derive(Debug, Deserialize)]
struct DeploymentsFile {
    #[serde(default)]
    network: Option<String>,
    deployments: BTreeMap<String, DeploymentEntry>,
}

#[derive(Debug, Deserialize)]
struct DeploymentEntry {
    address: Address,
}

/// Load contract addresses from `path`, or mainnet defaults when `None`.
pub fn load_contracts(path: Option<&Path>) -> Result<ContractAddresses> {
    let Some(path) = path else {
        return Ok(ContractAddresses::mainnet());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    parse_deployments(&raw).with_context(|| format!("invalid deployments file {}", path.display()))
}

pub fn parse_deployments(raw: &str) -> Result<ContractAddresses> {
    let file: DeploymentsFile =
        serde_json::from_str(raw).context("failed parsing deployments JSON")?;
    if let Some(network) = &file.network {
        tracing::debug!(network = %network, "using deployments file");
    }

    let lookup = |key: &str| -> Result<Address> {
        file.deployments
            .get(key)
            .map(|entry| entry.address)
            .ok_or_else(|| anyhow!("missing `{key}` entry under `deployments`"))
    };

    Ok(ContractAddresses {
        registry: lookup(REGISTRY_KEY)?,
        base_registrar: lookup(BASE_REGISTRAR_KEY)?,
        name_wrapper: lookup(NAME_WRAPPER_KEY)?,
        public_resolver: lookup(PUBLIC_RESOLVER_KEY)?,
    })
}
