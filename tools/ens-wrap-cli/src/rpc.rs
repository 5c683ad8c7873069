//! JSON-RPC backed chain reads.
//!
//! Calldata is built and decoded with the same `sol!` bindings the encoder uses;
//! ethers only carries the `eth_call`.

use alloy_primitives::{Address, FixedBytes, U256};
use alloy_sol_types::SolCall;
use anyhow::{Context, Result};
use ens_wrap_encoder::interfaces::{IBaseRegistrar, IENSRegistry};
use ens_wrap_types::{ChainReader, CollaboratorError, ContractAddresses};
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{transaction::eip2718::TypedTransaction, Bytes, TransactionRequest, H160},
};

pub struct RpcChain {
    provider: Provider<Http>,
    contracts: ContractAddresses,
}

impl RpcChain {
    pub fn connect(rpc_url: &str, contracts: ContractAddresses) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .with_context(|| format!("invalid RPC URL {rpc_url}"))?;
        Ok(Self {
            provider,
            contracts,
        })
    }

    async fn eth_call<C: SolCall>(&self, to: Address, call: &C) -> Result<C::Return, CollaboratorError> {
        let tx: TypedTransaction = TransactionRequest::new()
            .to(H160::from_slice(to.as_slice()))
            .data(Bytes::from(call.abi_encode()))
            .into();
        let out = self
            .provider
            .call(&tx, None)
            .await
            .map_err(|e| CollaboratorError::CallFailed(e.to_string()))?;
        C::abi_decode_returns(&out, true).map_err(|_| CollaboratorError::MalformedReturn)
    }
}

impl ChainReader for RpcChain {
    async fn is_approved_for_all(
        &self,
        owner: Address,
        operator: Address,
    ) -> Result<bool, CollaboratorError> {
        let call = IENSRegistry::isApprovedForAllCall { owner, operator };
        let ret = self.eth_call(self.contracts.registry, &call).await?;
        Ok(ret._0)
    }

    async fn name_expires(
        &self,
        label_hash: FixedBytes<32>,
    ) -> Result<Option<u64>, CollaboratorError> {
        let call = IBaseRegistrar::nameExpiresCall {
            id: U256::from_be_bytes(label_hash.0),
        };
        let ret = self.eth_call(self.contracts.base_registrar, &call).await?;
        if ret._0.is_zero() {
            return Ok(None);
        }
        u64::try_from(ret._0)
            .map(Some)
            .map_err(|_| CollaboratorError::MalformedReturn)
    }
}
