use core::future::Future;

use alloy_primitives::{Address, FixedBytes};

/// Errors surfaced by contract/signer collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// Used by off-chain mocks or partially implemented readers.
    #[error("read not implemented by this collaborator")]
    NotImplemented,
    /// The underlying call or transport failed.
    #[error("contract call failed: {0}")]
    CallFailed(String),
    /// Return data could not be decoded.
    #[error("contract returned malformed data")]
    MalformedReturn,
    /// The registrar has no expiry recorded for the name.
    #[error("couldn't get expiry for name, please provide one")]
    MissingExpiry,
}

/// Addresses of the ENS contracts a wrap touches.
pub trait ContractRegistry {
    fn base_registrar(&self) -> Address;
    fn name_wrapper(&self) -> Address;
    fn registry(&self) -> Address;
    /// Resolver used when the caller does not name one.
    fn public_resolver(&self) -> Address;
}

/// Read-only chain access, implemented by an RPC client or an off-chain mock.
pub trait ChainReader: Sync {
    /// `ENSRegistry.isApprovedForAll(owner, operator)`.
    fn is_approved_for_all(
        &self,
        _owner: Address,
        _operator: Address,
    ) -> impl Future<Output = Result<bool, CollaboratorError>> + Send {
        async { Err(CollaboratorError::NotImplemented) }
    }

    /// `BaseRegistrar.nameExpires(uint256(labelhash))` in unix seconds, `None` if unregistered.
    fn name_expires(
        &self,
        _label_hash: FixedBytes<32>,
    ) -> impl Future<Output = Result<Option<u64>, CollaboratorError>> + Send {
        async { Err(CollaboratorError::NotImplemented) }
    }
}

/// The account the transaction will be sent from.
pub trait CallerIdentity {
    fn address(&self) -> Address;
}

impl CallerIdentity for Address {
    fn address(&self) -> Address {
        *self
    }
}
