use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use serde::Serialize;

/// Unsigned transaction produced by the encoder. Never signed or sent here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptor {
    /// Account expected to sign and send.
    pub from: Address,
    /// Contract the call targets.
    pub to: Address,
    /// Solidity signature of the called method.
    pub method: &'static str,
    pub selector: FixedBytes<4>,
    /// Full calldata (selector + ABI-encoded arguments).
    pub data: Bytes,
    /// Decoded view of what `data` carries.
    pub payload: WrapPayload,
}

/// Arguments of the wrap call, kept alongside the raw calldata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WrapPayload {
    #[serde(rename_all = "camelCase")]
    SuffixWrap {
        label: String,
        /// `uint256(labelhash)`, the registrar token id.
        token_id: U256,
        /// Canonical hex fuse bitmask.
        decoded_fuses: String,
        fuses: u32,
        expiry: u64,
        wrapped_owner: Address,
        resolver: Address,
        /// `abi.encode(label, wrappedOwner, fuses, expiry, resolver)` passed to the wrapper.
        data: Bytes,
    },
    #[serde(rename_all = "camelCase")]
    GenericWrap {
        /// DNS wire-encoded name.
        encoded_name: Bytes,
        wrapped_owner: Address,
        resolver: Address,
    },
}
