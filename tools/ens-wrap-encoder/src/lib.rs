//! Builds unsigned transactions that move an ENS name into the NameWrapper.
//!
//! Second-level `.eth` names are transferred from the base registrar with the
//! wrap parameters (owner, fuses, expiry, resolver) attached as ERC-721 callback
//! data. Every other name goes through `NameWrapper.wrap`, which requires the
//! wrapper to already hold registry approval from the caller.
//!
//! Contract reads, expiry policy and the caller identity are injected, so the
//! encoder itself performs no I/O.

pub mod builder;
pub mod encoder;
pub mod errors;
pub mod expiry;
pub mod fuses;
pub mod interfaces;
pub mod mock;
pub mod name;
pub mod signer;
pub mod types;


pub use builder::{WrapNameBuilder, WrapOptions};
pub use errors::{WrapError, WrapOption};
pub use expiry::{ExpiryResolver, RegistrarExpiry};
pub use signer::LocalSigner;
pub use types::{TransactionDescriptor, WrapPayload};
