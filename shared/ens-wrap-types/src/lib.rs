//! Shared types for ENS NameWrapper wrap transactions: fuse bits, expiry input,
//! contract addresses and the collaborator traits the encoder reads through.

pub mod collaborators;
pub mod contracts;
pub mod expiry;
pub mod fuses;

pub use collaborators::{CallerIdentity, ChainReader, CollaboratorError, ContractRegistry};
pub use contracts::ContractAddresses;
pub use expiry::{Expiry, MAX_EXPIRY};
pub use fuses::{Fuse, FuseOptions, FuseSpec, CAN_DO_EVERYTHING};
