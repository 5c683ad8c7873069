use core::fmt;

use alloy_primitives::Address;

/// Errors during collaborator reads.
pub use ens_wrap_types::CollaboratorError;

/// Wrap options that only the `.eth` second-level path accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapOption {
    Fuses,
    Expiry,
}

impl fmt::Display for WrapOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapOption::Fuses => f.write_str("Fuses"),
            WrapOption::Expiry => f.write_str("Expiry"),
        }
    }
}

/// Errors while building a wrap transaction. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    #[error("label can't be longer than 255 bytes (`{label}` is {length} bytes)")]
    LabelLength { label: String, length: usize },

    /// Fuse input had a shape other than object, number, string or null.
    #[error("invalid fuseOptions type: {0}")]
    InvalidFuseType(&'static str),

    #[error("invalid fuse value: {0}")]
    InvalidFuseValue(String),

    #[error("invalid expiry: {0}")]
    InvalidExpiry(String),

    #[error("{option} can not be initially set when wrapping a non .eth name")]
    WrapOptionNotSupported { option: WrapOption },

    #[error("NameWrapper ({operator}) must have approval to wrap a name from {owner}")]
    ApprovalRequired { owner: Address, operator: Address },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
