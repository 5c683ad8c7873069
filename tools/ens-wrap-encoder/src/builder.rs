//! Wrap orchestration: classify the name, reject option combinations the path
//! cannot honour, then hand off to the suffix or generic encoder.

use alloy_primitives::Address;
use ens_wrap_types::{CallerIdentity, ChainReader, ContractRegistry, Expiry, FuseSpec};
use tracing::debug;

use crate::{
    encoder::{encode_suffix_wrap, generic_wrap, GenericWrapArgs, SuffixWrapArgs},
    errors::{WrapError, WrapOption},
    expiry::ExpiryResolver,
    fuses::{decode_fuses, fuse_bits},
    name::{classify, split_labels, WrapTarget},
    types::TransactionDescriptor,
};

/// Caller options for a wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    pub wrapped_owner: Address,
    /// Only valid for `<label>.eth`.
    pub fuses: Option<FuseSpec>,
    /// Only valid for `<label>.eth`.
    pub expiry: Option<Expiry>,
    /// Defaults to the public resolver.
    pub resolver: Option<Address>,
}

impl WrapOptions {
    pub fn new(wrapped_owner: Address) -> Self {
        Self {
            wrapped_owner,
            fuses: None,
            expiry: None,
            resolver: None,
        }
    }

    pub fn with_fuses(mut self, fuses: impl Into<FuseSpec>) -> Self {
        self.fuses = Some(fuses.into());
        self
    }

    pub fn with_expiry(mut self, expiry: impl Into<Expiry>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    pub fn with_resolver(mut self, resolver: Address) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

/// Builds unsigned wrap transactions from injected collaborators. Holds no state
/// between calls.
pub struct WrapNameBuilder<'a, C, R, E, S> {
    contracts: &'a C,
    reader: &'a R,
    expiry: &'a E,
    signer: &'a S,
}

impl<'a, C, R, E, S> WrapNameBuilder<'a, C, R, E, S>
where
    C: ContractRegistry,
    R: ChainReader,
    E: ExpiryResolver,
    S: CallerIdentity,
{
    pub fn new(contracts: &'a C, reader: &'a R, expiry: &'a E, signer: &'a S) -> Self {
        Self {
            contracts,
            reader,
            expiry,
            signer,
        }
    }

    /// Build the transaction that wraps `name`.
    pub async fn build(
        &self,
        name: &str,
        options: &WrapOptions,
    ) -> Result<TransactionDescriptor, WrapError> {
        let labels = split_labels(name)?;
        let target = classify(name, &labels);

        // Reject unsupported options before touching any collaborator.
        if !target.is_suffix() {
            if options.fuses.is_some() {
                return Err(WrapError::WrapOptionNotSupported {
                    option: WrapOption::Fuses,
                });
            }
            if options.expiry.is_some() {
                return Err(WrapError::WrapOptionNotSupported {
                    option: WrapOption::Expiry,
                });
            }
        }

        let caller = self.signer.address();
        let resolver = options
            .resolver
            .unwrap_or_else(|| self.contracts.public_resolver());

        match target {
            WrapTarget::SuffixWrap { label } => {
                let decoded_fuses = decode_fuses(options.fuses.as_ref())?;
                let fuses = fuse_bits(&decoded_fuses)?;
                let expiry = self
                    .expiry
                    .resolve_expiry(name, options.expiry.as_ref())
                    .await?;
                debug!(wrap_name = name, %decoded_fuses, expiry, "wrapping .eth second-level name via registrar transfer");

                Ok(encode_suffix_wrap(SuffixWrapArgs {
                    caller,
                    base_registrar: self.contracts.base_registrar(),
                    name_wrapper: self.contracts.name_wrapper(),
                    label,
                    wrapped_owner: options.wrapped_owner,
                    decoded_fuses,
                    fuses,
                    expiry,
                    resolver,
                }))
            }
            WrapTarget::GenericWrap { name } => {
                debug!(wrap_name = name, "wrapping name via NameWrapper.wrap");
                generic_wrap(
                    self.reader,
                    GenericWrapArgs {
                        caller,
                        name_wrapper: self.contracts.name_wrapper(),
                        name,
                        wrapped_owner: options.wrapped_owner,
                        resolver,
                    },
                )
                .await
            }
        }
    }
}
