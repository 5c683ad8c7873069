use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use ens_wrap_types::ChainReader;
use tracing::debug;

use crate::errors::WrapError;
use crate::interfaces::{IBaseRegistrar, INameWrapper};
use crate::name::{dns_encode_name, label_hash};
use crate::types::{TransactionDescriptor, WrapPayload};

/// Inputs of the `.eth` second-level wrap.
#[derive(Clone, Debug)]
pub struct SuffixWrapArgs<'a> {
    pub caller: Address,
    pub base_registrar: Address,
    pub name_wrapper: Address,
    pub label: &'a str,
    pub wrapped_owner: Address,
    pub decoded_fuses: String,
    pub fuses: u32,
    pub expiry: u64,
    pub resolver: Address,
}

/// Inputs of the generic wrap.
#[derive(Clone, Debug)]
pub struct GenericWrapArgs<'a> {
    pub caller: Address,
    pub name_wrapper: Address,
    pub name: &'a str,
    pub wrapped_owner: Address,
    pub resolver: Address,
}

/// Encode the data the NameWrapper decodes in `onERC721Received`.
///
/// Layout: `abi.encode(string label, address wrappedOwner, uint32 fuses, uint64 expiry, address resolver)`.
pub fn encode_wrap_data(
    label: &str,
    wrapped_owner: Address,
    fuses: u32,
    expiry: u64,
    resolver: Address,
) -> Vec<u8> {
    (label.to_string(), wrapped_owner, fuses, expiry, resolver).abi_encode_params()
}

/// Build `BaseRegistrar.safeTransferFrom(caller, nameWrapper, labelhash, data)`.
///
/// The registrar transfer calls back into the wrapper, which applies owner, fuses,
/// expiry and resolver in the same transaction. No approval is needed since the
/// owner calls the registrar directly.
pub fn encode_suffix_wrap(args: SuffixWrapArgs<'_>) -> TransactionDescriptor {
    let token_id = U256::from_be_bytes(label_hash(args.label).0);
    let data: Bytes = encode_wrap_data(
        args.label,
        args.wrapped_owner,
        args.fuses,
        args.expiry,
        args.resolver,
    )
    .into();

    let call = IBaseRegistrar::safeTransferFromCall {
        from: args.caller,
        to: args.name_wrapper,
        tokenId: token_id,
        data: data.clone(),
    };

    TransactionDescriptor {
        from: args.caller,
        to: args.base_registrar,
        method: IBaseRegistrar::safeTransferFromCall::SIGNATURE,
        selector: FixedBytes(IBaseRegistrar::safeTransferFromCall::SELECTOR),
        data: call.abi_encode().into(),
        payload: WrapPayload::SuffixWrap {
            label: args.label.to_string(),
            token_id,
            decoded_fuses: args.decoded_fuses,
            fuses: args.fuses,
            expiry: args.expiry,
            wrapped_owner: args.wrapped_owner,
            resolver: args.resolver,
            data,
        },
    }
}

/// Build `NameWrapper.wrap(dnsEncode(name), wrappedOwner, resolver)`.
pub fn encode_generic_wrap(args: &GenericWrapArgs<'_>) -> Result<TransactionDescriptor, WrapError> {
    let encoded_name: Bytes = dns_encode_name(args.name)?.into();
    let call = INameWrapper::wrapCall {
        name: encoded_name.clone(),
        wrappedOwner: args.wrapped_owner,
        resolver: args.resolver,
    };

    Ok(TransactionDescriptor {
        from: args.caller,
        to: args.name_wrapper,
        method: INameWrapper::wrapCall::SIGNATURE,
        selector: FixedBytes(INameWrapper::wrapCall::SELECTOR),
        data: call.abi_encode().into(),
        payload: WrapPayload::GenericWrap {
            encoded_name,
            wrapped_owner: args.wrapped_owner,
            resolver: args.resolver,
        },
    })
}

/// Generic wrap gated on the registry approval the wrapper needs to take the name.
pub async fn generic_wrap<R: ChainReader>(
    reader: &R,
    args: GenericWrapArgs<'_>,
) -> Result<TransactionDescriptor, WrapError> {
    let approved = reader
        .is_approved_for_all(args.caller, args.name_wrapper)
        .await?;
    if !approved {
        debug!(owner = %args.caller, operator = %args.name_wrapper, "wrapper lacks registry approval");
        return Err(WrapError::ApprovalRequired {
            owner: args.caller,
            operator: args.name_wrapper,
        });
    }
    encode_generic_wrap(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const CALLER: Address = address!("1111111111111111111111111111111111111111");
    const OWNER: Address = address!("2222222222222222222222222222222222222222");
    const RESOLVER: Address = address!("3333333333333333333333333333333333333333");
    const REGISTRAR: Address = address!("4444444444444444444444444444444444444444");
    const WRAPPER: Address = address!("5555555555555555555555555555555555555555");

    fn suffix_args(fuses: u32, expiry: u64) -> SuffixWrapArgs<'static> {
        SuffixWrapArgs {
            caller: CALLER,
            base_registrar: REGISTRAR,
            name_wrapper: WRAPPER,
            label: "vitalik",
            wrapped_owner: OWNER,
            decoded_fuses: format!("{fuses:x}"),
            fuses,
            expiry,
            resolver: RESOLVER,
        }
    }

    #[test]
    fn wrap_data_layout() {
        let data = encode_wrap_data("vitalik", OWNER, 5, 1_900_000_000, RESOLVER);
        // five head words + string length word + one padded data word
        assert_eq!(data.len(), 32 * 7);
        // head[0] is the offset of the string tail
        assert_eq!(U256::from_be_slice(&data[0..32]), U256::from(160u64));
        assert_eq!(&data[44..64], OWNER.as_slice());
        assert_eq!(U256::from_be_slice(&data[64..96]), U256::from(5u64));
        assert_eq!(U256::from_be_slice(&data[96..128]), U256::from(1_900_000_000u64));
        assert_eq!(&data[140..160], RESOLVER.as_slice());
        assert_eq!(U256::from_be_slice(&data[160..192]), U256::from(7u64));
        assert_eq!(&data[192..199], b"vitalik");

        let decoded =
            <(String, Address, u32, u64, Address)>::abi_decode_params(&data, true).unwrap();
        assert_eq!(decoded, ("vitalik".to_string(), OWNER, 5, 1_900_000_000, RESOLVER));
    }

    #[test]
    fn suffix_wrap_targets_registrar_transfer() {
        let tx = encode_suffix_wrap(suffix_args(1, 42));
        assert_eq!(tx.to, REGISTRAR);
        assert_eq!(tx.from, CALLER);
        assert_eq!(tx.method, "safeTransferFrom(address,address,uint256,bytes)");
        assert_eq!(tx.selector, FixedBytes([0xb8, 0x8d, 0x4f, 0xde]));
        assert_eq!(&tx.data[..4], tx.selector.as_slice());

        let call = IBaseRegistrar::safeTransferFromCall::abi_decode(&tx.data, true).unwrap();
        assert_eq!(call.from, CALLER);
        assert_eq!(call.to, WRAPPER);
        assert_eq!(call.tokenId, U256::from_be_bytes(label_hash("vitalik").0));
        assert_eq!(call.data, Bytes::from(encode_wrap_data("vitalik", OWNER, 1, 42, RESOLVER)));
    }

    #[test]
    fn generic_wrap_encodes_dns_name() {
        let args = GenericWrapArgs {
            caller: CALLER,
            name_wrapper: WRAPPER,
            name: "mydao.xyz",
            wrapped_owner: OWNER,
            resolver: RESOLVER,
        };
        let tx = encode_generic_wrap(&args).unwrap();
        assert_eq!(tx.to, WRAPPER);
        assert_eq!(tx.method, "wrap(bytes,address,address)");

        let call = INameWrapper::wrapCall::abi_decode(&tx.data, true).unwrap();
        assert_eq!(&call.name[..], b"\x05mydao\x03xyz\x00");
        assert_eq!(call.wrappedOwner, OWNER);
        assert_eq!(call.resolver, RESOLVER);
    }
}
