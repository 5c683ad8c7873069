use alloy_primitives::{address, Address};
use serde::Deserialize;

use crate::collaborators::ContractRegistry;

/// Static set of ENS contract addresses for one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    pub registry: Address,
    pub base_registrar: Address,
    pub name_wrapper: Address,
    pub public_resolver: Address,
}

impl ContractAddresses {
    /// Ethereum mainnet deployment.
    pub const fn mainnet() -> Self {
        Self {
            registry: address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e"),
            base_registrar: address!("57f1887a8BF19b14fC0dF6Fd9B2acc9Af147eA85"),
            name_wrapper: address!("D4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401"),
            public_resolver: address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63"),
        }
    }
}

impl ContractRegistry for ContractAddresses {
    fn base_registrar(&self) -> Address {
        self.base_registrar
    }

    fn name_wrapper(&self) -> Address {
        self.name_wrapper
    }

    fn registry(&self) -> Address {
        self.registry
    }

    fn public_resolver(&self) -> Address {
        self.public_resolver
    }
}
