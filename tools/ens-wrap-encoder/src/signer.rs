//! Local secp256k1 key used to identify the sending account.

use alloy_primitives::{keccak256, Address};
use ens_wrap_types::CallerIdentity;
use k256::{ecdsa::SigningKey, elliptic_curve::sec1::ToEncodedPoint, PublicKey};

/// Caller identity derived from a private key. Only the address is kept.
pub struct LocalSigner {
    address: Address,
}

impl LocalSigner {
    pub fn new(signing_key: &SigningKey) -> Self {
        Self {
            address: public_key_address(signing_key),
        }
    }

    /// Parse a 32-byte hex private key, `0x` prefix optional.
    pub fn from_hex(key: &str) -> Result<Self, k256::ecdsa::Error> {
        let key = key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(key, &mut bytes).map_err(|_| k256::ecdsa::Error::new())?;
        let signing_key = SigningKey::from_bytes(&bytes.into())?;
        Ok(Self::new(&signing_key))
    }
}

impl CallerIdentity for LocalSigner {
    fn address(&self) -> Address {
        self.address
    }
}

/// Ethereum address: low 20 bytes of keccak256 over the uncompressed public key (sans 0x04 tag).
fn public_key_address(signing_key: &SigningKey) -> Address {
    let point = PublicKey::from(signing_key.verifying_key()).to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
