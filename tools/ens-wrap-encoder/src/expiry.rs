//! Expiry resolution for the `.eth` wrap path.

use core::future::Future;

use ens_wrap_types::{ChainReader, CollaboratorError, Expiry, MAX_EXPIRY};

use crate::{errors::WrapError, name::label_hash};

/// Turns an optional caller expiry into the `uint64` seconds value to encode.
pub trait ExpiryResolver {
    fn resolve_expiry(
        &self,
        name: &str,
        expiry: Option<&Expiry>,
    ) -> impl Future<Output = Result<u64, WrapError>> + Send;
}

/// Convert an explicit expiry into unix seconds.
pub fn expiry_seconds(expiry: &Expiry) -> Result<u64, WrapError> {
    match expiry {
        Expiry::Seconds(seconds) => Ok(*seconds),
        Expiry::At(at) => u64::try_from(at.unix_timestamp())
            .map_err(|_| WrapError::InvalidExpiry(format!("{at} is before the unix epoch"))),
        Expiry::Raw(raw) => {
            let trimmed = raw.trim();
            let (digits, radix) = match trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
            {
                Some(hex) => (hex, 16),
                None => (trimmed, 10),
            };
            // from_str_radix tolerates a leading '+'
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(WrapError::InvalidExpiry(raw.clone()));
            }
            u64::from_str_radix(digits, radix).map_err(|_| WrapError::InvalidExpiry(raw.clone()))
        }
    }
}

/// Default policy: a non-zero explicit value wins, `.eth` names fall back to the
/// registrar expiry, everything else gets [`MAX_EXPIRY`].
pub struct RegistrarExpiry<'a, R> {
    reader: &'a R,
}

impl<'a, R: ChainReader> RegistrarExpiry<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }
}

impl<R: ChainReader> ExpiryResolver for RegistrarExpiry<'_, R> {
    async fn resolve_expiry(&self, name: &str, expiry: Option<&Expiry>) -> Result<u64, WrapError> {
        // Zero is treated as "not given".
        if let Some(expiry) = expiry {
            let seconds = expiry_seconds(expiry)?;
            if seconds > 0 {
                return Ok(seconds);
            }
        }
        let Some(label) = name.strip_suffix(".eth") else {
            return Ok(MAX_EXPIRY);
        };
        // Registrar token ids are keyed by the second-level label.
        let label = label.rsplit('.').next().unwrap_or(label);
        match self.reader.name_expires(label_hash(label)).await? {
            Some(expires) if expires > 0 => Ok(expires),
            _ => Err(CollaboratorError::MissingExpiry.into()),
        }
    }
}
