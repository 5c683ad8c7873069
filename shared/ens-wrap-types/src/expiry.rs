use time::OffsetDateTime;

/// Largest expiry the NameWrapper accepts (`type(uint64).max`).
pub const MAX_EXPIRY: u64 = u64::MAX;

/// Caller-supplied expiry, resolved to unix seconds before encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expiry {
    /// Unix timestamp in seconds.
    Seconds(u64),
    /// Point in time, truncated to whole seconds.
    At(OffsetDateTime),
    /// Decimal or `0x`-prefixed hex integer.
    Raw(String),
}

impl From<u64> for Expiry {
    fn from(seconds: u64) -> Self {
        Expiry::Seconds(seconds)
    }
}

impl From<OffsetDateTime> for Expiry {
    fn from(at: OffsetDateTime) -> Self {
        Expiry::At(at)
    }
}
