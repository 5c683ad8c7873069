use serde::Deserialize;

/// No fuses burned.
pub const CAN_DO_EVERYTHING: u32 = 0;

/// Fuse bits understood by the NameWrapper (low 32 bits of the fuse word).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Fuse {
    CannotUnwrap = 1,
    CannotBurnFuses = 2,
    CannotTransfer = 4,
    CannotSetResolver = 8,
    CannotSetTtl = 16,
    CannotCreateSubdomain = 32,
    ParentCannotControl = 64,
}

impl Fuse {
    pub const ALL: [Fuse; 7] = [
        Fuse::CannotUnwrap,
        Fuse::CannotBurnFuses,
        Fuse::CannotTransfer,
        Fuse::CannotSetResolver,
        Fuse::CannotSetTtl,
        Fuse::CannotCreateSubdomain,
        Fuse::ParentCannotControl,
    ];

    pub const fn bit(self) -> u32 {
        self as u32
    }
}

/// Named fuse flags, one boolean per bit. Unset keys default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FuseOptions {
    pub cannot_unwrap: bool,
    pub cannot_burn_fuses: bool,
    pub cannot_transfer: bool,
    pub cannot_set_resolver: bool,
    pub cannot_set_ttl: bool,
    pub cannot_create_subdomain: bool,
    pub parent_cannot_control: bool,
}

impl FuseOptions {
    pub fn is_set(&self, fuse: Fuse) -> bool {
        match fuse {
            Fuse::CannotUnwrap => self.cannot_unwrap,
            Fuse::CannotBurnFuses => self.cannot_burn_fuses,
            Fuse::CannotTransfer => self.cannot_transfer,
            Fuse::CannotSetResolver => self.cannot_set_resolver,
            Fuse::CannotSetTtl => self.cannot_set_ttl,
            Fuse::CannotCreateSubdomain => self.cannot_create_subdomain,
            Fuse::ParentCannotControl => self.parent_cannot_control,
        }
    }

    /// OR of every set fuse bit.
    pub fn bits(&self) -> u32 {
        Fuse::ALL
            .iter()
            .filter(|fuse| self.is_set(**fuse))
            .fold(CAN_DO_EVERYTHING, |acc, fuse| acc | fuse.bit())
    }
}

/// Caller-supplied fuse specification, one variant per accepted shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FuseSpec {
    Options(FuseOptions),
    Number(u64),
    /// Hex bitmask, with or without a `0x` prefix.
    Hex(String),
}

impl From<FuseOptions> for FuseSpec {
    fn from(options: FuseOptions) -> Self {
        FuseSpec::Options(options)
    }
}

impl From<u64> for FuseSpec {
    fn from(value: u64) -> Self {
        FuseSpec::Number(value)
    }
}

impl From<&str> for FuseSpec {
    fn from(value: &str) -> Self {
        FuseSpec::Hex(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_combine_set_flags() {
        let options = FuseOptions {
            cannot_unwrap: true,
            cannot_transfer: true,
            parent_cannot_control: true,
            ..Default::default()
        };
        assert_eq!(options.bits(), 1 | 4 | 64);
        assert_eq!(FuseOptions::default().bits(), CAN_DO_EVERYTHING);
    }

    #[test]
    fn every_fuse_is_a_distinct_single_bit() {
        let mut seen = CAN_DO_EVERYTHING;
        for fuse in Fuse::ALL {
            assert_eq!(fuse.bit().count_ones(), 1, "{fuse:?}");
            assert_eq!(seen & fuse.bit(), 0, "{fuse:?}");
            seen |= fuse.bit();
        }
        assert_eq!(seen, 0x7f);
    }
}
