//! Name segmentation, label hashing and DNS wire encoding.

use alloy_primitives::{keccak256, FixedBytes};

use crate::errors::WrapError;

/// Longest label the NameWrapper can store (one length byte in DNS wire format).
pub const MAX_LABEL_BYTES: usize = 255;

/// Top-level suffix whose second-level names go through the registrar.
pub const ETH_TLD: &str = "eth";

/// Which wrap path a name takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapTarget<'a> {
    /// `<label>.eth`: transferred from the base registrar with fuses and expiry.
    SuffixWrap { label: &'a str },
    /// Anything else: wrapped through `NameWrapper.wrap`.
    GenericWrap { name: &'a str },
}

impl WrapTarget<'_> {
    pub fn is_suffix(&self) -> bool {
        matches!(self, WrapTarget::SuffixWrap { .. })
    }
}

fn check_label_length(label: &str) -> Result<(), WrapError> {
    let length = label.len();
    if length > MAX_LABEL_BYTES {
        return Err(WrapError::LabelLength {
            label: label.to_string(),
            length,
        });
    }
    Ok(())
}

/// Split `name` on `.`, rejecting a first label longer than [`MAX_LABEL_BYTES`].
pub fn split_labels(name: &str) -> Result<Vec<&str>, WrapError> {
    let labels: Vec<&str> = name.split('.').collect();
    // `split` always yields at least one item.
    check_label_length(labels[0])?;
    Ok(labels)
}

/// Pick the wrap path from the label shape.
pub fn classify<'a>(name: &'a str, labels: &[&'a str]) -> WrapTarget<'a> {
    match labels {
        [label, tld] if *tld == ETH_TLD => WrapTarget::SuffixWrap { label: *label },
        _ => WrapTarget::GenericWrap { name },
    }
}

/// keccak256 of the UTF-8 label bytes.
pub fn label_hash(label: &str) -> FixedBytes<32> {
    keccak256(label.as_bytes())
}

/// DNS wire encoding used by the NameWrapper: length-prefixed labels and a zero terminator.
pub fn dns_encode_name(name: &str) -> Result<Vec<u8>, WrapError> {
    let name = name.strip_prefix('.').unwrap_or(name);
    let name = name.strip_suffix('.').unwrap_or(name);

    let mut buf = Vec::with_capacity(name.len() + 2);
    if !name.is_empty() {
        for label in name.split('.') {
            check_label_length(label)?;
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn first_label_at_limit_is_accepted() {
        let name = format!("{}.eth", "a".repeat(MAX_LABEL_BYTES));
        let labels = split_labels(&name).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].len(), MAX_LABEL_BYTES);
    }

    #[test]
    fn first_label_one_byte_over_is_rejected() {
        let name = format!("{}.eth", "a".repeat(MAX_LABEL_BYTES + 1));
        let err = split_labels(&name).unwrap_err();
        assert!(matches!(err, WrapError::LabelLength { length: 256, .. }));
    }

    #[test]
    fn label_length_counts_utf8_bytes() {
        // 'é' is two bytes, so 128 of them is 256 bytes.
        let name = format!("{}.eth", "é".repeat(128));
        assert!(matches!(
            split_labels(&name),
            Err(WrapError::LabelLength { length: 256, .. })
        ));
    }

    #[test]
    fn later_labels_are_not_length_checked() {
        let name = format!("sub.{}.eth", "a".repeat(300));
        assert_eq!(split_labels(&name).unwrap().len(), 3);
    }

    #[test]
    fn classify_names() {
        let cases = [
            ("vitalik.eth", true),
            ("sub.vitalik.eth", false),
            ("mydao.xyz", false),
            ("eth", false),
            ("vitalik.ETH", false),
        ];
        for (name, suffix) in cases {
            let labels = split_labels(name).unwrap();
            assert_eq!(classify(name, &labels).is_suffix(), suffix, "{name}");
        }
        let labels = split_labels("vitalik.eth").unwrap();
        assert_eq!(
            classify("vitalik.eth", &labels),
            WrapTarget::SuffixWrap { label: "vitalik" }
        );
    }

    #[test]
    fn label_hash_matches_known_value() {
        // keccak256("eth")
        assert_eq!(
            label_hash("eth"),
            b256!("4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0")
        );
    }

    #[test]
    fn dns_encoding() {
        assert_eq!(
            dns_encode_name("mydao.xyz").unwrap(),
            b"\x05mydao\x03xyz\x00".to_vec()
        );
        assert_eq!(dns_encode_name("a.b.").unwrap(), b"\x01a\x01b\x00".to_vec());
        assert_eq!(dns_encode_name("").unwrap(), vec![0u8]);
    }

    #[test]
    fn dns_encoding_rejects_oversized_labels() {
        let name = format!("sub.{}.xyz", "a".repeat(256));
        assert!(matches!(
            dns_encode_name(&name),
            Err(WrapError::LabelLength { length: 256, .. })
        ));
    }
}
