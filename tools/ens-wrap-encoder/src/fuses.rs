//! Fuse specification normalisation.

use ens_wrap_types::{FuseOptions, FuseSpec};
use serde_json::Value;

use crate::errors::WrapError;

/// Canonical fuse string for "no fuses".
pub const NO_FUSES: &str = "0";

fn parse_hex(raw: &str) -> Result<u64, WrapError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(WrapError::InvalidFuseValue(raw.to_string()));
    }
    u64::from_str_radix(digits, 16).map_err(|_| WrapError::InvalidFuseValue(raw.to_string()))
}

/// Normalise a fuse specification to a lowercase hex bitmask without prefix.
pub fn decode_fuses(spec: Option<&FuseSpec>) -> Result<String, WrapError> {
    let bits = match spec {
        Some(FuseSpec::Options(options)) => u64::from(options.bits()),
        Some(FuseSpec::Number(value)) => *value,
        Some(FuseSpec::Hex(raw)) => parse_hex(raw)?,
        None => return Ok(NO_FUSES.to_string()),
    };
    Ok(format!("{bits:x}"))
}

/// Parse a canonical fuse string into the `uint32` the NameWrapper stores.
pub fn fuse_bits(decoded: &str) -> Result<u32, WrapError> {
    let value = parse_hex(decoded)?;
    u32::try_from(value).map_err(|_| WrapError::InvalidFuseValue(decoded.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Map loosely typed JSON input onto a [`FuseSpec`]; `null` means no fuses.
pub fn fuse_spec_from_json(value: Value) -> Result<Option<FuseSpec>, WrapError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => {
            let options: FuseOptions = serde_json::from_value(value)
                .map_err(|e| WrapError::InvalidFuseValue(e.to_string()))?;
            Ok(Some(FuseSpec::Options(options)))
        }
        Value::Number(ref n) => n
            .as_u64()
            .map(|v| Some(FuseSpec::Number(v)))
            .ok_or_else(|| WrapError::InvalidFuseValue(n.to_string())),
        Value::String(s) => Ok(Some(FuseSpec::Hex(s))),
        other => Err(WrapError::InvalidFuseType(json_type_name(&other))),
    }
}
