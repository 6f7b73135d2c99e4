//! Human-readable and JSON rendering of decoded topics.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::hex;
use logtopic_codec::IndexedValue;
use serde::Serialize;
use std::fmt;

/// Displays an [`IndexedValue`] in a form that can be passed back as a position value.
///
/// Hashed inputs print as the bare hash.
pub struct IndexedValueDisplay<'a>(pub &'a IndexedValue);

impl fmt::Display for IndexedValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.0 {
            IndexedValue::Value(value) => value,
            IndexedValue::Hash(hash) => return write!(f, "{hash}"),
        };
        match value {
            DynSolValue::Address(inner) => write!(f, "{inner}"),
            DynSolValue::Function(inner) => write!(f, "{inner}"),
            DynSolValue::Bytes(inner) => f.write_str(&hex::encode_prefixed(inner)),
            DynSolValue::FixedBytes(word, size) => {
                let bytes = word.get(..*size).unwrap_or(word.as_slice());
                f.write_str(&hex::encode_prefixed(bytes))
            }
            DynSolValue::Uint(inner, _) => write!(f, "{inner}"),
            DynSolValue::Int(inner, _) => write!(f, "{inner}"),
            DynSolValue::String(inner) => write!(f, "{inner:?}"),
            DynSolValue::Bool(inner) => write!(f, "{inner}"),
            // aggregates are never decoded from a topic
            other => match other.as_type() {
                Some(ty) => write!(f, "<{ty}>"),
                None => f.write_str("<unknown>"),
            },
        }
    }
}

/// A decoded indexed input, as printed by `logtopic decode --json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// The decoded value, or the hash for hashed inputs.
    pub value: String,
    pub hashed: bool,
}

impl DecodedField {
    pub fn new(name: String, ty: String, value: &IndexedValue) -> Self {
        Self { name, ty, value: IndexedValueDisplay(value).to_string(), hashed: value.is_hash() }
    }
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.hashed {
            f.write_str(" (hash)")?;
        }
        Ok(())
    }
}
