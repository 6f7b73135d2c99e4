//! Candidate values for a single topic position.

use crate::{Result, TOPIC_LEN, TopicError};
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, B256, Bytes, I256, U256, keccak256};

/// A single candidate value for a topic position of a log filter.
///
/// Every variant maps onto exactly one 32-byte topic, see [`TopicRule::encode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopicRule {
    /// A pre-computed topic, used verbatim.
    Hash(B256),
    /// A 20-byte address, stored in the low-order bytes.
    Address(Address),
    /// An unsigned integer of any width up to 256 bits.
    Uint(U256),
    /// A signed integer of any width up to 256 bits.
    ///
    /// Only the magnitude is encoded, the sign of negative values is lost.
    Int(I256),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    /// A string, stored as the `keccak256` hash of its UTF-8 bytes.
    String(String),
    /// A variable-length byte sequence, stored as its `keccak256` hash.
    Bytes(Bytes),
    /// A fixed-size byte array of at most 32 bytes, stored left-aligned.
    FixedBytes(Bytes),
}

impl TopicRule {
    /// Creates a fixed-size byte array rule from a slice.
    ///
    /// The length is validated when the rule is encoded.
    pub fn fixed_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::FixedBytes(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Returns the name of the type this rule stands for, as used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Hash(_) => "bytes32".to_string(),
            Self::Address(_) => "address".to_string(),
            Self::Uint(_) => "uint256".to_string(),
            Self::Int(_) => "int256".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::I8(_) => "int8".to_string(),
            Self::I16(_) => "int16".to_string(),
            Self::I32(_) => "int32".to_string(),
            Self::I64(_) => "int64".to_string(),
            Self::U8(_) => "uint8".to_string(),
            Self::U16(_) => "uint16".to_string(),
            Self::U32(_) => "uint32".to_string(),
            Self::U64(_) => "uint64".to_string(),
            Self::String(_) => "string".to_string(),
            Self::Bytes(_) => "bytes".to_string(),
            Self::FixedBytes(bytes) => format!("bytes{}", bytes.len()),
        }
    }

    /// Encodes the rule into its canonical topic.
    ///
    /// Integers are right-aligned, fixed byte arrays are left-aligned and strings and byte
    /// sequences are replaced by their hash.
    pub fn encode(&self) -> Result<B256> {
        let topic = match self {
            Self::Hash(hash) => *hash,
            Self::Address(address) => address.into_word(),
            Self::Uint(value) => magnitude_word(*value),
            Self::Int(value) => magnitude_word(value.unsigned_abs()),
            Self::Bool(value) => B256::with_last_byte(*value as u8),
            Self::I8(value) => magnitude_word(U256::from(value.unsigned_abs())),
            Self::I16(value) => magnitude_word(U256::from(value.unsigned_abs())),
            Self::I32(value) => magnitude_word(U256::from(value.unsigned_abs())),
            Self::I64(value) => magnitude_word(U256::from(value.unsigned_abs())),
            Self::U8(value) => magnitude_word(U256::from(*value)),
            Self::U16(value) => magnitude_word(U256::from(*value)),
            Self::U32(value) => magnitude_word(U256::from(*value)),
            Self::U64(value) => magnitude_word(U256::from(*value)),
            Self::String(value) => keccak256(value.as_bytes()),
            Self::Bytes(value) => keccak256(value),
            Self::FixedBytes(value) => {
                if value.len() > TOPIC_LEN {
                    return Err(TopicError::unsupported(self.type_name()));
                }
                let mut topic = B256::ZERO;
                topic[..value.len()].copy_from_slice(value);
                topic
            }
        };
        Ok(topic)
    }
}

/// Big-endian magnitude, right-aligned in a zeroed word.
fn magnitude_word(value: U256) -> B256 {
    B256::new(value.to_be_bytes())
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for TopicRule {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    B256 => Hash,
    Address => Address,
    U256 => Uint,
    I256 => Int,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
    Bytes => Bytes,
}

impl From<&str> for TopicRule {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for TopicRule {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<&[u8]> for TopicRule {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<[u8; N]> for TopicRule {
    fn from(value: [u8; N]) -> Self {
        Self::fixed_bytes(value)
    }
}

impl TryFrom<DynSolValue> for TopicRule {
    type Error = TopicError;

    /// Maps a runtime ABI value onto a rule.
    ///
    /// Aggregates and function references have no topic encoding and are rejected.
    fn try_from(value: DynSolValue) -> Result<Self> {
        let rule = match value {
            DynSolValue::Bool(value) => Self::Bool(value),
            DynSolValue::Int(value, _) => Self::Int(value),
            DynSolValue::Uint(value, _) => Self::Uint(value),
            DynSolValue::FixedBytes(word, size) => match word.get(..size) {
                Some(bytes) => Self::fixed_bytes(bytes),
                None => return Err(TopicError::UnsupportedRuleType(format!("bytes{size}"))),
            },
            DynSolValue::Address(address) => Self::Address(address),
            DynSolValue::String(value) => Self::String(value),
            DynSolValue::Bytes(value) => Self::Bytes(value.into()),
            other => {
                let ty = other.as_type().map_or_else(|| "unknown".to_string(), |ty| ty.to_string());
                return Err(TopicError::UnsupportedRuleType(ty));
            }
        };
        Ok(rule)
    }
}
