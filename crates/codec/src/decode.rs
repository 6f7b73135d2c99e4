//! Reconstruction of indexed event fields from log topics.
//!
//! Static types are decoded back into their value. Dynamic types are only stored as the hash of
//! their encoding, so the best we can do for them is to hand back the topic itself.

use crate::{IndexedFields, Result, TopicError, sink::field_name};
use alloy_dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy_json_abi::EventParam;
use alloy_primitives::{Address, B256, FixedBytes, Function, I256, U256};
use std::collections::HashMap;

/// A value reconstructed from a single topic.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexedValue {
    /// The decoded value of a static type or function reference.
    Value(DynSolValue),
    /// The topic of a dynamic type: the hash of the value, not the value itself.
    Hash(B256),
}

impl IndexedValue {
    /// Returns the decoded value, if the field was not hashed.
    pub fn as_value(&self) -> Option<&DynSolValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Hash(_) => None,
        }
    }

    /// Returns the hash, if the field was hashed.
    pub fn as_hash(&self) -> Option<B256> {
        match self {
            Self::Value(_) => None,
            Self::Hash(hash) => Some(*hash),
        }
    }

    /// Returns `true` if the field was hashed.
    pub fn is_hash(&self) -> bool {
        matches!(self, Self::Hash(_))
    }

    pub fn into_value(self) -> Option<DynSolValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Hash(_) => None,
        }
    }
}

impl From<DynSolValue> for IndexedValue {
    fn from(value: DynSolValue) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_try_from_indexed {
    ($($ty:ty: $name:literal => $pat:pat => $out:expr),* $(,)?) => {
        $(
            impl TryFrom<IndexedValue> for $ty {
                type Error = TopicError;

                fn try_from(value: IndexedValue) -> Result<Self> {
                    match value {
                        $pat => Ok($out),
                        other => Err(TopicError::ValueMismatch {
                            expected: $name,
                            got: format!("{other:?}"),
                        }),
                    }
                }
            }
        )*
    };
}

impl_try_from_indexed! {
    Address: "address" => IndexedValue::Value(DynSolValue::Address(address)) => address,
    bool: "bool" => IndexedValue::Value(DynSolValue::Bool(value)) => value,
    U256: "uint" => IndexedValue::Value(DynSolValue::Uint(value, _)) => value,
    I256: "int" => IndexedValue::Value(DynSolValue::Int(value, _)) => value,
    Function: "function" => IndexedValue::Value(DynSolValue::Function(function)) => function,
    B256: "bytes32 or hash" =>
        IndexedValue::Hash(word) | IndexedValue::Value(DynSolValue::FixedBytes(word, 32)) => word,
}

/// Reconstructs a single indexed field from its topic.
pub fn decode_topic(param: &EventParam, topic: B256) -> Result<IndexedValue> {
    if !param.indexed {
        return Err(TopicError::NonIndexedArgument(param.name.clone()));
    }
    let ty = param.resolve()?;
    match ty {
        DynSolType::Tuple(_) | DynSolType::CustomStruct { .. } => {
            Err(TopicError::UnsupportedAggregateType(param.name.clone()))
        }
        DynSolType::String
        | DynSolType::Bytes
        | DynSolType::Array(_)
        | DynSolType::FixedArray(..) => Ok(IndexedValue::Hash(topic)),
        DynSolType::Function => {
            let garbage = FixedBytes::<8>::from_slice(&topic[..8]);
            if !garbage.is_zero() {
                return Err(TopicError::MalformedFunctionSelector(topic));
            }
            Ok(IndexedValue::Value(DynSolValue::Function(Function::from_slice(&topic[8..]))))
        }
        ty => Ok(IndexedValue::Value(ty.abi_decode(topic.as_slice())?)),
    }
}

/// Reconstructs the indexed fields from their topics, handing every value to `setter`.
///
/// `fields` and `topics` are paired up in order. Nothing is delivered if the counts differ;
/// otherwise values are delivered one by one until the first failure.
pub fn parse_topics_with<F>(fields: &[EventParam], topics: &[B256], mut setter: F) -> Result<()>
where
    F: FnMut(&EventParam, IndexedValue) -> Result<()>,
{
    if fields.len() != topics.len() {
        return Err(TopicError::CountMismatch { fields: fields.len(), topics: topics.len() });
    }
    for (param, topic) in fields.iter().zip(topics) {
        let value = decode_topic(param, *topic)?;
        trace!(field = %param.name, hashed = value.is_hash(), "reconstructed indexed field");
        setter(param, value)?;
    }
    Ok(())
}

/// Reconstructs the indexed fields into the fields of `out`.
///
/// Argument names are converted with [`field_name`] before being handed to
/// [`IndexedFields::set_field`].
pub fn parse_topics<T>(out: &mut T, fields: &[EventParam], topics: &[B256]) -> Result<()>
where
    T: IndexedFields + ?Sized,
{
    let mut index = 0;
    parse_topics_with(fields, topics, |param, value| {
        let name = field_name(&param.name, index);
        index += 1;
        out.set_field(&name, value)
    })
}

/// Reconstructs the indexed fields into `out`, keyed by argument name.
pub fn parse_topics_into_map(
    out: &mut HashMap<String, IndexedValue>,
    fields: &[EventParam],
    topics: &[B256],
) -> Result<()> {
    parse_topics_with(fields, topics, |param, value| {
        out.insert(param.name.clone(), value);
        Ok(())
    })
}
