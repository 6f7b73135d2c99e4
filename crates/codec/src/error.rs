use alloy_primitives::B256;

/// Result alias for topic encoding and decoding.
pub type Result<T, E = TopicError> = std::result::Result<T, E>;

/// Errors that can occur while encoding or decoding topics.
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    #[error("unsupported indexed type: {0}")]
    UnsupportedRuleType(String),
    #[error("topic/field count mismatch: {fields} fields, {topics} topics")]
    CountMismatch { fields: usize, topics: usize },
    #[error("non-indexed field `{0}` in topic reconstruction")]
    NonIndexedArgument(String),
    #[error("tuple type in topic reconstruction of field `{0}`")]
    UnsupportedAggregateType(String),
    #[error("improperly encoded function type, got {0}")]
    MalformedFunctionSelector(B256),
    #[error(transparent)]
    Decode(#[from] alloy_dyn_abi::Error),
    #[error("no field named `{0}` to store the reconstructed topic in")]
    UnknownField(String),
    #[error("cannot convert reconstructed value {got} into {expected}")]
    ValueMismatch { expected: &'static str, got: String },
    #[error("too many topic positions: got {0}, a log filter holds at most 4")]
    TooManyPositions(usize),
    #[error("no event signature in log topics")]
    MissingSignature,
    #[error("event signature mismatch: expected {expected}, got {got}")]
    SignatureMismatch { expected: B256, got: B256 },
}

impl TopicError {
    /// Creates an [`UnsupportedRuleType`](Self::UnsupportedRuleType) error for the given type name.
    pub fn unsupported(ty: impl Into<String>) -> Self {
        Self::UnsupportedRuleType(ty.into())
    }

    /// Returns `true` if the error was raised by the ABI decoder rather than by topic validation.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
