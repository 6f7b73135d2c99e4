//! Destinations for reconstructed indexed fields.

use crate::{IndexedValue, Result};
use heck::ToSnakeCase;

/// A struct whose fields can be populated from indexed event topics.
///
/// Implementors match on the field name and store the value, returning
/// [`TopicError::UnknownField`](crate::TopicError::UnknownField) for names they do not know.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use logtopic_codec::{IndexedFields, IndexedValue, Result, TopicError};
///
/// #[derive(Default)]
/// struct Transfer {
///     from: Address,
///     memo_hash: B256,
/// }
///
/// impl IndexedFields for Transfer {
///     fn set_field(&mut self, name: &str, value: IndexedValue) -> Result<()> {
///         match name {
///             "from" => self.from = value.try_into()?,
///             "memo_hash" => self.memo_hash = value.try_into()?,
///             _ => return Err(TopicError::UnknownField(name.to_string())),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait IndexedFields {
    /// Stores `value` in the field called `name`.
    fn set_field(&mut self, name: &str, value: IndexedValue) -> Result<()>;
}

impl<T: IndexedFields + ?Sized> IndexedFields for &mut T {
    fn set_field(&mut self, name: &str, value: IndexedValue) -> Result<()> {
        (**self).set_field(name, value)
    }
}

impl<T: IndexedFields + ?Sized> IndexedFields for Box<T> {
    fn set_field(&mut self, name: &str, value: IndexedValue) -> Result<()> {
        (**self).set_field(name, value)
    }
}

/// Converts an ABI argument name into the name of the Rust field holding it.
///
/// `memoHash` and `MemoHash` both become `memo_hash`. Unnamed arguments are called `arg{index}`,
/// where `index` is the position of the argument among the decoded fields.
pub fn field_name(arg_name: &str, index: usize) -> String {
    if arg_name.is_empty() { format!("arg{index}") } else { arg_name.to_snake_case() }
}
