use alloy_dyn_abi::DynSolType;
use eyre::{Result, WrapErr};
use logtopic_codec::TopicRule;
use std::{fmt, str::FromStr};

/// One topic position of a query, as written on the command line.
///
/// `_` matches any topic. Otherwise the position lists the accepted values separated by `|`,
/// optionally prefixed by their Solidity type: `address=0xab..|0xcd..`. The type may be left out
/// when it is known from the event signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    Any,
    Values { ty: Option<String>, values: Vec<String> },
}

impl Position {
    pub const WILDCARD: &'static str = "_";

    /// Converts the position into topic rules.
    ///
    /// Values are coerced to the position's own type, falling back to `default_ty`.
    pub fn rules(&self, default_ty: Option<&DynSolType>) -> Result<Vec<TopicRule>> {
        let Self::Values { ty, values } = self else { return Ok(Vec::new()) };
        let ty = match (ty, default_ty) {
            (Some(ty), _) => DynSolType::parse(ty)?,
            (None, Some(ty)) => ty.clone(),
            (None, None) => {
                eyre::bail!("no type for topic values `{}`, use TYPE={0}", values.join("|"))
            }
        };
        values.iter().map(|value| coerce_rule(&ty, value)).collect()
    }
}

impl FromStr for Position {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == Self::WILDCARD {
            return Ok(Self::Any);
        }
        let (ty, values) = match s.split_once('=') {
            Some((ty, values)) if DynSolType::parse(ty.trim()).is_ok() => {
                (Some(ty.trim().to_string()), values)
            }
            _ => (None, s),
        };
        Ok(Self::Values { ty, values: values.split('|').map(str::to_string).collect() })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(Self::WILDCARD),
            Self::Values { ty: Some(ty), values } => write!(f, "{ty}={}", values.join("|")),
            Self::Values { ty: None, values } => f.write_str(&values.join("|")),
        }
    }
}

/// Coerces a single command-line value into a topic rule of type `ty`.
fn coerce_rule(ty: &DynSolType, value: &str) -> Result<TopicRule> {
    let value = ty.coerce_str(value).wrap_err_with(|| format!("invalid {ty} value `{value}`"))?;
    Ok(TopicRule::try_from(value)?)
}
