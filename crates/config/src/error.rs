//! Configuration extraction errors.

use std::{collections::HashSet, error::Error, fmt};

/// Errors raised while loading the configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Extract(#[from] ExtractConfigError),
    #[error("unknown field style `{0}`, expected `abi` or `snake`")]
    UnknownFieldStyle(String),
}

/// Represents a failed attempt to extract a [`Config`](crate::Config) from a `Figment`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error.
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the number of distinct settings that failed to extract.
    pub fn count(&self) -> usize {
        self.error.count()
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "failed to extract logtopic config:")?;
        let mut seen = HashSet::with_capacity(self.error.count());
        for err in self.error.clone() {
            let mut line = err.to_string();
            if !err.path.is_empty() {
                line.push_str(&format!(" for setting `{}`", err.path.join(".")));
            }
            if seen.insert(line.clone()) {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}
