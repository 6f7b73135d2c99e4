//! # logtopic-config
//!
//! Configuration of the `logtopic` command-line tool.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults ([`Config::default`])
//! 2. the `logtopic.toml` file in the working directory
//! 3. `LOGTOPIC_` prefixed environment variables, e.g. `LOGTOPIC_JSON=true`
//!
//! Command-line flags are applied on top by the binary.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

mod error;
pub use error::{ConfigError, ExtractConfigError};

pub use figment;

/// How decoded argument names are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStyle {
    /// The name as written in the event signature, e.g. `tokenId`.
    #[default]
    Abi,
    /// The name converted to a Rust field name, e.g. `token_id`.
    Snake,
}

impl FromStr for FieldStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abi" => Ok(Self::Abi),
            "snake" | "snake_case" => Ok(Self::Snake),
            _ => Err(ConfigError::UnknownFieldStyle(s.to_string())),
        }
    }
}

impl fmt::Display for FieldStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Abi => "abi",
            Self::Snake => "snake",
        })
    }
}

/// Settings of the `logtopic` tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print results as JSON instead of human-readable text.
    pub json: bool,
    /// Require the first topic of a non-anonymous log to be the event selector.
    ///
    /// When disabled, the first topic is skipped without being compared.
    pub check_signature: bool,
    /// How decoded argument names are printed.
    pub field_style: FieldStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self { json: false, check_signature: true, field_style: FieldStyle::Abi }
    }
}

impl Config {
    /// The name of the configuration file.
    pub const FILE_NAME: &'static str = "logtopic.toml";

    /// The prefix of the environment variables read into the configuration.
    pub const ENV_PREFIX: &'static str = "LOGTOPIC_";

    /// Environment variables sharing the prefix that are not settings.
    const IGNORED_ENV: &'static [&'static str] = &["DEBUG"];

    /// Loads the configuration from the current working directory.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment())
    }

    /// Loads the configuration from the `logtopic.toml` file in `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment_with_root(root))
    }

    /// Attempts to extract a `Config` from `provider`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logtopic_config::{
    ///     Config,
    ///     figment::providers::{Format, Toml},
    /// };
    ///
    /// // settings in `other.toml` take precedence over everything else
    /// let figment = Config::figment().merge(Toml::file("other.toml"));
    /// let config = Config::from_provider(figment).unwrap();
    /// ```
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract::<Self>().map_err(ExtractConfigError::new)
    }

    /// Returns the default figment, reading the configuration file from the working directory.
    pub fn figment() -> Figment {
        Self::figment_with_root(".")
    }

    /// Returns the default figment, reading the configuration file from `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        Figment::from(Self::default())
            .merge(Toml::file(Self::config_path(root)))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(Self::IGNORED_ENV))
    }

    /// Returns the path of the configuration file in `root`.
    pub fn config_path(root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(Self::FILE_NAME)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("logtopic defaults")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}
