use crate::cmd::{decode::DecodeArgs, encode::EncodeArgs, filter::FilterArgs};
use clap::{Parser, Subcommand, ValueHint};
use eyre::Result;
use logtopic_config::{Config, FieldStyle};
use std::path::PathBuf;

/// Build event-log filters and decode indexed topics.
#[derive(Parser)]
#[command(name = "logtopic", version, next_display_order = None)]
pub struct Logtopic {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: LogtopicSubcommand,
}

impl Logtopic {
    pub fn run(self) -> Result<()> {
        let config = self.global.load_config()?;
        println!("{}", self.cmd.output(&config)?);
        Ok(())
    }
}

/// Options shared by all subcommands. They override the configuration file.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct GlobalArgs {
    /// Print the output as JSON. `filter` always prints JSON, this makes it compact.
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not check the event selector when decoding.
    #[arg(long, global = true)]
    pub no_check_signature: bool,

    /// How decoded argument names are printed.
    #[arg(long, global = true, value_name = "abi|snake")]
    pub field_style: Option<FieldStyle>,

    /// The directory holding the `logtopic.toml` configuration file.
    #[arg(long, global = true, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,
}

impl GlobalArgs {
    /// Loads the configuration and applies the command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.root {
            Some(root) => Config::load_with_root(root)?,
            None => Config::load()?,
        };
        Ok(self.apply(config))
    }

    /// Applies the command-line overrides to `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.json {
            config.json = true;
        }
        if self.no_check_signature {
            config.check_signature = false;
        }
        if let Some(style) = self.field_style {
            config.field_style = style;
        }
        config
    }
}

#[derive(Subcommand)]
pub enum LogtopicSubcommand {
    /// Encode topic positions into the topics of a log filter.
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Decode the indexed inputs of a log from its topics.
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Build an `eth_getLogs` filter, printed as JSON.
    #[command(visible_alias = "f")]
    Filter(FilterArgs),
}

impl LogtopicSubcommand {
    /// Runs the subcommand, returning what it prints.
    pub fn output(&self, config: &Config) -> Result<String> {
        match self {
            Self::Encode(cmd) => cmd.output(config),
            Self::Decode(cmd) => cmd.output(config),
            Self::Filter(cmd) => cmd.output(config),
        }
    }
}
