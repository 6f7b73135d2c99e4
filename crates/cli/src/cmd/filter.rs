use crate::{
    cmd::build_topics,
    utils::{Position, get_event},
};
use alloy_primitives::Address;
use alloy_rpc_types_eth::{BlockNumberOrTag, Filter};
use clap::Parser;
use eyre::Result;
use logtopic_config::Config;

/// CLI arguments for `logtopic filter`.
#[derive(Clone, Debug, Parser)]
pub struct FilterArgs {
    /// The event to filter for.
    ///
    /// Its selector becomes the first topic, and position values default to the type of the
    /// matching indexed input.
    #[arg(long, short, value_name = "SIG")]
    pub event: Option<String>,

    /// Only match logs emitted by these contracts.
    #[arg(long, short, value_name = "ADDRESS")]
    pub address: Vec<Address>,

    /// The block to start matching from.
    #[arg(long, value_name = "BLOCK")]
    pub from_block: Option<BlockNumberOrTag>,

    /// The block to stop matching at.
    #[arg(long, value_name = "BLOCK")]
    pub to_block: Option<BlockNumberOrTag>,

    /// The topic positions, in order: `TYPE=V1|V2|...`, or `_` to match any topic.
    #[arg(value_name = "POSITION")]
    pub positions: Vec<Position>,
}

impl FilterArgs {
    /// Builds the `eth_getLogs` filter.
    pub fn filter(&self) -> Result<Filter> {
        let event = self.event.as_deref().map(get_event).transpose()?;
        let topics = build_topics(event.as_ref(), &self.positions)?;

        let mut filter = Filter::new();
        if !self.address.is_empty() {
            filter = filter.address(self.address.clone());
        }
        if let Some(from_block) = self.from_block {
            filter = filter.from_block(from_block);
        }
        if let Some(to_block) = self.to_block {
            filter = filter.to_block(to_block);
        }
        trace!(?filter, "built log filter");
        Ok(topics.apply_to(filter)?)
    }

    /// Prints the filter as JSON, pretty-printed unless `json` is set.
    pub fn output(&self, config: &Config) -> Result<String> {
        let filter = self.filter()?;
        if config.json {
            Ok(serde_json::to_string(&filter)?)
        } else {
            Ok(serde_json::to_string_pretty(&filter)?)
        }
    }
}
