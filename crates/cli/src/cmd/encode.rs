use crate::{
    cmd::build_topics,
    utils::{Position, get_event},
};
use clap::Parser;
use eyre::Result;
use itertools::Itertools;
use logtopic_codec::TopicSet;
use logtopic_config::Config;

/// CLI arguments for `logtopic encode`.
#[derive(Clone, Debug, Parser)]
pub struct EncodeArgs {
    /// The event the positions refer to.
    ///
    /// Its selector becomes the first topic, and position values default to the type of the
    /// matching indexed input.
    #[arg(long, short, value_name = "SIG")]
    pub event: Option<String>,

    /// The topic positions, in order: `TYPE=V1|V2|...`, or `_` to match any topic.
    #[arg(value_name = "POSITION")]
    pub positions: Vec<Position>,
}

impl EncodeArgs {
    pub fn topics(&self) -> Result<TopicSet> {
        let event = self.event.as_deref().map(get_event).transpose()?;
        build_topics(event.as_ref(), &self.positions)
    }

    pub fn output(&self, config: &Config) -> Result<String> {
        let topics = self.topics()?;
        if config.json {
            return Ok(serde_json::to_string_pretty(&topics)?);
        }
        Ok(topics
            .iter()
            .enumerate()
            .map(|(i, position)| {
                if position.is_empty() {
                    format!("{i}: {}", Position::WILDCARD)
                } else {
                    format!("{i}: {}", position.iter().join("|"))
                }
            })
            .join("\n"))
    }
}
