//! Subcommands of the `logtopic` binary.

use crate::utils::Position;
use alloy_dyn_abi::Specifier;
use alloy_json_abi::Event;
use eyre::{Result, WrapErr};
use logtopic_codec::{TopicRule, TopicSet, event_topics, indexed_inputs, make_topics};

pub mod decode;
pub mod encode;
pub mod filter;

/// Builds filter topics from command-line positions.
///
/// With an event, positions are matched to its indexed inputs in order, values default to the
/// input's type and the selector is prepended unless the event is anonymous.
pub fn build_topics(event: Option<&Event>, positions: &[Position]) -> Result<TopicSet> {
    let Some(event) = event else {
        let query: Vec<Vec<TopicRule>> =
            positions.iter().map(|position| position.rules(None)).collect::<Result<_>>()?;
        return Ok(make_topics(query)?);
    };

    let inputs = indexed_inputs(event);
    eyre::ensure!(
        positions.len() <= inputs.len(),
        "event `{}` has {} indexed inputs, got {} positions",
        event.name,
        inputs.len(),
        positions.len()
    );
    let query = positions
        .iter()
        .zip(&inputs)
        .map(|(position, param)| {
            let ty = param.resolve()?;
            position
                .rules(Some(&ty))
                .wrap_err_with(|| format!("invalid position for `{}`", param.name))
        })
        .collect::<Result<Vec<Vec<TopicRule>>>>()?;
    Ok(event_topics(event, query)?)
}
