use crate::{fmt::DecodedField, utils::get_event};
use alloy_json_abi::{Event, EventParam};
use alloy_primitives::B256;
use clap::Parser;
use eyre::Result;
use itertools::Itertools;
use logtopic_codec::{field_name, indexed_inputs, log_indexed_topics, parse_topics_with};
use logtopic_config::{Config, FieldStyle};

/// CLI arguments for `logtopic decode`.
#[derive(Clone, Debug, Parser)]
pub struct DecodeArgs {
    /// The event that emitted the log.
    #[arg(long, short, value_name = "SIG")]
    pub event: String,

    /// The topics of the log, starting with the event selector unless the event is anonymous.
    #[arg(value_name = "TOPIC")]
    pub topics: Vec<B256>,
}

impl DecodeArgs {
    /// Reconstructs the indexed inputs of the log, in declaration order.
    pub fn fields(&self, config: &Config) -> Result<Vec<DecodedField>> {
        let event = get_event(&self.event)?;
        let topics = indexed_topics(&event, &self.topics, config.check_signature)?;

        let inputs = indexed_inputs(&event);
        let mut fields = Vec::with_capacity(inputs.len());
        parse_topics_with(&inputs, topics, |param, value| {
            let name = display_name(param, fields.len(), config.field_style);
            fields.push(DecodedField::new(name, param.ty.clone(), &value));
            Ok(())
        })?;
        Ok(fields)
    }

    pub fn output(&self, config: &Config) -> Result<String> {
        let fields = self.fields(config)?;
        if config.json {
            return Ok(serde_json::to_string_pretty(&fields)?);
        }
        Ok(fields.iter().join("\n"))
    }
}

/// Returns the topics holding indexed inputs, verifying the selector if `check_signature` is set.
fn indexed_topics<'a>(
    event: &Event,
    topics: &'a [B256],
    check_signature: bool,
) -> Result<&'a [B256]> {
    if check_signature {
        return Ok(log_indexed_topics(event, topics)?);
    }
    if event.anonymous {
        return Ok(topics);
    }
    Ok(topics.get(1..).unwrap_or_default())
}

fn display_name(param: &EventParam, index: usize, style: FieldStyle) -> String {
    match style {
        FieldStyle::Abi if !param.name.is_empty() => param.name.clone(),
        _ => field_name(&param.name, index),
    }
}
