//! Event-aware wrappers around the topic codec.
//!
//! Non-anonymous events use their selector as the first topic, which is handled here so callers
//! only deal with the event's own indexed inputs.

use crate::{
    IndexedFields, IndexedValue, Result, TopicError, TopicRule, TopicSet, make_topics,
    parse_topics, parse_topics_into_map,
};
use alloy_json_abi::{Event, EventParam};
use alloy_primitives::{B256, LogData};
use std::collections::HashMap;

/// Returns the indexed inputs of the event, in declaration order.
pub fn indexed_inputs(event: &Event) -> Vec<EventParam> {
    event.inputs.iter().filter(|param| param.indexed).cloned().collect()
}

/// Builds the topics of a log filter for the given event.
///
/// The query covers the indexed inputs only. Unless the event is anonymous, its selector is
/// prepended as the first position.
pub fn event_topics<Q, P>(event: &Event, query: Q) -> Result<TopicSet>
where
    Q: IntoIterator<Item = P>,
    P: IntoIterator,
    P::Item: Into<TopicRule>,
{
    let mut topics = make_topics(query)?;
    if !event.anonymous {
        topics.prepend(event.selector());
    }
    debug!(event = %event.name, positions = topics.len(), "built event filter topics");
    Ok(topics)
}

/// Returns the topics holding the indexed inputs of the event.
///
/// For non-anonymous events, the first topic must be the event selector and is skipped.
pub fn log_indexed_topics<'a>(event: &Event, topics: &'a [B256]) -> Result<&'a [B256]> {
    if event.anonymous {
        return Ok(topics);
    }
    let Some((&first, rest)) = topics.split_first() else {
        return Err(TopicError::MissingSignature);
    };
    let expected = event.selector();
    if first != expected {
        return Err(TopicError::SignatureMismatch { expected, got: first });
    }
    Ok(rest)
}

/// Unpacks the indexed inputs of a log emitted by `event` into a map keyed by input name.
pub fn unpack_log_into_map(event: &Event, log: &LogData) -> Result<HashMap<String, IndexedValue>> {
    let topics = log_indexed_topics(event, log.topics())?;
    let mut out = HashMap::with_capacity(topics.len());
    parse_topics_into_map(&mut out, &indexed_inputs(event), topics)?;
    Ok(out)
}

/// Unpacks the indexed inputs of a log emitted by `event` into the fields of `out`.
pub fn unpack_log<T>(out: &mut T, event: &Event, log: &LogData) -> Result<()>
where
    T: IndexedFields + ?Sized,
{
    let topics = log_indexed_topics(event, log.topics())?;
    parse_topics(out, &indexed_inputs(event), topics)
}
