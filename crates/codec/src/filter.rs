//! Conversion of topic sets into `eth_getLogs` filters.

use crate::{MAX_TOPICS, Result, TopicError, TopicSet};
use alloy_rpc_types_eth::Filter;

impl TopicSet {
    /// Returns a filter matching any block and address with these topics.
    pub fn to_filter(&self) -> Result<Filter> {
        self.apply_to(Filter::new())
    }

    /// Replaces the topics of `filter` with these topics.
    ///
    /// Position `i` becomes topic slot `i`; empty positions and slots past the end of the set
    /// match anything.
    pub fn apply_to(&self, mut filter: Filter) -> Result<Filter> {
        if self.len() > MAX_TOPICS {
            return Err(TopicError::TooManyPositions(self.len()));
        }
        filter.topics = Default::default();
        for (slot, position) in filter.topics.iter_mut().zip(self) {
            *slot = position.clone().into();
        }
        Ok(filter)
    }
}
