//! Filter query to topic set encoding.

use crate::{Result, TopicRule};
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// The topics of a log filter.
///
/// Each position holds the candidate topics for the matching log topic, in the order the rules
/// were given. Candidates within a position are alternatives, an empty position matches anything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicSet(Vec<Vec<B256>>);

impl TopicSet {
    /// Creates a new topic set from its positions.
    pub fn new(positions: Vec<Vec<B256>>) -> Self {
        Self(positions)
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the candidate topics at the given position.
    pub fn position(&self, index: usize) -> Option<&[B256]> {
        self.0.get(index).map(Vec::as_slice)
    }

    /// Returns all positions.
    pub fn positions(&self) -> &[Vec<B256>] {
        &self.0
    }

    /// Returns an iterator over the positions.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<B256>> {
        self.0.iter()
    }

    /// Prepends a position matching exactly the given topic.
    pub fn prepend(&mut self, topic: B256) {
        self.0.insert(0, vec![topic]);
    }

    pub fn into_inner(self) -> Vec<Vec<B256>> {
        self.0
    }
}

impl From<Vec<Vec<B256>>> for TopicSet {
    fn from(positions: Vec<Vec<B256>>) -> Self {
        Self(positions)
    }
}

impl IntoIterator for TopicSet {
    type Item = Vec<B256>;
    type IntoIter = std::vec::IntoIter<Vec<B256>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TopicSet {
    type Item = &'a Vec<B256>;
    type IntoIter = std::slice::Iter<'a, Vec<B256>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Converts a filter query into a topic set.
///
/// The query is a list of positions, each holding the candidate values for that position. The
/// output has exactly one position per query position and one topic per candidate.
///
/// Fails on the first rule that has no topic encoding, without returning any topics.
///
/// # Examples
///
/// ```
/// use alloy_primitives::B256;
/// use logtopic_codec::make_topics;
///
/// let topics = make_topics([[true, false]]).unwrap();
/// assert_eq!(topics.positions(), &[vec![B256::with_last_byte(1), B256::ZERO]]);
/// ```
pub fn make_topics<Q, P>(query: Q) -> Result<TopicSet>
where
    Q: IntoIterator<Item = P>,
    P: IntoIterator,
    P::Item: Into<TopicRule>,
{
    let positions = query
        .into_iter()
        .map(|position| {
            position.into_iter().map(|rule| rule.into().encode()).collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    trace!(positions = positions.len(), "encoded topic query");
    Ok(TopicSet(positions))
}
