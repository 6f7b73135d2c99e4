//! # logtopic-codec
//!
//! Conversion between typed values and the 32-byte topics used to index and filter event logs.
//!
//! Filter construction goes through [`make_topics`], which turns a query of candidate
//! [`TopicRule`]s into a [`TopicSet`]. Log consumption goes through [`parse_topics_with`] and its
//! adapters, which turn the topics of a matched log back into [`IndexedValue`]s.
//!
//! Dynamic types (`string`, `bytes`, arrays and tuples) only ever appear in a topic as the
//! `keccak256` hash of their encoding, so decoding them yields the hash, never the original value.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod decode;
pub use decode::{
    IndexedValue, decode_topic, parse_topics, parse_topics_into_map, parse_topics_with,
};

pub mod encode;
pub use encode::{TopicSet, make_topics};

mod error;
pub use error::{Result, TopicError};

pub mod event;
pub use event::{
    event_topics, indexed_inputs, log_indexed_topics, unpack_log, unpack_log_into_map,
};

pub mod filter;

pub mod rule;
pub use rule::TopicRule;

pub mod sink;
pub use sink::{IndexedFields, field_name};

/// The size of a single topic, in bytes.
pub const TOPIC_LEN: usize = 32;

/// The maximum number of topics a single log can carry.
pub const MAX_TOPICS: usize = 4;
