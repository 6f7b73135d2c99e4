//! # logtopic-cli
//!
//! The `logtopic` command-line tool: builds log filters from typed values and decodes the indexed
//! inputs of logs.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod args;
pub mod cmd;
pub mod fmt;
pub mod handler;
pub mod utils;
