//! Shared helpers of the `logtopic` commands.

use alloy_json_abi::Event;
use eyre::{Chain, Result, WrapErr};
use std::error::Error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod position;
pub use position::Position;

/// Installs the global tracing subscriber, filtered by `RUST_LOG`.
pub fn subscriber() {
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses an event signature, with or without the leading `event` keyword.
pub fn get_event(sig: &str) -> Result<Event> {
    Event::parse(sig.trim()).wrap_err_with(|| format!("could not parse event signature `{sig}`"))
}

/// Collects the messages of a chain of errors, dropping those repeated by their parent.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<String> =
        Chain::new(error).map(|cause| cause.to_string().trim().to_string()).collect();
    // `msg1: msg2; msg2` -> `msg1: msg2`
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}
