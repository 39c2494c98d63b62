//! Recording adapters that capture interactions to cassettes.

pub mod id_gen;

use std::sync::{Arc, Mutex, PoisonError};

use crate::cassette::recorder::CassetteRecorder;

pub use id_gen::RecordingIdSource;

/// Record one interaction on a shared recorder.
pub(crate) fn record_interaction(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input, output);
}
