//! `genid generate` command.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::context::ServiceContext;
use crate::error::Error;
use crate::generator::effective_length;

/// Resolved options for one `generate` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Requested id length.
    pub length: usize,
    /// Number of ids to produce.
    pub count: usize,
    /// Emit JSON instead of plain lines.
    pub json: bool,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    /// Length shared by all ids, `null` when replayed ids differ.
    length: Option<usize>,
    ids: &'a [String],
}

/// Length of the ids actually produced.
///
/// Replayed ids keep their recorded length, so the requested length is only
/// a fallback for an empty batch.
fn reported_length(ids: &[String], requested: usize) -> Option<usize> {
    let mut lengths = ids.iter().map(|id| id.chars().count());
    match lengths.next() {
        None => Some(effective_length(requested)),
        Some(first) => lengths.all(|len| len == first).then_some(first),
    }
}

/// Execute the `generate` command, drawing ids from `ctx`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(
    ctx: &ServiceContext,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let ids: Vec<String> =
        (0..options.count).map(|_| ctx.id_gen.generate_id(options.length)).collect();
    debug!(count = ids.len(), length = options.length, "generated ids");

    if options.json {
        let report = GenerateReport { length: reported_length(&ids, options.length), ids: &ids };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for id in &ids {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}
