//! `genid alphabet` command.

use std::io::Write;

use serde::Serialize;

use crate::error::Error;
use crate::generator::IdGenerator;

#[derive(Serialize)]
struct AlphabetReport {
    size: usize,
    alphabet: String,
}

/// Execute the `alphabet` command, printing the characters ids are drawn from.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(generator: &IdGenerator, json: bool, out: &mut dyn Write) -> Result<(), Error> {
    let alphabet = generator.effective_alphabet();
    if json {
        let report = AlphabetReport { size: alphabet.len(), alphabet: alphabet.to_string() };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{alphabet}")?;
    }
    Ok(())
}
