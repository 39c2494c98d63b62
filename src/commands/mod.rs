//! Command dispatch and handlers.

pub mod alphabet;
pub mod generate;

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::{GENERATE_METHOD, ID_GEN_PORT};
use crate::cli::{AlphabetArgs, Cli, Command};
use crate::config::GenidConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::generator::IdGenerator;

/// Environment variable naming a cassette file to record generated ids into.
pub const RECORD_ENV: &str = "GENID_RECORD";

/// Dispatch a parsed command to its handler, writing results to `out`.
///
/// When `GENID_RECORD` is set to a file path, every id produced by
/// `generate` is recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli, out: &mut dyn Write) -> Result<(), Error> {
    let config = GenidConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Generate { length, count, alphabet: changes, json, replay } => {
            let options = generate::GenerateOptions {
                length: length.unwrap_or(config.length),
                count: count.unwrap_or(config.count),
                json: *json,
            };
            let ctx = match replay {
                Some(path) => replaying_context(path, options.count)?,
                None => {
                    let generator = build_generator(&config, changes);
                    match env::var_os(RECORD_ENV) {
                        Some(path) => ServiceContext::recording(generator, Path::new(&path)),
                        None => ServiceContext::live(generator),
                    }
                }
            };

            if let Some(path) = run_and_finish(ctx, &options, out)? {
                finish_recording(&path);
            }
            Ok(())
        }
        Command::Alphabet { alphabet: changes, json } => {
            alphabet::run(&build_generator(&config, changes), *json, out)
        }
    }
}

/// Builds a generator with config changes applied first, then flag changes.
fn build_generator(config: &GenidConfig, args: &AlphabetArgs) -> Arc<IdGenerator> {
    let generator = IdGenerator::new();
    let config_changes = (Some(config.add.as_str()), Some(config.remove.as_str()));
    let flag_changes = (args.add.as_deref(), args.remove.as_deref());
    for (add, remove) in [config_changes, flag_changes] {
        generator.add(&chars_of(add));
        generator.remove(&chars_of(remove));
    }
    Arc::new(generator)
}

fn chars_of(value: Option<&str>) -> Vec<char> {
    value.map(|s| s.chars().collect()).unwrap_or_default()
}

/// Runs `generate`, then finishes the context even if the command failed.
///
/// The command's own error takes precedence over a failure to write the
/// cassette. Returns the cassette path when one was written.
fn run_and_finish(
    ctx: ServiceContext,
    options: &generate::GenerateOptions,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>, Error> {
    let result = generate::run(&ctx, options, out);
    let finished = ctx.finish();
    result?;
    finished
}

/// Opens a replay cassette, making sure its next `count` ids are usable.
fn replaying_context(path: &Path, count: usize) -> Result<ServiceContext, Error> {
    let replayer = CassetteReplayer::load(path)?;
    let pending = replayer.pending(ID_GEN_PORT, GENERATE_METHOD);
    if pending.len() < count {
        return Err(Error::CassetteExhausted { available: pending.len(), requested: count });
    }
    if let Some(bad) = pending[..count].iter().find(|i| !i.output.is_string()) {
        return Err(Error::CassetteInvalid { path: path.to_path_buf(), seq: bad.seq });
    }
    Ok(ServiceContext::replaying(replayer))
}

/// Print where a recording session was saved.
fn finish_recording(path: &Path) {
    eprintln!("Recording saved to: {}", path.display());
}
