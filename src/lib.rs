//! Short random alphanumeric ids drawn from a configurable alphabet.
//!
//! The core is [`IdGenerator`]: it owns an allowed alphabet that can be grown
//! with [`IdGenerator::add`] and shrunk with [`IdGenerator::remove`], and
//! produces ids with [`IdGenerator::generate`]. Free functions of the same
//! names act on a process-wide instance.
//!
//! ```
//! let generator = genid::IdGenerator::new();
//! generator.add(&['-', '_']);
//! assert_eq!(generator.generate(3).len(), genid::MIN_LENGTH);
//! ```
//!
//! Ids are not cryptographically secure and are not guaranteed to be unique.

pub mod adapters;
pub mod alphabet;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod logging;
pub mod ports;

use clap::Parser;

pub use alphabet::{Alphabet, DEFAULT_CHARS};
pub use error::Error;
pub use generator::{
    add, generate, generate_default, global, remove, IdGenerator, DEFAULT_LENGTH, MIN_LENGTH,
};
pub use ports::IdSource;

/// Run the CLI with the provided arguments, writing results to stdout.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails (including requests
/// for help or version output), or the command's error when it fails.
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&cli, &mut out)
}
