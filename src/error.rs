//! Error type for the CLI layer.
//!
//! The generator itself never fails; these variants cover argument parsing,
//! configuration, cassettes and output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `genid` commands.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid command line, or a request for help/version output.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// A config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A config file is not valid YAML for `GenidConfig`.
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// An environment variable holds a value of the wrong shape.
    #[error("Invalid value {value:?} for {key}: expected a non-negative integer")]
    InvalidEnv {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
    /// A cassette file could not be read or written.
    #[error("Cassette I/O error for {}: {source}", path.display())]
    CassetteIo {
        /// Path of the cassette file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A cassette file is not valid YAML.
    #[error("Failed to parse cassette file {}: {source}", path.display())]
    CassetteParse {
        /// Path of the cassette file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// A replay cassette entry does not hold a string id.
    #[error("Cassette {} has a non-string id at seq={seq}", path.display())]
    CassetteInvalid {
        /// Path of the cassette file.
        path: PathBuf,
        /// Sequence number of the offending interaction.
        seq: u64,
    },
    /// More ids were requested than the replay cassette holds.
    #[error("Cassette holds {available} recorded ids but {requested} were requested")]
    CassetteExhausted {
        /// Ids left in the cassette.
        available: usize,
        /// Ids requested.
        requested: usize,
    },
    /// Writing command output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// Serializing JSON output failed.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
