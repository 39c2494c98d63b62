//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `genid`.
#[derive(Debug, Parser)]
#[command(name = "genid", version, about = "Generate short random alphanumeric ids")]
pub struct Cli {
    /// YAML config file with default length, count and alphabet changes.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one or more ids.
    Generate {
        /// Id length; values below 5 are raised to 5.
        #[arg(short = 'n', long)]
        length: Option<usize>,
        /// Number of ids to print.
        #[arg(short, long)]
        count: Option<usize>,
        /// Alphabet changes applied before generating.
        #[command(flatten)]
        alphabet: AlphabetArgs,
        /// Print a JSON object instead of one id per line.
        #[arg(long)]
        json: bool,
        /// Replay ids recorded in this cassette instead of generating new ones.
        #[arg(long, value_name = "CASSETTE")]
        replay: Option<PathBuf>,
    },
    /// Print the allowed alphabet.
    Alphabet {
        /// Alphabet changes applied before printing.
        #[command(flatten)]
        alphabet: AlphabetArgs,
        /// Print a JSON object instead of the bare characters.
        #[arg(long)]
        json: bool,
    },
}

/// Characters to allow or disallow for this invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct AlphabetArgs {
    /// Characters to allow, e.g. `--add '-_'`.
    #[arg(long, value_name = "CHARS")]
    pub add: Option<String>,
    /// Characters to disallow, e.g. `--remove 0O1lI`.
    #[arg(long, value_name = "CHARS")]
    pub remove: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_subcommand() {
        let cli = Cli::parse_from(["genid", "generate", "-n", "12", "--count", "3", "--add", "@"]);
        match cli.command {
            Command::Generate { length, count, alphabet, json, replay } => {
                assert_eq!(length, Some(12));
                assert_eq!(count, Some(3));
                assert_eq!(alphabet.add.as_deref(), Some("@"));
                assert_eq!(alphabet.remove, None);
                assert!(!json);
                assert!(replay.is_none());
            }
            Command::Alphabet { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_alphabet_subcommand_with_global_config() {
        let cli = Cli::parse_from(["genid", "alphabet", "--json", "--config", "genid.yaml"]);
        assert!(matches!(cli.command, Command::Alphabet { json: true, .. }));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("genid.yaml")));
    }

    #[test]
    fn rejects_negative_length() {
        assert!(Cli::try_parse_from(["genid", "generate", "-n", "-3"]).is_err());
    }
}
