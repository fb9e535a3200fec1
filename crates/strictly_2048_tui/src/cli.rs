//! Command-line interface for strictly_2048.

use clap::Parser;
use std::path::PathBuf;

/// Strictly 2048 - slide and merge tiles in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_2048.toml")]
    pub config: PathBuf,

    /// Seed for a reproducible game, overriding the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_2048"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("strictly_2048.toml"));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_2048",
            "-c",
            "mine.toml",
            "--seed",
            "42",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("mine.toml"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["strictly_2048", "--seed", "abc"]).is_err());
    }
}
