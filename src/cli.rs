//! Command-line interface for readalong
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Guided read-along from streaming speech-to-text
#[derive(Parser, Debug)]
#[command(
    name = "readalong",
    version,
    about = "Tracks live reading progress through a story, word by word"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: show partial transcripts, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Story id to read (default: 1)
    #[arg(long, value_name = "ID")]
    pub story: Option<u32>,

    /// Page to start from, 1-based (default: 1)
    #[arg(long, value_name = "PAGE")]
    pub page: Option<usize>,

    /// Recognition language code (e.g. en-US, de-DE)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Directory with story-<id>.json files
    #[arg(long, value_name = "DIR")]
    pub story_dir: Option<PathBuf>,

    /// Write the accumulated transcript to this file on exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available stories
    Stories,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_invocation() {
        let cli = Cli::try_parse_from(["readalong"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.story.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_session_flags() {
        let cli = Cli::try_parse_from([
            "readalong",
            "--story",
            "2",
            "--page",
            "3",
            "--language",
            "de-DE",
            "--export",
            "out.txt",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.story, Some(2));
        assert_eq!(cli.page, Some(3));
        assert_eq!(cli.language.as_deref(), Some("de-DE"));
        assert_eq!(cli.export, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_stories_subcommand() {
        let cli = Cli::try_parse_from(["readalong", "stories"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stories)));
    }
}
