//! CLI for the m3ustamp playlist tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_sources, run_stamp};

/// Top-level CLI for m3ustamp.
#[derive(Debug, Parser)]
#[command(name = "m3ustamp")]
#[command(about = "Fetch M3U playlists and stamp #EXTINF lines with tvc-stream-timestamps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch, stamp, and save every configured playlist source.
    Run {
        /// Config file to use instead of ~/.config/m3ustamp/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Write output files here instead of the configured output_dir.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Fetch timeout in seconds (overrides the configured value).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Stamp a local playlist file (stdout by default).
    Stamp {
        /// Path to the .m3u file.
        path: PathBuf,
        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        in_place: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate for (bash, zsh, fish, ...).
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run {
                config,
                output_dir,
                timeout,
            } => run_sources(config.as_deref(), output_dir, timeout)?,
            CliCommand::Stamp { path, in_place } => run_stamp(&path, in_place)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
