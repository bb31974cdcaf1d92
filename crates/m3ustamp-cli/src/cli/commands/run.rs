//! Run command: process every configured playlist source.

use anyhow::{Context, Result};
use m3ustamp_core::config;
use m3ustamp_core::process;
use std::path::{Path, PathBuf};

/// Loads the config (honoring overrides), runs the full pass, and prints the
/// summary. Per-source failures are counted, not fatal: the exit code stays 0
/// so a cron-driven refresh never aborts on one dead endpoint.
pub fn run_sources(
    config_path: Option<&Path>,
    output_dir: Option<PathBuf>,
    timeout: Option<u64>,
) -> Result<()> {
    let mut cfg = match config_path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("cannot read config {}", path.display()))?,
        None => config::load_or_init()?,
    };
    if let Some(dir) = output_dir {
        cfg.output_dir = dir;
    }
    if let Some(secs) = timeout {
        cfg.timeout_secs = secs;
    }

    if cfg.sources.is_empty() {
        let shown = match config_path {
            Some(p) => p.to_path_buf(),
            None => config::config_path()?,
        };
        println!("no sources configured; add some to {}", shown.display());
        return Ok(());
    }

    println!("processing {} playlist(s)", cfg.sources.len());
    let summary = process::run_all(&cfg);
    println!(
        "completed: {} succeeded | {} failed",
        summary.succeeded, summary.failed
    );
    println!("output dir: {}", cfg.output_dir.display());

    Ok(())
}
