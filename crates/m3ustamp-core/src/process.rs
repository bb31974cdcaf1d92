//! Per-source pipeline and run loop.
//!
//! For each configured source: resolve name → fetch → stamp → save. Sources
//! are independent; a failure is logged and counted, never fatal to the run.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::StampConfig;
use crate::fetch::{self, FetchError};
use crate::name;
use crate::rewrite;
use crate::save::{self, OutputArtifact};

/// One source processed end to end.
#[derive(Debug)]
pub struct ProcessedSource {
    /// Resolved playlist name (output filename stem).
    pub name: String,
    /// Size of the fetched body in bytes.
    pub fetched_bytes: u64,
    /// Number of `#EXTINF` lines that received the attribute.
    pub stamped: usize,
    /// Written output file.
    pub artifact: OutputArtifact,
}

/// Success/failure counts for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetches, stamps, and saves a single source.
pub fn process_source(source: &str, cfg: &StampConfig) -> Result<ProcessedSource> {
    let name = name::resolve_playlist_name(source);
    tracing::info!(source, %name, "processing playlist");

    let timeout = Duration::from_secs(cfg.timeout_secs);
    let body = fetch::fetch_playlist(source, timeout)
        .with_context(|| format!("fetch failed for '{name}'"))?;
    let fetched_bytes = body.len() as u64;
    tracing::debug!(%name, bytes = fetched_bytes, "downloaded playlist body");

    let outcome = rewrite::stamp_playlist(&body, &cfg.attribute);
    tracing::info!(%name, stamped = outcome.changed, "stamped stream entries");

    let artifact = save::save_playlist(&outcome.text, &name, &cfg.output_dir)
        .with_context(|| format!("write failed for '{name}'"))?;
    tracing::info!(
        %name,
        path = %artifact.path.display(),
        bytes = artifact.bytes,
        "saved playlist"
    );

    Ok(ProcessedSource {
        name,
        fetched_bytes,
        stamped: outcome.changed,
        artifact,
    })
}

/// Processes every configured source sequentially and returns the summary.
pub fn run_all(cfg: &StampConfig) -> RunSummary {
    let mut summary = RunSummary::default();

    for source in &cfg.sources {
        match process_source(source, cfg) {
            Ok(_) => summary.succeeded += 1,
            Err(err) => {
                let kind = err
                    .downcast_ref::<FetchError>()
                    .map(FetchError::kind)
                    .unwrap_or("io");
                tracing::warn!(%source, kind, "skipping source: {err:#}");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "run complete"
    );
    summary
}
