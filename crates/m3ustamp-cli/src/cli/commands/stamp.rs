//! Stamp command: apply the rewrite to a local playlist file.

use anyhow::{Context, Result};
use m3ustamp_core::config::DEFAULT_ATTRIBUTE;
use m3ustamp_core::rewrite;
use std::fs;
use std::path::Path;

/// Stamps the file at `path`; prints the result to stdout, or rewrites the
/// file when `in_place` is set.
pub fn run_stamp(path: &Path, in_place: bool) -> Result<()> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let outcome = rewrite::stamp_playlist(&input, DEFAULT_ATTRIBUTE);

    if in_place {
        fs::write(path, &outcome.text)
            .with_context(|| format!("cannot write {}", path.display()))?;
        eprintln!("stamped {} entries in {}", outcome.changed, path.display());
    } else {
        println!("{}", outcome.text);
        eprintln!("stamped {} entries", outcome.changed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_place_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.m3u");
        fs::write(&path, "#EXTM3U\n#EXTINF:-1,A\nhttp://h/a\n").unwrap();

        run_stamp(&path, true).unwrap();

        let out = fs::read_to_string(&path).unwrap();
        assert!(out.contains("tvc-stream-timestamps=\"rewrite\""));
        // Second pass must not change it again.
        run_stamp(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), out);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_stamp(&dir.path().join("nope.m3u"), false).is_err());
    }
}
