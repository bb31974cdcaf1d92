//! Output file writing.
//!
//! Whole-file replace: the text is written to a `.part` sibling first, then
//! renamed onto the final path, so readers of the output directory never see
//! a half-written playlist.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A successfully written playlist file.
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    /// Absolute path of the written file.
    pub path: PathBuf,
    /// File size in bytes (UTF-8 encoded length of the text).
    pub bytes: u64,
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Writes `text` as UTF-8 to `<output_dir>/<name>.m3u`, creating intermediate
/// directories as needed and overwriting any existing file.
pub fn save_playlist(text: &str, name: &str, output_dir: &Path) -> io::Result<OutputArtifact> {
    fs::create_dir_all(output_dir)?;

    let final_path = output_dir.join(format!("{name}.m3u"));
    let tmp = temp_path(&final_path);

    fs::write(&tmp, text)?;
    fs::rename(&tmp, &final_path)?;

    let path = final_path.canonicalize().unwrap_or(final_path);
    Ok(OutputArtifact {
        path,
        bytes: text.len() as u64,
    })
}
