//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,m3ustamp=debug"))
}

/// Writer handed to the subscriber: the log file, or stderr when the file
/// handle cannot be cloned.
enum LogWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("m3ustamp")?;
    let log_dir = xdg_dirs.get_state_home().join("m3ustamp");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("m3ustamp.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((path, file))
}

/// Initialize logging to `~/.local/state/m3ustamp/m3ustamp.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall
/// back to [`init_stderr`].
pub fn init() -> Result<()> {
    let (path, file) = open_log_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .init();

    tracing::info!("m3ustamp logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when [`init`] fails so the CLI
/// still reports what it is doing.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
