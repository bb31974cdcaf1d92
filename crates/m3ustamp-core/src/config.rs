use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Attribute inserted into every `#EXTINF` line that lacks it.
pub const DEFAULT_ATTRIBUTE: &str = r#"tvc-stream-timestamps="rewrite""#;

/// Default fetch timeout per source, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Global configuration loaded from `~/.config/m3ustamp/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StampConfig {
    /// Playlist endpoints to fetch, one output file each.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Directory where stamped `.m3u` files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Fetch timeout per source in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Attribute token inserted after the `#EXTINF` duration.
    #[serde(default = "default_attribute")]
    pub attribute: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            output_dir: default_output_dir(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            attribute: default_attribute(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("m3ustamp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StampConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StampConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path (e.g. `--config`).
pub fn load_from(path: &Path) -> Result<StampConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: StampConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = StampConfig::default();
        assert!(cfg.sources.is_empty());
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.attribute, r#"tvc-stream-timestamps="rewrite""#);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = StampConfig {
            sources: vec!["http://example.com/output/m3u/Sky".to_string()],
            output_dir: PathBuf::from("/caddy/M3U"),
            timeout_secs: 10,
            attribute: "x=\"y\"".to_string(),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: StampConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.sources, cfg.sources);
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.attribute, cfg.attribute);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let toml = r#"
            sources = ["http://h/output/m3u/Kids?cachedlogos=false"]
            output_dir = "/tmp/m3u"
        "#;
        let cfg: StampConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.sources.len(), 1);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/m3u"));
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.attribute, DEFAULT_ATTRIBUTE);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "sources = [\"http://h/a\", \"http://h/b\"]\noutput_dir = \"out\"\ntimeout_secs = 5\n",
        )
        .unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.sources.len(), 2);
        assert_eq!(cfg.timeout_secs, 5);
    }
}
