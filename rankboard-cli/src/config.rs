/// Config file loading and creation for the rankboard CLI.
///
/// Config lives at ~/.config/rankboard/config.toml.
/// All fields are optional — CLI flags override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RankboardConfig {
    /// Highest displayed rank to emit.
    pub ranking_threshold: Option<usize>,
    /// Minimum accepted plays to appear in the average ranking.
    pub min_plays: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# rankboard configuration
# All values here can be overridden by CLI flags.

# Highest rank printed. Players tied at this rank are all printed.
# ranking_threshold = 10

# Minimum number of plays to appear in the `average` ranking.
# min_plays = 10
";

/// Returns the default config path: ~/.config/rankboard/config.toml
/// `None` when HOME is not set.
pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("rankboard").join("config.toml"))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> RankboardConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => RankboardConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

fn parse_config(content: &str) -> Result<RankboardConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Create the default config file at `path`. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            bail(format!("Failed to create directory {}: {e}", parent.display()))
        });
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_fields() {
        let cfg = parse_config("ranking_threshold = 3\nmin_plays = 5\n").unwrap();
        assert_eq!(cfg.ranking_threshold, Some(3));
        assert_eq!(cfg.min_plays, Some(5));
    }

    #[test]
    fn test_parse_config_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), RankboardConfig::default());
    }

    #[test]
    fn test_parse_config_rejects_unknown_and_negative() {
        assert!(parse_config("threshold = 3\n").is_err());
        assert!(parse_config("min_plays = -1\n").is_err());
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap(), RankboardConfig::default());
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.toml"));
        assert_eq!(cfg, RankboardConfig::default());
    }

    #[test]
    fn test_create_then_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        create_default_config(&path);
        assert!(path.exists());
        assert_eq!(load_config(&path), RankboardConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ranking_threshold = 25\n").unwrap();
        let cfg = load_config(&path);
        assert_eq!(cfg.ranking_threshold, Some(25));
        assert_eq!(cfg.min_plays, None);
    }
}
