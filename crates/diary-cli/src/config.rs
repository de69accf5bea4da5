use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DiaryConfig {
    pub diary: DiarySection,
    pub ui: UiSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DiarySection {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub clear_screen: bool,
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|dir| dir.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DiaryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DiaryConfig> {
    match path {
        Some(path) if path.exists() => read_config(path),
        _ => Ok(DiaryConfig::default()),
    }
}

fn parse_config(contents: &str) -> Result<DiaryConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Some(PathBuf::from(value).join("diary"));
        }
    }
    home_dir().map(|home| home.join(".config").join("diary"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.diary.path.is_none());
        assert!(config.ui.clear_screen);
        assert!(config.ui.color);
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            "[diary]\npath = \"/tmp/notes.db\"\n\n[ui]\nclear_screen = false\ncolor = false\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.diary.path.as_deref(), Some("/tmp/notes.db"));
        assert!(!config.ui.clear_screen);
        assert!(!config.ui.color);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[ui]\nclear_screen = false\n").unwrap();
        assert!(!config.ui.clear_screen);
        assert!(config.ui.color);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[ui]\nclear_screen = \"sometimes\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.diary.path.is_none());
        assert!(load_config(None).is_ok());
    }

    #[test]
    fn test_read_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
