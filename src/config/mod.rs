use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub ui: UiConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Where the log file is written.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Mode active when the app was last closed ("basic" or "mixer")
    pub last_mode: Option<String>,
    /// Show the key hint line at the bottom
    pub show_hints: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy through the terminal (OSC 52). Turn off for terminals that print the escape.
    pub osc52: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("hexmix"));
        Self { data_dir }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            last_mode: None,
            show_hints: true,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { osc52: true }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "hexmix", "hexmix")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = project_dirs().context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve_path(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_path(override_path)?;
    write(cfg, &path)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

/// Load the config, writing the defaults first if the file does not exist yet.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve_path(override_path)?;

    if !path.exists() {
        let cfg = Config::default();
        write(&cfg, &path).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hexmix-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_load_writes_defaults() {
        let path = temp_config_path("defaults");
        let _ = fs::remove_file(&path);

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let mut cfg = Config::default();
        cfg.input.mouse = false;
        cfg.ui.last_mode = Some("mixer".to_string());
        cfg.clipboard.osc52 = false;

        save(&cfg, Some(&path)).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), cfg);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[ui]\nlast_mode = \"basic\"\n").unwrap();
        assert_eq!(cfg.ui.last_mode.as_deref(), Some("basic"));
        assert!(cfg.ui.show_hints);
        assert!(cfg.input.mouse);
        assert!(cfg.clipboard.osc52);
    }
}
