pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, ModuleConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bemkit")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    if config.namespace.chars().any(char::is_whitespace) {
        tracing::warn!(namespace = %config.namespace, "namespace contains whitespace");
    }
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scratch directory removed on drop, even when an assertion fails.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("bemkit-{}-{}", test, std::process::id()));
            let _ = std::fs::remove_dir_all(&dir);
            Self(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("bemkit-missing").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = ScratchDir::new("save-then-load");
        let path = dir.0.join("config.toml");
        let config = AppConfig {
            namespace: "tn-".into(),
            modules: vec![ModuleConfig {
                name: "Progress".into(),
                block: "progress".into(),
                elements: vec!["bar".into()],
            }],
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let path = {
            let dir = ScratchDir::new("drop-guard");
            save_config_to(&dir.0.join("config.toml"), &AppConfig::default()).unwrap();
            assert!(dir.0.exists());
            dir.0.clone()
        };
        assert!(!path.exists());
    }
}
