use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Priority of the multiline table processor unless configured otherwise.
pub const DEFAULT_PRIORITY: u32 = 106;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tables: TablesConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Register the multiline table processor.
    pub multiline: bool,
    pub priority: u32,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            multiline: true,
            priority: DEFAULT_PRIORITY,
        }
    }
}

/// Markdown extensions of the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub tasklists: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: false,
            footnotes: false,
            tasklists: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads `path` (shell variables and `~` expanded) or the default config
    /// file, falling back to the defaults when the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match path {
            Some(path) => {
                let path = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
                Self::load_from_path(path)?
            }
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/md-multiline-table");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/md-multiline-table/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.tables.multiline);
        assert_eq!(config.tables.priority, 106);
        assert!(config.render.tables);
        assert!(!config.render.strikethrough);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original.tables.priority = 50;
        original.render.footnotes = true;

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[render]
strikethrough = true
"#,
        )
        .unwrap();

        assert!(config.render.strikethrough);
        assert!(config.render.tables);
        assert!(config.tables.multiline);
        assert_eq!(config.tables.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[tables]\npriority = \"high\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let mut test_config = Config::default();
        test_config.tables.multiline = false;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let config = Config::load_or_default(Some(&missing)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_expands_env_var() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[tables]\npriority = 7\n",
        )
        .unwrap();
        unsafe {
            env::set_var("MDMT_TEST_CONFIG_DIR", temp_dir.path());
        }

        let config =
            Config::load_or_default(Some(Path::new("$MDMT_TEST_CONFIG_DIR/config.toml"))).unwrap();
        assert_eq!(config.tables.priority, 7);

        unsafe {
            env::remove_var("MDMT_TEST_CONFIG_DIR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }
}
