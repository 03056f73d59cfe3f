use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

/// What the site build does with a page that fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    #[default]
    Abort,
    Skip,
}

/// Site build settings, read from `mdsite.toml`.
///
/// Every field is optional in the file; missing ones take the defaults of
/// [`Config::default`]. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    /// URL prefix the site is served under, e.g. `/my-repo/`.
    pub basepath: String,
    pub on_error: OnError,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
            basepath: "/".to_string(),
            on_error: OnError::Abort,
        }
    }
}

impl Config {
    pub const DEFAULT_FILE_NAME: &'static str = "mdsite.toml";

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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();

        Ok(Some(config))
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

    /// `mdsite.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::DEFAULT_FILE_NAME)
    }

    /// Expand shell variables and tilde in every path field
    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.output_dir,
            &mut self.template_path,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
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
        assert_eq!(Config::config_path(), PathBuf::from("mdsite.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.basepath, "/");
        assert_eq!(config.on_error, OnError::Abort);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let config: Config = toml::from_str("basepath = \"/blog/\"\non_error = \"skip\"\n").unwrap();

        assert_eq!(config.basepath, "/blog/");
        assert_eq!(config.on_error, OnError::Skip);
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output_dir: PathBuf::from("/tmp/site"),
            on_error: OnError::Skip,
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("mdsite.toml");
        std::fs::write(&config_file, "on_error = \"explode\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("mdsite.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/mdsite.toml");
        let test_config = Config {
            content_dir: PathBuf::from("/tmp/test-content"),
            basepath: "/docs/".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_env_var_in_toml_paths() {
        unsafe {
            env::set_var("MDSITE_TEST_ROOT", "/custom/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("mdsite.toml");
        std::fs::write(
            &config_file,
            "content_dir = \"$MDSITE_TEST_ROOT/content\"\noutput_dir = \"$MDSITE_TEST_ROOT/public\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.content_dir, PathBuf::from("/custom/site/content"));
        assert_eq!(config.output_dir, PathBuf::from("/custom/site/public"));
        assert_eq!(config.static_dir, PathBuf::from("static"));

        unsafe {
            env::remove_var("MDSITE_TEST_ROOT");
        }
    }
}
