//! Configuration for catalog generation.
//!
//! Uses a simple key=value format, one setting per line, `#` comments.
//! Precedence: CLI flags > `--config` file > `.catalog/config` > defaults.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Project config file, relative to the catalog root.
pub const PROJECT_CONFIG: &str = ".catalog/config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid config line: {0}")]
    InvalidLine(String),
    #[error("invalid boolean value for {key}: {value}")]
    InvalidBool { key: String, value: String },
}

/// Where skills are read from and where artifacts are written.
///
/// Relative paths are resolved against `root` by [`Config::resolve_paths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository root; entry paths are recorded relative to it.
    pub root: PathBuf,
    /// Directory holding one subdirectory per skill.
    pub skills_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub bundles_path: PathBuf,
    pub aliases_path: PathBuf,
    pub markdown_path: PathBuf,
    /// Render the markdown catalog (default: true).
    pub write_markdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            skills_dir: PathBuf::from("skills"),
            catalog_path: PathBuf::from("data/catalog.json"),
            bundles_path: PathBuf::from("data/bundles.json"),
            aliases_path: PathBuf::from("data/aliases.json"),
            markdown_path: PathBuf::from("CATALOG.md"),
            write_markdown: true,
        }
    }
}

impl Config {
    /// Load config from a file, merging with defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.load_file(path)?;
        Ok(config)
    }

    /// Load and merge values from a config file.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_content(&content, &path.display().to_string())
    }

    /// Parse config content (key=value format).
    pub fn parse_content(&mut self, content: &str, source: &str) -> Result<(), ConfigError> {
        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::InvalidLine(line.to_string()));
            };

            let key = key.trim();
            let value = Self::unquote(value.trim());

            self.apply_value(key, &value, source)?;
        }
        Ok(())
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            return value[1..value.len() - 1].to_string();
        }
        value.to_string()
    }

    fn apply_value(&mut self, key: &str, value: &str, source: &str) -> Result<(), ConfigError> {
        match key {
            "skills_dir" => self.skills_dir = PathBuf::from(value),
            "catalog_path" => self.catalog_path = PathBuf::from(value),
            "bundles_path" => self.bundles_path = PathBuf::from(value),
            "aliases_path" => self.aliases_path = PathBuf::from(value),
            "markdown_path" => self.markdown_path = PathBuf::from(value),
            "write_markdown" => self.write_markdown = Self::parse_bool(key, value)?,
            _ => {
                warn!(key, source, "unknown config key, ignoring");
            }
        }
        Ok(())
    }

    fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "on" => Ok(true),
            "false" | "0" | "no" | "n" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Set the root and resolve relative paths against it.
    pub fn resolve_paths(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        for path in [
            &mut self.skills_dir,
            &mut self.catalog_path,
            &mut self.bundles_path,
            &mut self.aliases_path,
            &mut self.markdown_path,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }

    /// Defaults merged with `<root>/.catalog/config` and an optional override
    /// file, with paths resolved against `root`.
    pub fn load(root: &Path, override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config = root.join(PROJECT_CONFIG);
        if project_config.exists() {
            config.load_file(&project_config)?;
        }
        if let Some(path) = override_path {
            config.load_file(path)?;
        }

        config.resolve_paths(root);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.skills_dir, PathBuf::from("skills"));
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.bundles_path, PathBuf::from("data/bundles.json"));
        assert_eq!(config.aliases_path, PathBuf::from("data/aliases.json"));
        assert_eq!(config.markdown_path, PathBuf::from("CATALOG.md"));
        assert!(config.write_markdown);
    }

    #[test]
    fn parse_simple_config() {
        let mut config = Config::default();
        let content = r#"
# catalog settings
skills_dir="library/skills"
catalog_path='out/catalog.json'
write_markdown=off
"#;
        config.parse_content(content, "test").unwrap();
        assert_eq!(config.skills_dir, PathBuf::from("library/skills"));
        assert_eq!(config.catalog_path, PathBuf::from("out/catalog.json"));
        assert!(!config.write_markdown);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut config = Config::default();
        config.parse_content("colour=blue", "test").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn line_without_equals_is_rejected() {
        let mut config = Config::default();
        let err = config.parse_content("skills_dir", "test").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine(_)));
    }

    #[test]
    fn bad_boolean_is_rejected() {
        let mut config = Config::default();
        let err = config.parse_content("write_markdown=maybe", "test").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }

    #[test]
    fn unquote_removes_quotes() {
        assert_eq!(Config::unquote("\"hello\""), "hello");
        assert_eq!(Config::unquote("'world'"), "world");
        assert_eq!(Config::unquote("noquotes"), "noquotes");
    }

    #[test]
    fn resolve_paths_keeps_absolute_paths() {
        let mut config = Config::default();
        config.catalog_path = PathBuf::from("/tmp/catalog.json");
        config.resolve_paths(Path::new("/repo"));

        assert_eq!(config.root, PathBuf::from("/repo"));
        assert_eq!(config.skills_dir, PathBuf::from("/repo/skills"));
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(config.markdown_path, PathBuf::from("/repo/CATALOG.md"));
    }

    #[test]
    fn load_layers_project_and_override_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join(".catalog")).unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG),
            "skills_dir=lib\nmarkdown_path=docs/SKILLS.md\n",
        )
        .unwrap();
        let override_path = tmp.path().join("override.conf");
        std::fs::write(&override_path, "skills_dir=other\n").unwrap();

        let config = Config::load(tmp.path(), Some(&override_path)).unwrap();

        assert_eq!(config.skills_dir, tmp.path().join("other"));
        assert_eq!(config.markdown_path, tmp.path().join("docs/SKILLS.md"));
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(tmp.path(), Some(&tmp.path().join("nope"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
