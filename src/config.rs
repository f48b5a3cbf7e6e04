use crate::case::Case;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_case")]
    pub default_case: Case,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Overrides the identifier shape derived from the target case
    #[serde(default)]
    pub token_pattern: Option<String>,

    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_case() -> Case {
    Case::Snake
}

fn default_min_length() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_case: default_case(),
            ignore_patterns: vec![
                r"^[A-Z0-9_]+$".to_string(), // SCREAMING_CONSTANTS
            ],
            token_pattern: None,
            min_length: default_min_length(),
        }
    }
}

/// One config file as written; unset keys leave earlier layers untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_case: Option<Case>,
    ignore_patterns: Option<Vec<String>>,
    token_pattern: Option<String>,
    min_length: Option<usize>,
}

impl ConfigFile {
    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(case: Option<Case>, cli_patterns: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Loading global config from {}", global_path.display());
                config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("Loading local config from {}", local_path.display());
            config.merge(ConfigFile::from_file(&local_path)?);
        }

        // Apply CLI overrides
        if let Some(case) = case {
            config.default_case = case;
        }
        config.extend_ignore_patterns(cli_patterns);

        Ok(config)
    }

    /// Defaults with a single config file layered on top
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(ConfigFile::from_file(path)?);
        Ok(config)
    }

    /// Every value the file sets overrides the current one; ignore patterns accumulate
    fn merge(&mut self, file: ConfigFile) {
        if let Some(case) = file.default_case {
            self.default_case = case;
        }
        if let Some(patterns) = file.ignore_patterns {
            self.extend_ignore_patterns(patterns);
        }
        if let Some(pattern) = file.token_pattern {
            self.token_pattern = Some(pattern);
        }
        if let Some(min_length) = file.min_length {
            self.min_length = min_length;
        }
    }

    fn extend_ignore_patterns(&mut self, patterns: Vec<String>) {
        for pattern in patterns {
            if !self.ignore_patterns.contains(&pattern) {
                self.ignore_patterns.push(pattern);
            }
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_case, Case::Snake);
        assert_eq!(config.min_length, 2);
        assert!(config.token_pattern.is_none());
        assert_eq!(config.ignore_patterns.len(), 1);
    }

    #[test]
    fn test_local_overrides_global_even_with_defaults() {
        let global = ConfigFile {
            default_case: Some(Case::Kebab),
            min_length: Some(4),
            token_pattern: Some(r"\w+".to_string()),
            ..Default::default()
        };
        let local = ConfigFile {
            default_case: Some(Case::Snake),
            min_length: Some(2),
            ..Default::default()
        };

        let mut config = Config::default();
        config.merge(global);
        config.merge(local);

        assert_eq!(config.default_case, Case::Snake);
        assert_eq!(config.min_length, 2);
        // unset keys keep the global value
        assert_eq!(config.token_pattern.as_deref(), Some(r"\w+"));
    }

    #[test]
    fn test_ignore_patterns_accumulate() {
        let mut config = Config::default();
        config.merge(ConfigFile {
            ignore_patterns: Some(vec!["^_".to_string()]),
            ..Default::default()
        });
        config.merge(ConfigFile {
            ignore_patterns: Some(vec!["^_".to_string(), "^Http".to_string()]),
            ..Default::default()
        });
        config.extend_ignore_patterns(vec!["^tmp".to_string()]);

        assert_eq!(
            config.ignore_patterns,
            vec![
                r"^[A-Z0-9_]+$".to_string(),
                "^_".to_string(),
                "^Http".to_string(),
                "^tmp".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(
            &path,
            "default_case = \"camel\"\nignore_patterns = [\"^_\"]\nmin_length = 3\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.default_case, Case::Camel);
        assert_eq!(
            config.ignore_patterns,
            vec![r"^[A-Z0-9_]+$".to_string(), "^_".to_string()]
        );
        assert_eq!(config.min_length, 3);
        assert!(config.token_pattern.is_none());
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "default_cse = \"kebab\"\n").unwrap();

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_rejects_unknown_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "default_case = \"shouty\"\n").unwrap();

        assert!(Config::from_file(&path).is_err());
    }
}
