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

/// Settings for reading and checking spec documents. Every field has a
/// default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned by `gistpp check` when no file is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs_path: Option<PathBuf>,
    /// Level-2 section titles a spec may use.
    pub allowed_sections: Vec<String>,
    /// Level-2 section titles a spec must have.
    pub required_sections: Vec<String>,
    /// Target kinds in match priority order.
    pub target_types: Vec<String>,
    /// `"utf-8"` or `"utf-8-lossy"`.
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            specs_path: None,
            allowed_sections: to_strings(&["Behavior", "Tests", "Dependencies"]),
            required_sections: to_strings(&["Behavior"]),
            target_types: to_strings(&[
                "Library",
                "Executable",
                "App",
                "WebFrontEnd",
                "Experience",
                "BackgroundTask",
                "CloudService",
            ]),
            encoding: "utf-8".into(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the specs directory
        config.specs_path = config
            .specs_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the user's config, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/gistpp");
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
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/gistpp/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.allowed_sections, ["Behavior", "Tests", "Dependencies"]);
        assert_eq!(config.required_sections, ["Behavior"]);
        assert_eq!(config.target_types.first().map(String::as_str), Some("Library"));
        assert_eq!(config.target_types.len(), 7);
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.specs_path, None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
encoding = "utf-8-lossy"
required_sections = ["Behavior", "Tests"]
"#,
        )
        .unwrap();

        assert_eq!(config.encoding, "utf-8-lossy");
        assert_eq!(config.required_sections, ["Behavior", "Tests"]);
        assert_eq!(config.allowed_sections, Config::default().allowed_sections);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            specs_path: Some(PathBuf::from("/tmp/specs")),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("GISTPP_TEST_SPECS", "/test/env/path");
        }

        let path = PathBuf::from("$GISTPP_TEST_SPECS/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("GISTPP_TEST_SPECS");
        }
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
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "allowed_sections = 3").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
specs_path = "/srv/specs"
allowed_sections = ["Behavior"]
required_sections = ["Behavior"]
target_types = ["Library", "Plugin"]
encoding = "utf-8-lossy"
"#,
        )
        .unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            loaded_config,
            Config {
                specs_path: Some(PathBuf::from("/srv/specs")),
                allowed_sections: vec!["Behavior".into()],
                required_sections: vec!["Behavior".into()],
                target_types: vec!["Library".into(), "Plugin".into()],
                encoding: "utf-8-lossy".into(),
            }
        );
    }

    #[test]
    fn test_specs_path_expanded_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "specs_path = \"~/specs\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let specs = config.specs_path.unwrap();

        assert!(!specs.to_string_lossy().starts_with('~'));
        assert!(specs.ends_with("specs"));
    }
}
