use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for quadfix.
    pub quadfix: QuadfixConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for quadfix.
pub struct QuadfixConfig {
    /// File to rewrite, relative to the directory holding the config file.
    pub target: Option<String>,
    /// Print per-rule match counts.
    pub verbose: Option<bool>,
}

impl Config {
    /// Directory containing the loaded config file, if any.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.config_file_path.as_deref().and_then(Path::parent)
    }

    /// Loads configuration from the current directory or any parent.
    #[must_use]
    pub fn load() -> Self {
        std::env::current_dir().map_or_else(
            |_| Self::load_from_path(Path::new(".")),
            |cwd| Self::load_from_path(&cwd),
        )
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// Unreadable or malformed files are skipped and the search continues upwards.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        // A temp dir may still sit under a directory with a config, so only
        // check that nothing was read from the temp dir itself.
        assert_ne!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_from_path_quadfix_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[quadfix]
target = "spec/task.test.ts"
verbose = true
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.quadfix.target.as_deref(), Some("spec/task.test.ts"));
        assert_eq!(config.quadfix.verbose, Some(true));
        assert_eq!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("tests").join("unit");
        std::fs::create_dir_all(&nested).unwrap();

        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[quadfix]
target = "a.test.ts"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.quadfix.target.as_deref(), Some("a.test.ts"));
        assert_eq!(config.base_dir(), Some(dir.path()));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[quadfix]\nverbose = false\n",
        )
        .unwrap();
        let ts_file = dir.path().join("x.test.ts");
        std::fs::write(&ts_file, "").unwrap();

        let config = Config::load_from_path(&ts_file);
        assert_eq!(config.quadfix.verbose, Some(false));
    }

    #[test]
    fn test_malformed_config_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[quadfix\ntarget = ").unwrap();

        let config = Config::load_from_path(dir.path());
        assert_ne!(
            config.config_file_path,
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_empty_section_defaults() {
        let config = toml::from_str::<Config>("").unwrap();
        assert!(config.quadfix.target.is_none());
        assert!(config.quadfix.verbose.is_none());
    }
}
