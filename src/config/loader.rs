use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocGuardError, Result};

use super::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

const LOCAL_CONFIG_NAME: &str = ".doc-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the local `.doc-guard.toml`, falling back to the
/// platform config directory, then to built-in defaults.
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "doc-guard")
            .map(|dirs| dirs.config_dir().join(USER_CONFIG_NAME))
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            return self.load_from_path(local);
        }

        if let Some(user) = Self::user_config_path()
            && user.exists()
        {
            return self.load_from_path(&user);
        }

        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
