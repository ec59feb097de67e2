use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// SQLite file location, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    /// The file must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(self.path.trim());
        if path.as_os_str().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        let escapes = path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(ConfigError::database(format!(
                "database.path must be relative and cannot contain '..', got '{}'",
                self.path
            )));
        }

        Ok(())
    }

    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(self.path.trim())
    }
}
