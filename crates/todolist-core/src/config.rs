use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Key-value store file used when no `--file` is given.
    #[serde(default)]
    pub storage_file: Option<PathBuf>,

    /// When false, tasks may be created with a blank description.
    #[serde(default)]
    pub require_description: Option<bool>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todolist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todolist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todolist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn effective_require_description(&self) -> bool {
        self.require_description.unwrap_or(true)
    }

    /// Configured storage file, or the platform data directory default.
    pub fn effective_storage_file(&self) -> Option<PathBuf> {
        self.storage_file.clone().or_else(|| {
            dirs::data_dir().map(|data| data.join("todolist").join(DEFAULT_STORAGE_FILE))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(config.effective_require_description());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "storage_file = \"/tmp/notes.json\"\nrequire_description = false\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.storage_file, Some(PathBuf::from("/tmp/notes.json")));
        assert!(!config.effective_require_description());
        assert_eq!(
            config.effective_storage_file(),
            Some(PathBuf::from("/tmp/notes.json"))
        );
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "require_description = [not toml").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
