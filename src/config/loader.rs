use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::{GateError, Result};

use super::model::{
    ALLOWED_KEYS, DIR_CONFIGS_KEY, DirConfigSource, Document, ERRORS_COMMON_KEY, IGNORED_FILES_KEY,
    IGNORES_COMMON_KEY,
};

/// Config file looked up in the working directory.
const LOCAL_CONFIG_NAME: &str = ".checkpatch.yaml";

/// Config file looked up in the platform config directory.
const USER_CONFIG_NAME: &str = "checkpatch.yaml";

/// Built-in configuration used when no config file is found. Equivalent to
/// the default document shipped with the original hook: one catch-all
/// directory referencing the common ignore list.
const DEFAULT_CONFIG: &str = "\
IGNORES_COMMON:
  - BAD_SIGN_OFF
  - SPDX_LICENSE_TAG
  - FILE_PATH_CHANGES
  - NOT_UNIFIED_DIFF
  - LINUX_VERSION_CODE
  - CONSTANT_COMPARISON
  - OPEN_ENDED_LINE
  - UNNECESSARY_PARENTHESES
  - GERRIT_CHANGE_ID
  - COMMIT_LOG_LONG_LINE
  - EMAIL_SUBJECT
  - GIT_COMMIT_ID
DIR_CONFIGS:
  __default__:
    errors_ignored:
      - IGNORES_COMMON
";

/// Path label used in error messages for the built-in document.
const BUILTIN_PATH: &str = "<built-in>";

/// Trait for loading a validated configuration document.
pub trait ConfigLoader {
    /// Load from the default location (local file, then user config dir,
    /// then the built-in document).
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read or fails
    /// validation.
    fn load(&self) -> Result<Document>;

    /// Load from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails validation.
    fn load_from_path(&self, path: &Path) -> Result<Document>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "checkpatch-gate")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// File-based config loader.
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Document> {
        if let Ok(cwd) = self.fs.current_dir() {
            let local = cwd.join(LOCAL_CONFIG_NAME);
            if self.fs.exists(&local) {
                return self.load_from_path(&local);
            }
        }

        if let Some(config_dir) = self.fs.config_dir() {
            let user = config_dir.join(USER_CONFIG_NAME);
            if self.fs.exists(&user) {
                return self.load_from_path(&user);
            }
        }

        parse_document(Path::new(BUILTIN_PATH), DEFAULT_CONFIG)
    }

    fn load_from_path(&self, path: &Path) -> Result<Document> {
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| GateError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        parse_document(path, &text)
    }
}

/// Parse and validate a configuration document.
///
/// # Errors
/// Returns a [`GateError::Config`] for any schema violation, or a
/// [`GateError::Yaml`] when the text is not valid YAML.
pub fn parse_document(path: &Path, text: &str) -> Result<Document> {
    let value: Value = serde_yaml::from_str(text).map_err(|source| GateError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(mapping) = value.as_mapping() else {
        return Err(GateError::Config(format!(
            "Config file is empty: {}",
            path.display()
        )));
    };
    if mapping.is_empty() {
        return Err(GateError::Config(format!(
            "Config file is empty: {}",
            path.display()
        )));
    }

    let key_value = |name: &str| Value::String(name.to_string());

    let Some(dir_configs_value) = mapping.get(&key_value(DIR_CONFIGS_KEY)) else {
        return Err(GateError::Config(format!(
            "Missing mandatory key {DIR_CONFIGS_KEY} in {}",
            path.display()
        )));
    };
    let dir_configs_map = dir_configs_value
        .as_mapping()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| {
            GateError::Config(format!(
                "Invalid type for key {DIR_CONFIGS_KEY} in {}",
                path.display()
            ))
        })?;

    for key in mapping.keys() {
        let name = key.as_str().ok_or_else(|| {
            GateError::Config(format!("Invalid top-level key in {}", path.display()))
        })?;
        if !ALLOWED_KEYS.contains(&name) {
            return Err(GateError::Config(format!(
                "Unknown key {name} in {}",
                path.display()
            )));
        }
    }

    let ignored_files = match mapping.get(&key_value(IGNORED_FILES_KEY)) {
        None => Vec::new(),
        Some(v) if v.is_sequence() => {
            serde_yaml::from_value::<Vec<PathBuf>>(v.clone()).map_err(|_| {
                GateError::Config(format!(
                    "Invalid type for key {IGNORED_FILES_KEY} in {}",
                    path.display()
                ))
            })?
        }
        Some(_) => {
            return Err(GateError::Config(format!(
                "Invalid type for key {IGNORED_FILES_KEY} in {}",
                path.display()
            )));
        }
    };

    let mut groups = IndexMap::new();
    for group_key in [ERRORS_COMMON_KEY, IGNORES_COMMON_KEY] {
        if let Some(v) = mapping.get(&key_value(group_key)) {
            let categories =
                serde_yaml::from_value::<Vec<String>>(v.clone()).map_err(|_| {
                    GateError::Config(format!(
                        "Invalid type for key {group_key} in {}",
                        path.display()
                    ))
                })?;
            groups.insert(group_key.to_string(), categories);
        }
    }

    let mut dir_configs = IndexMap::new();
    for (dir_key, dconfig_value) in dir_configs_map {
        let dir_name = dir_key.as_str().ok_or_else(|| {
            GateError::Config(format!(
                "Invalid type for key {DIR_CONFIGS_KEY} in {}",
                path.display()
            ))
        })?;
        let dconfig = serde_yaml::from_value::<DirConfigSource>(dconfig_value.clone())
            .map_err(|source| GateError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        dir_configs.insert(dir_name.to_string(), dconfig);
    }

    Ok(Document {
        path: path.to_path_buf(),
        dir_configs,
        ignored_files,
        groups,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
