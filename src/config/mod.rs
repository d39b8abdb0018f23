mod loader;
mod model;
mod resolve;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, parse_document};
pub use model::{
    ALLOWED_KEYS, DEFAULT_DIR_KEY, DIR_CONFIGS_KEY, DirConfigSource, Document, ERRORS_COMMON_KEY,
    IGNORED_FILES_KEY, IGNORES_COMMON_KEY, LineLength, RuleConfig,
};
pub use resolve::resolve;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_key_is_sentinel() {
        assert_eq!(DEFAULT_DIR_KEY, "__default__");
    }

    #[test]
    fn allowed_keys_cover_mandatory_and_groups() {
        assert!(ALLOWED_KEYS.contains(&DIR_CONFIGS_KEY));
        assert!(ALLOWED_KEYS.contains(&IGNORED_FILES_KEY));
        assert!(ALLOWED_KEYS.contains(&ERRORS_COMMON_KEY));
        assert!(ALLOWED_KEYS.contains(&IGNORES_COMMON_KEY));
    }
}
