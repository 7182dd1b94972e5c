//! Runtime configuration.
//!
//! [`LookupConfig`] is always available with sensible defaults. With the
//! `config` cargo feature it can also be read from a TOML file, by default
//! `<config_dir>/lexlookup/config.toml`. Command-line flags override file
//! values.

use crate::error::{LookupError, Result};
use std::path::{Path, PathBuf};

/// Default size at which plain word lists are memory-mapped instead of read
pub const DEFAULT_MEMORY_THRESHOLD: u64 = 50 * 1024 * 1024; // 50MB

/// Settings for loading a word list and serving lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct LookupConfig {
    /// Word list used when none is given on the command line
    pub word_list: Option<PathBuf>,

    /// Run the O(n) sortedness check after loading
    pub verify_sorted: bool,

    /// Plain files at or above this many bytes are memory-mapped
    pub memory_threshold: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            verify_sorted: false,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
        }
    }
}

impl LookupConfig {
    /// Word list to load: the command-line path if given, else `word_list`
    ///
    /// Fails with [`LookupError::InvalidArgument`] when neither is set.
    pub fn resolve_word_list(&self, cli_path: Option<&Path>) -> Result<PathBuf> {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.word_list.clone())
            .ok_or_else(|| {
                LookupError::invalid_argument(
                    "no word list given (use --wordlist) and none configured",
                )
            })
    }
}

#[cfg(feature = "config")]
impl LookupConfig {
    /// Parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LookupError::file_error(format!("Failed to read config: {}", path.display()), e)
        })?;
        Self::from_toml(&text)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LookupError::config(e.to_string()))
    }

    /// Load the default configuration file if it exists, else defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/lexlookup/config.toml`, when a config dir is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lexlookup").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::default();
        assert!(config.word_list.is_none());
        assert!(!config.verify_sorted);
        assert_eq!(config.memory_threshold, 50 * 1024 * 1024);
    }

    #[test]
    fn test_command_line_word_list_wins_over_config() {
        let config = LookupConfig {
            word_list: Some(PathBuf::from("configured.csv")),
            ..LookupConfig::default()
        };

        let resolved = config
            .resolve_word_list(Some(Path::new("given.csv")))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("given.csv"));
        assert_eq!(
            config.resolve_word_list(None).unwrap(),
            PathBuf::from("configured.csv")
        );
    }

    #[test]
    fn test_missing_word_list_is_invalid_argument() {
        match LookupConfig::default().resolve_word_list(None) {
            Err(LookupError::InvalidArgument { message }) => {
                assert!(message.contains("--wordlist"));
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LookupConfig::from_toml("verify_sorted = true\n").unwrap();
        assert!(config.verify_sorted);
        assert_eq!(config.memory_threshold, DEFAULT_MEMORY_THRESHOLD);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_full_toml() {
        let text = r#"
            word_list = "/usr/share/lexlookup/ddo_fullforms.csv.gz"
            verify_sorted = true
            memory_threshold = 1024
        "#;
        let config = LookupConfig::from_toml(text).unwrap();
        assert_eq!(
            config.word_list.as_deref(),
            Some(Path::new("/usr/share/lexlookup/ddo_fullforms.csv.gz"))
        );
        assert_eq!(config.memory_threshold, 1024);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_unknown_key_is_config_error() {
        assert!(matches!(
            LookupConfig::from_toml("colour = \"red\"\n"),
            Err(LookupError::ConfigError { .. })
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "memory_threshold = 4096\n").unwrap();

        let config = LookupConfig::load(file.path()).unwrap();
        assert_eq!(config.memory_threshold, 4096);
    }
}
