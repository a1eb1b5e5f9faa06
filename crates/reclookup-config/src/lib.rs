use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::dictionary::{DictionaryConfig, LookupMode};
pub use self::output::OutputConfig;

pub mod dictionary;
pub mod output;

fn default_input_path() -> PathBuf {
    PathBuf::from("resources/input.txt")
}

/// Everything a single classification run needs to know
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    /// File streamed line by line against the dictionary
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            input_path: default_input_path(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn new(
        dictionary_path: impl Into<PathBuf>,
        input_path: impl Into<PathBuf>,
        matched_path: impl Into<PathBuf>,
        unmatched_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dictionary: DictionaryConfig {
                path: dictionary_path.into(),
                lookup: LookupMode::default(),
            },
            input_path: input_path.into(),
            output: OutputConfig {
                matched_path: matched_path.into(),
                unmatched_path: unmatched_path.into(),
            },
        }
    }

    /// Load a JSON config file. Missing fields fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.dictionary.lookup = lookup;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_reference_resources() {
        let config = Config::default();
        assert_eq!(config.dictionary.path, PathBuf::from("resources/dictionary.txt"));
        assert_eq!(config.input_path, PathBuf::from("resources/input.txt"));
        assert_eq!(
            config.output.matched_path,
            PathBuf::from("resources/matchedOutput.txt")
        );
        assert_eq!(
            config.output.unmatched_path,
            PathBuf::from("resources/unmatchedOutput.txt")
        );
        assert_eq!(config.dictionary.lookup, LookupMode::ReverseMap);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"input_path": "data/in.txt", "dictionary": {{"lookup": "scan"}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.input_path, PathBuf::from("data/in.txt"));
        assert_eq!(config.dictionary.lookup, LookupMode::Scan);
        assert_eq!(config.dictionary.path, PathBuf::from("resources/dictionary.txt"));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file"));
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = Config::new("d.txt", "i.txt", "m.txt", "u.txt").with_lookup(LookupMode::Scan);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""lookup":"scan""#));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
