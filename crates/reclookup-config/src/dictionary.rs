use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("resources/dictionary.txt")
}

/// How a matched line is mapped back to its dictionary index
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LookupMode {
    /// Walk every entry in load order for each line
    Scan,
    /// Precomputed value -> index map, built once after loading
    #[default]
    ReverseMap,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub lookup: LookupMode,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lookup: LookupMode::default(),
        }
    }
}
