use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_matched_path() -> PathBuf {
    PathBuf::from("resources/matchedOutput.txt")
}

fn default_unmatched_path() -> PathBuf {
    PathBuf::from("resources/unmatchedOutput.txt")
}

/// Destinations for classified lines. Both files are opened in append mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_matched_path")]
    pub matched_path: PathBuf,
    #[serde(default = "default_unmatched_path")]
    pub unmatched_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            matched_path: default_matched_path(),
            unmatched_path: default_unmatched_path(),
        }
    }
}
