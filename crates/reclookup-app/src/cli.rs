use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reclookup_config::{Config, ConfigError, LookupMode};

/// Split an input file into lines found in a dictionary and lines that are not
#[derive(Parser, Debug)]
#[command(name = "reclookup", version)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dictionary of `<index> <value>` lines
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Input file, one record per line
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Appended with `<index> <value>` for every matched line
    #[arg(long, value_name = "PATH")]
    pub matched: Option<PathBuf>,

    /// Appended with every unmatched line, verbatim
    #[arg(long, value_name = "PATH")]
    pub unmatched: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub lookup: Option<LookupArg>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupArg {
    Scan,
    ReverseMap,
}

impl From<LookupArg> for LookupMode {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::Scan => LookupMode::Scan,
            LookupArg::ReverseMap => LookupMode::ReverseMap,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(path) = &self.dictionary {
            config.dictionary.path = path.clone();
        }
        if let Some(path) = &self.input {
            config.input_path = path.clone();
        }
        if let Some(path) = &self.matched {
            config.output.matched_path = path.clone();
        }
        if let Some(path) = &self.unmatched {
            config.output.unmatched_path = path.clone();
        }
        if let Some(lookup) = self.lookup {
            config.dictionary.lookup = lookup.into();
        }

        Ok(config)
    }
}
