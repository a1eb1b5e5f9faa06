use std::num::ParseIntError;
use std::path::PathBuf;

/// Failures while reading the dictionary file. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dictionary file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: index {token:?} is not an integer", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{}:{line}: expected `<index> <value>`, found fewer than two fields", path.display())]
    MalformedRecord { path: PathBuf, line: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no dictionary index for value {0:?}")]
    NotFound(String),
}

/// Which of the two outputs a line was headed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Matched,
    Unmatched,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Matched => f.write_str("matched"),
            SinkKind::Unmatched => f.write_str("unmatched"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("failed reading input at line {line}")]
    ReadInput {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing {sink} output")]
    WriteOutput {
        sink: SinkKind,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Top level failure of a whole run, with the file involved
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Dictionary(#[from] LoadError),

    #[error("failed to open input file {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {sink} output file {}", path.display())]
    OpenOutput {
        sink: SinkKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("classification of {} aborted", path.display())]
    Classify {
        path: PathBuf,
        #[source]
        source: ClassifyError,
    },

    #[error("failed to flush {sink} output file {}", path.display())]
    Flush {
        sink: SinkKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
