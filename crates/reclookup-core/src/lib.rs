pub mod classify;
pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod pipeline;
pub mod report;
pub mod sink;

pub use classify::{Classifier, ClassifierState, ClassifyStats};
pub use dictionary::{Dictionary, DictionaryEntry, DictionaryLoader};
pub use error::{ClassifyError, LoadError, LookupError, RunError, SinkKind};
pub use lookup::ReverseLookup;
pub use pipeline::{RunSummary, run};
pub use report::{CapturingReporter, Reporter, TracingReporter};
