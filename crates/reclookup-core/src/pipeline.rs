use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use reclookup_config::Config;

use crate::classify::{ClassifyStats, Classifier};
use crate::dictionary::DictionaryLoader;
use crate::error::{RunError, SinkKind};
use crate::lookup;
use crate::report::Reporter;
use crate::sink::LineSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub dictionary_entries: usize,
    pub stats: ClassifyStats,
}

/// Load the dictionary, classify the input and close both outputs.
///
/// Nothing is created on disk unless the dictionary loads and the input
/// opens. Once the outputs are open they are flushed on every path out of
/// this function, including a failed classification.
pub fn run(config: &Config, reporter: &dyn Reporter) -> Result<RunSummary, RunError> {
    let dictionary = DictionaryLoader::new(reporter).load_from_file(&config.dictionary.path)?;
    let lookup = lookup::build(&dictionary, config.dictionary.lookup);

    let input = File::open(&config.input_path).map_err(|source| RunError::OpenInput {
        path: config.input_path.clone(),
        source,
    })?;

    let matched_path = &config.output.matched_path;
    let unmatched_path = &config.output.unmatched_path;
    let mut matched = open_sink(SinkKind::Matched, matched_path)?;
    let mut unmatched = open_sink(SinkKind::Unmatched, unmatched_path)?;

    reporter.info(&format!(
        "Classifying {} against {} dictionary records",
        config.input_path.display(),
        lookup.entry_count()
    ));

    let mut classifier = Classifier::new(lookup.as_ref(), reporter);
    let outcome = classifier.run(BufReader::new(input), &mut matched, &mut unmatched);

    let flushed = [
        (SinkKind::Matched, matched_path, matched.finish().map(drop)),
        (SinkKind::Unmatched, unmatched_path, unmatched.finish().map(drop)),
    ];

    match outcome {
        Ok(stats) => {
            for (sink, path, result) in flushed {
                result.map_err(|source| RunError::Flush {
                    sink,
                    path: path.clone(),
                    source,
                })?;
            }
            reporter.info(&format!(
                "Processed {} lines: {} matched, {} unmatched",
                stats.lines, stats.matched, stats.unmatched
            ));
            Ok(RunSummary {
                dictionary_entries: dictionary.len(),
                stats,
            })
        }
        Err(source) => {
            // the classification error wins; flush failures are only reported
            for (sink, path, result) in flushed {
                if let Err(e) = result {
                    reporter.warn(&format!(
                        "Failed to flush {sink} output {}: {e}",
                        path.display()
                    ));
                }
            }
            Err(RunError::Classify {
                path: config.input_path.clone(),
                source,
            })
        }
    }
}

fn open_sink(kind: SinkKind, path: &Path) -> Result<LineSink<File>, RunError> {
    LineSink::append(kind, path).map_err(|source| RunError::OpenOutput {
        sink: kind,
        path: path.to_path_buf(),
        source,
    })
}
