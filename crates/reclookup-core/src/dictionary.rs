use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::report::Reporter;

/// One `<index> <value>` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub index: i32,
    pub value: String,
}

/// Index -> value mapping that remembers load order.
///
/// Re-inserting an existing index replaces its value but keeps the slot it
/// was first loaded into, so iteration order is always the order in which
/// indices first appeared.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    positions: HashMap<i32, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value if `index` was already present
    pub fn insert(&mut self, index: i32, value: String) -> Option<String> {
        match self.positions.get(&index) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].value, value)),
            None => {
                self.positions.insert(index, self.entries.len());
                self.entries.push(DictionaryEntry { index, value });
                None
            }
        }
    }

    pub fn get(&self, index: i32) -> Option<&str> {
        self.positions
            .get(&index)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    /// Entries in load order
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i32, String)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        let mut dictionary = Dictionary::new();
        for (index, value) in iter {
            dictionary.insert(index, value);
        }
        dictionary
    }
}

/// Reads dictionary files. Either the whole file loads or an error is returned.
pub struct DictionaryLoader<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> DictionaryLoader<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Load dictionary from file path
    pub fn load_from_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        self.reporter
            .info(&format!("Loading dictionary records from {}", path.display()));
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_str(path, &text)
    }

    /// Parse dictionary text. `origin` is only used in error messages.
    pub fn load_from_str(&self, origin: &Path, text: &str) -> Result<Dictionary, LoadError> {
        let mut dictionary = Dictionary::new();

        for (idx, line) in split_lines(text).enumerate() {
            let line_no = idx + 1;
            let mut fields = line.split_whitespace();

            // Blank lines carry no record
            let Some(token) = fields.next() else {
                continue;
            };

            let index = token.parse::<i32>().map_err(|source| LoadError::Parse {
                path: origin.to_path_buf(),
                line: line_no,
                token: token.to_string(),
                source,
            })?;

            let value = fields.next().ok_or_else(|| LoadError::MalformedRecord {
                path: origin.to_path_buf(),
                line: line_no,
            })?;

            if let Some(previous) = dictionary.insert(index, value.to_string()) {
                self.reporter.warn(&format!(
                    "Dictionary index {index} redefined on line {line_no}: {previous:?} replaced by {value:?}"
                ));
            }
            self.reporter
                .debug(&format!("Read dictionary values: {index} {value}"));
        }

        self.reporter.info(&format!(
            "Successfully loaded {} records from dictionary file",
            dictionary.len()
        ));
        Ok(dictionary)
    }
}

/// Splits on `\n`, `\r\n` or a lone `\r`; a trailing terminator adds no line
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(pos) => {
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..pos];
                rest = &rest[pos + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::report::{CapturingReporter, Level};

    fn parse(text: &str) -> Result<Dictionary, LoadError> {
        let reporter = CapturingReporter::new();
        DictionaryLoader::new(&reporter).load_from_str(Path::new("dict.txt"), text)
    }

    fn pairs(dictionary: &Dictionary) -> Vec<(i32, &str)> {
        dictionary
            .entries()
            .map(|e| (e.index, e.value.as_str()))
            .collect()
    }

    #[test]
    fn loads_well_formed_lines_in_order() {
        let dictionary = parse("1 apple\n2 banana\n3 cherry\n").unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(pairs(&dictionary), vec![(1, "apple"), (2, "banana"), (3, "cherry")]);
        assert_eq!(dictionary.get(2), Some("banana"));
        assert_eq!(dictionary.get(4), None);
    }

    #[test]
    fn extra_fields_are_dropped_and_blank_lines_skipped() {
        let dictionary = parse("1 apple pie\n\n   \n-7\tbanana\r\n").unwrap();
        assert_eq!(pairs(&dictionary), vec![(1, "apple"), (-7, "banana")]);
    }

    #[test]
    fn lone_carriage_returns_separate_records() {
        let dictionary = parse("1 apple\r2 banana\r3 cherry").unwrap();
        assert_eq!(pairs(&dictionary), vec![(1, "apple"), (2, "banana"), (3, "cherry")]);
    }

    #[test]
    fn line_numbers_count_every_terminator_style() {
        let err = parse("1 apple\r\n2 banana\r3\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn split_lines_matches_reader_semantics() {
        let lines: Vec<&str> = split_lines("a\nb\r\n\r\nc\r\rd\r").collect();
        assert_eq!(lines, vec!["a", "b", "", "c", "", "d"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn duplicate_index_overwrites_in_place() {
        let reporter = CapturingReporter::new();
        let dictionary = DictionaryLoader::new(&reporter)
            .load_from_str(Path::new("dict.txt"), "1 apple\n2 banana\n1 apricot\n")
            .unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(pairs(&dictionary), vec![(1, "apricot"), (2, "banana")]);
        assert_eq!(reporter.messages_at(Level::WARN).len(), 1);
    }

    #[test]
    fn non_integer_index_is_a_parse_error() {
        let err = parse("1 apple\nx banana\n").unwrap_err();
        match err {
            LoadError::Parse { path, line, token, .. } => {
                assert_eq!(path, PathBuf::from("dict.txt"));
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_is_a_parse_error() {
        let err = parse("4294967296 big\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn missing_value_is_malformed() {
        let err = parse("1 apple\n2\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 2, .. }));
        assert_eq!(
            err.to_string(),
            "dict.txt:2: expected `<index> <value>`, found fewer than two fields"
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = CapturingReporter::new();
        let err = DictionaryLoader::new(&reporter)
            .load_from_file(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_reports_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.txt");
        fs::write(&path, "1 apple\n2 banana\n").unwrap();

        let reporter = CapturingReporter::new();
        let dictionary = DictionaryLoader::new(&reporter).load_from_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        let info = reporter.messages_at(Level::INFO);
        assert_eq!(
            info.last().map(String::as_str),
            Some("Successfully loaded 2 records from dictionary file")
        );
        assert_eq!(reporter.messages_at(Level::DEBUG).len(), 2);
    }

    #[test]
    fn collects_from_pairs() {
        let dictionary: Dictionary = vec![(5, "e".to_string()), (1, "a".to_string())]
            .into_iter()
            .collect();
        assert_eq!(pairs(&dictionary), vec![(5, "e"), (1, "a")]);
        assert!(!dictionary.is_empty());
    }
}
