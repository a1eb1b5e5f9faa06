use std::collections::HashMap;

use reclookup_config::LookupMode;

use crate::dictionary::Dictionary;
use crate::error::LookupError;

/// Value -> index lookups against a loaded dictionary.
///
/// When several entries share a value, the earliest one in load order wins.
pub trait ReverseLookup {
    fn contains_value(&self, value: &str) -> bool;

    fn index_of(&self, value: &str) -> Result<i32, LookupError>;

    /// Number of entries the lookup can resolve to
    fn entry_count(&self) -> usize;
}

/// Walks the dictionary on every call
pub struct ScanLookup<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> ScanLookup<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }
}

impl ReverseLookup for ScanLookup<'_> {
    fn contains_value(&self, value: &str) -> bool {
        self.dictionary.entries().any(|e| e.value == value)
    }

    fn index_of(&self, value: &str) -> Result<i32, LookupError> {
        self.dictionary
            .entries()
            .find(|e| e.value == value)
            .map(|e| e.index)
            .ok_or_else(|| LookupError::NotFound(value.to_string()))
    }

    fn entry_count(&self) -> usize {
        self.dictionary.len()
    }
}

/// Value -> index map built once from the dictionary
pub struct ReverseMap<'d> {
    by_value: HashMap<&'d str, i32>,
    entries: usize,
}

impl<'d> ReverseMap<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        let mut by_value = HashMap::with_capacity(dictionary.len());
        for entry in dictionary.entries() {
            // keep the first index seen for a value
            by_value.entry(entry.value.as_str()).or_insert(entry.index);
        }
        Self {
            by_value,
            entries: dictionary.len(),
        }
    }
}

impl ReverseLookup for ReverseMap<'_> {
    fn contains_value(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    fn index_of(&self, value: &str) -> Result<i32, LookupError> {
        self.by_value
            .get(value)
            .copied()
            .ok_or_else(|| LookupError::NotFound(value.to_string()))
    }

    fn entry_count(&self) -> usize {
        self.entries
    }
}

pub fn build(dictionary: &Dictionary, mode: LookupMode) -> Box<dyn ReverseLookup + '_> {
    match mode {
        LookupMode::Scan => Box::new(ScanLookup::new(dictionary)),
        LookupMode::ReverseMap => Box::new(ReverseMap::new(dictionary)),
    }
}
