use crate::fields::{self, normalize_key, FieldMap};
use regex::Regex;
use shared_types::{ExtractedCandidate, ExtractedJob};

/// Labeled-line (`Key: value`) reader used by the template-paste channel.
///
/// Candidates arrive exclusively through this reader; pre-labeled job
/// templates can use it too, though free-text postings go through the
/// heuristic pipeline instead. First matching line wins per field.
pub struct KeyValueReader {
    label_line: Regex,
}

impl KeyValueReader {
    pub fn new() -> Self {
        Self {
            label_line: Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z _-]*?)\s*[:=]\s*(\S.*)$").unwrap(),
        }
    }

    pub fn candidate(&self, text: &str) -> ExtractedCandidate {
        fields::candidate_from_fields(&self.field_map(text))
    }

    pub fn job(&self, text: &str) -> ExtractedJob {
        fields::job_from_fields(&self.field_map(text))
    }

    fn field_map(&self, text: &str) -> FieldMap {
        let mut map = FieldMap::new();
        for caps in self.label_line.captures_iter(text) {
            let key = normalize_key(&caps[1]);
            // First occurrence wins
            map.entry(key).or_insert_with(|| caps[2].trim().to_string());
        }
        map
    }
}

impl Default for KeyValueReader {
    fn default() -> Self {
        Self::new()
    }
}
