use crate::fields::{normalize_key, FieldMap};
use csv::ReaderBuilder;
use shared_types::ExtractionError;
use tracing::warn;

/// CSV decoding for the spreadsheet intake channel.
///
/// Headers are matched case-insensitively with spaces and hyphens treated as
/// underscores, per the upload template contract. Unreadable rows are logged
/// and skipped rather than failing the whole file.
pub struct CsvParser {
    delimiter: u8,
    has_headers: bool,
}

impl CsvParser {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }

    pub fn parse_to_maps(&self, content: &[u8]) -> Result<Vec<FieldMap>, ExtractionError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ExtractionError::ParseError(e.to_string()))?
            .iter()
            .map(normalize_key)
            .collect();

        let mut records = Vec::new();

        for result in reader.records() {
            match result {
                Ok(record) => {
                    let mut map = FieldMap::new();
                    for (i, field) in record.iter().enumerate() {
                        if let Some(header) = headers.get(i) {
                            if !header.is_empty() {
                                map.insert(header.clone(), field.to_string());
                            }
                        }
                    }
                    records.push(map);
                }
                Err(e) => {
                    warn!("skipping unreadable spreadsheet row: {}", e);
                }
            }
        }

        Ok(records)
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}
