mod csv_parser;

pub use csv_parser::CsvParser;

use crate::fields::{candidate_from_fields, job_from_fields, FieldMap};
use shared_types::{ExtractedCandidate, ExtractedJob, ExtractionError};
use tracing::warn;

/// Spreadsheet-row intake: one CSV row per record, using the same labeled
/// field vocabulary as the key:value channel.
///
/// Rows missing their required column (job title, candidate name) are logged
/// and skipped; the remaining rows still import.
pub struct SpreadsheetReader {
    csv: CsvParser,
}

impl SpreadsheetReader {
    pub fn new() -> Self {
        Self {
            csv: CsvParser::new(),
        }
    }

    pub fn read_jobs(&self, content: &[u8]) -> Result<Vec<ExtractedJob>, ExtractionError> {
        let rows = self.csv.parse_to_maps(content)?;
        let mut jobs = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            if is_blank_row(row) {
                continue;
            }
            let job = job_from_fields(row);
            if job.title.is_empty() {
                warn!("skipping job row {}: missing title", index + 2);
                continue;
            }
            jobs.push(job);
        }

        Ok(jobs)
    }

    pub fn read_candidates(
        &self,
        content: &[u8],
    ) -> Result<Vec<ExtractedCandidate>, ExtractionError> {
        let rows = self.csv.parse_to_maps(content)?;
        let mut candidates = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            if is_blank_row(row) {
                continue;
            }
            let candidate = candidate_from_fields(row);
            if candidate.name.is_empty() {
                warn!("skipping candidate row {}: missing name", index + 2);
                continue;
            }
            candidates.push(candidate);
        }

        Ok(candidates)
    }
}

impl Default for SpreadsheetReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank_row(row: &FieldMap) -> bool {
    row.values().all(|value| value.trim().is_empty())
}
