use crate::{ExtractedCandidate, ExtractedJob};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Core trait every posting parser implements.
///
/// The heuristic extractor and the LLM-backed parsing service are
/// interchangeable implementors: consumers treat their records uniformly and
/// only the provenance differs.
pub trait PostingParser {
    /// Parse one raw text blob into a structured record
    fn parse(&self, text: &str, kind: RecordKind) -> Result<ParsedRecord, ExtractionError>;

    /// How does this parser produce its records?
    fn method(&self) -> ParseMethod;

    /// Parser version for provenance tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Parsing error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service error: {0}")]
    ServiceError(String),
}

/// Which kind of record an intake submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Job,
    Candidate,
}

/// Parsing methods available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMethod {
    Heuristic,
    LlmBased,
}

/// A record produced by any intake channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "data")]
pub enum ParsedRecord {
    Job(ExtractedJob),
    Candidate(ExtractedCandidate),
}
