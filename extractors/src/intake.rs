use crate::job_posting::JobPostingExtractor;
use crate::keyvalue::KeyValueReader;
use shared_types::{ExtractionError, ParseMethod, ParsedRecord, PostingParser, RecordKind};
use tracing::debug;

/// The paste-channel entry point: one parser for both record kinds.
///
/// Job text runs through the heuristic pipeline; candidate text through the
/// key:value reader. Infallible by construction — the LLM-backed
/// [`PostingParser`] implementor is the one that can actually fail.
pub struct IntakeParser {
    job: JobPostingExtractor,
    candidate: KeyValueReader,
}

impl IntakeParser {
    pub fn new() -> Self {
        Self {
            job: JobPostingExtractor::new(),
            candidate: KeyValueReader::new(),
        }
    }
}

impl Default for IntakeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostingParser for IntakeParser {
    fn parse(&self, text: &str, kind: RecordKind) -> Result<ParsedRecord, ExtractionError> {
        debug!(?kind, bytes = text.len(), "parsing intake submission");
        let record = match kind {
            RecordKind::Job => ParsedRecord::Job(self.job.extract(text)),
            RecordKind::Candidate => ParsedRecord::Candidate(self.candidate.candidate(text)),
        };
        Ok(record)
    }

    fn method(&self) -> ParseMethod {
        ParseMethod::Heuristic
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_on_record_kind() {
        let parser = IntakeParser::new();

        match parser.parse("Role: DBA\nLocation: Austin, TX", RecordKind::Job) {
            Ok(ParsedRecord::Job(job)) => assert_eq!(job.title, "DBA"),
            other => panic!("expected job record, got {:?}", other),
        }

        match parser.parse("Name: John Doe", RecordKind::Candidate) {
            Ok(ParsedRecord::Candidate(candidate)) => assert_eq!(candidate.name, "John Doe"),
            other => panic!("expected candidate record, got {:?}", other),
        }
    }

    #[test]
    fn test_method_is_heuristic() {
        assert_eq!(IntakeParser::new().method(), ParseMethod::Heuristic);
    }

    #[test]
    fn test_never_errors_on_garbage() {
        let parser = IntakeParser::new();
        for kind in [RecordKind::Job, RecordKind::Candidate] {
            assert!(parser.parse("", kind).is_ok());
            assert!(parser.parse("💥💥 || :::", kind).is_ok());
        }
    }
}
