pub mod candidate;
pub mod job;
pub mod parsing;

pub use candidate::ExtractedCandidate;
pub use job::{ExtractedJob, JobSubtype, JobType, WorkMode};
pub use parsing::{ExtractionError, ParseMethod, ParsedRecord, PostingParser, RecordKind};
