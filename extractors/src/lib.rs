//! Extractors Crate
//!
//! This crate turns raw intake submissions — pasted recruiter blurbs,
//! key:value templates, spreadsheet rows — into the structured records
//! defined in the `shared-types` crate.
//!
//! # Architecture
//!
//! - **Types**: record shapes and the [`PostingParser`] trait live in the
//!   `shared-types` crate
//! - **Implementations**: concrete extractors are implemented here
//!
//! # Available Extractors
//!
//! - [`JobPostingExtractor`]: heuristic multi-stage extraction from
//!   free-text job postings
//! - [`KeyValueReader`]: labeled-line (`Key: value`) template reader for
//!   candidates and pre-labeled jobs
//! - [`SpreadsheetReader`]: CSV-row intake using the same field vocabulary
//! - [`IntakeParser`]: the paste-channel [`PostingParser`] implementor,
//!   dispatching on record kind
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{IntakeParser, PostingParser};
//! use shared_types::RecordKind;
//!
//! let parser = IntakeParser::new();
//! let record = parser.parse(pasted_text, RecordKind::Job)?;
//! ```

pub mod fields;
pub mod intake;
pub mod job_posting;
pub mod keyvalue;
pub mod spreadsheet;

// Re-export commonly used types
pub use intake::IntakeParser;
pub use job_posting::JobPostingExtractor;
pub use keyvalue::KeyValueReader;
pub use spreadsheet::SpreadsheetReader;

// Re-export the PostingParser trait from shared-types for convenience
pub use shared_types::PostingParser;
