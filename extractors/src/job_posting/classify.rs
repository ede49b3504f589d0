use regex::Regex;
use shared_types::{JobSubtype, JobType, WorkMode};

/// Keyword-precedence inference for work mode, job type, and job subtype.
///
/// Each chain is an ordered list of (pattern, value) pairs evaluated
/// first-match-wins over the cleaned full text. Type and subtype are
/// independent tests: a posting may set one without the other.
pub struct JobClassifier {
    hybrid_days: Regex,
    work_modes: Vec<(Regex, WorkMode)>,
    subtypes: Vec<(Regex, JobSubtype)>,
    types: Vec<(Regex, JobType)>,
}

impl JobClassifier {
    pub fn new() -> Self {
        Self {
            // "(3 days onsite)" means a hybrid schedule, not an onsite role
            hybrid_days: Regex::new(r"(?i)\(\s*\d+\s*days?\s*(?:onsite|on-site|in-office)")
                .unwrap(),
            work_modes: vec![
                (Regex::new(r"(?i)\bhybrid\b").unwrap(), WorkMode::Hybrid),
                (
                    Regex::new(r"(?i)\bon[\s-]?site\b|\bin-office\b|\bin-person\b").unwrap(),
                    WorkMode::Onsite,
                ),
                (
                    Regex::new(r"(?i)\bremote\b|\bwfh\b|work\s+from\s+home|\btelecommute\b")
                        .unwrap(),
                    WorkMode::Remote,
                ),
            ],
            subtypes: vec![
                (
                    Regex::new(r"(?i)\bc2c\b|corp[\s-]?to[\s-]?corp").unwrap(),
                    JobSubtype::C2c,
                ),
                (
                    Regex::new(r"(?i)\bcth\b|\bc2h\b|contract[\s-]?to[\s-]?hire").unwrap(),
                    JobSubtype::C2h,
                ),
                (Regex::new(r"(?i)\bw2\b").unwrap(), JobSubtype::W2),
                (Regex::new(r"\b1099\b").unwrap(), JobSubtype::Ten99),
                (
                    Regex::new(r"(?i)direct\s+hire|direct\s+client").unwrap(),
                    JobSubtype::DirectHire,
                ),
                (Regex::new(r"(?i)\bsalary\b").unwrap(), JobSubtype::Salary),
            ],
            types: vec![
                (
                    Regex::new(r"(?i)full[\s-]?time|\bfte\b|\bpermanent\b|\bperm\b").unwrap(),
                    JobType::FullTime,
                ),
                (
                    Regex::new(r"(?i)part[\s-]?time").unwrap(),
                    JobType::PartTime,
                ),
                (
                    Regex::new(
                        r"(?i)\bcontract\b|\bcth\b|\bc2c\b|\bc2h\b|\bw2\b|\b1099\b|\bconsultant\b",
                    )
                    .unwrap(),
                    JobType::Contract,
                ),
            ],
        }
    }

    pub fn work_mode(&self, text: &str) -> Option<WorkMode> {
        if self.hybrid_days.is_match(text) {
            return Some(WorkMode::Hybrid);
        }
        self.work_modes
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, mode)| *mode)
    }

    pub fn job_subtype(&self, text: &str) -> Option<JobSubtype> {
        self.subtypes
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, subtype)| *subtype)
    }

    pub fn job_type(&self, text: &str) -> Option<JobType> {
        self.types
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, job_type)| *job_type)
    }
}

impl Default for JobClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_beats_onsite() {
        let classifier = JobClassifier::new();
        assert_eq!(
            classifier.work_mode("Hybrid role, onsite interview required"),
            Some(WorkMode::Hybrid)
        );
        assert_eq!(
            classifier.work_mode("Austin, TX (3 days onsite)"),
            Some(WorkMode::Hybrid)
        );
    }

    #[test]
    fn test_onsite_beats_remote() {
        let classifier = JobClassifier::new();
        assert_eq!(
            classifier.work_mode("On-site position, no remote"),
            Some(WorkMode::Onsite)
        );
    }

    #[test]
    fn test_remote_keywords() {
        let classifier = JobClassifier::new();
        assert_eq!(classifier.work_mode("100% WFH"), Some(WorkMode::Remote));
        assert_eq!(classifier.work_mode("work from home ok"), Some(WorkMode::Remote));
        assert_eq!(classifier.work_mode("no mode given"), None);
    }

    #[test]
    fn test_subtype_precedence_c2c_over_w2() {
        let classifier = JobClassifier::new();
        assert_eq!(
            classifier.job_subtype("C2C or W2 candidates welcome"),
            Some(JobSubtype::C2c)
        );
    }

    #[test]
    fn test_subtype_keywords() {
        let classifier = JobClassifier::new();
        assert_eq!(classifier.job_subtype("6 Months CTH"), Some(JobSubtype::C2h));
        assert_eq!(classifier.job_subtype("corp-to-corp only"), Some(JobSubtype::C2c));
        assert_eq!(classifier.job_subtype("1099 accepted"), Some(JobSubtype::Ten99));
        assert_eq!(
            classifier.job_subtype("Direct client requirement"),
            Some(JobSubtype::DirectHire)
        );
        assert_eq!(classifier.job_subtype("nothing here"), None);
    }

    #[test]
    fn test_type_independent_of_subtype() {
        let classifier = JobClassifier::new();
        // CTH implies a contract engagement even without the word "contract"
        assert_eq!(classifier.job_type("6 Months CTH"), Some(JobType::Contract));
        assert_eq!(classifier.job_type("FTE / Permanent"), Some(JobType::FullTime));
        assert_eq!(classifier.job_type("part-time shift"), Some(JobType::PartTime));
        assert_eq!(classifier.job_type("no keywords"), None);
    }
}
