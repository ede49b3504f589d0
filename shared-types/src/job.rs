use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Employment classifier for a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    /// Lenient parse for values arriving from key:value or spreadsheet
    /// channels ("Full Time", "full-time", "FTE" are all seen in the wild)
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "full_time" | "fulltime" | "fte" | "permanent" | "perm" => Some(Self::FullTime),
            "part_time" | "parttime" => Some(Self::PartTime),
            "contract" | "contractor" | "consultant" => Some(Self::Contract),
            _ => None,
        }
    }
}

/// Employment arrangement, independent of but related to the job type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum JobSubtype {
    C2c,
    C2h,
    W2,
    #[serde(rename = "1099")]
    Ten99,
    DirectHire,
    Salary,
}

impl JobSubtype {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "c2c" | "corp_to_corp" => Some(Self::C2c),
            "c2h" | "cth" | "contract_to_hire" => Some(Self::C2h),
            "w2" => Some(Self::W2),
            "1099" => Some(Self::Ten99),
            "direct_hire" | "direct_client" => Some(Self::DirectHire),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

impl WorkMode {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "remote" | "wfh" => Some(Self::Remote),
            "onsite" | "on_site" | "in_office" => Some(Self::Onsite),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

fn normalize_token(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// A job posting as extracted from one intake channel, before review.
///
/// Every field is independently optional: unextractable strings stay empty,
/// unextractable numbers stay `None`. The record has no identity of its own;
/// the persistence layer assigns one after user review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct ExtractedJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub job_subtype: Option<JobSubtype>,
    pub work_mode: Option<WorkMode>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub pay_per_hour: Option<f64>,
    /// Canonical skill names, deduplicated case-insensitively,
    /// in first-seen order
    pub skills_required: Vec<String>,
    pub experience_required: Option<u32>,
    pub recruiter_name: String,
    pub recruiter_email: String,
    pub recruiter_phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serialization() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"full_time\"");

        let deserialized: JobType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, JobType::FullTime);
    }

    #[test]
    fn test_subtype_1099_serialization() {
        let json = serde_json::to_string(&JobSubtype::Ten99).unwrap();
        assert_eq!(json, "\"1099\"");

        let deserialized: JobSubtype = serde_json::from_str("\"1099\"").unwrap();
        assert_eq!(deserialized, JobSubtype::Ten99);
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(JobType::parse("Full Time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("full-time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("FTE"), Some(JobType::FullTime));
        assert_eq!(JobSubtype::parse("Corp-to-Corp"), Some(JobSubtype::C2c));
        assert_eq!(JobSubtype::parse("CTH"), Some(JobSubtype::C2h));
        assert_eq!(WorkMode::parse("On-Site"), Some(WorkMode::Onsite));
        assert_eq!(JobType::parse("gig"), None);
    }

    #[test]
    fn test_default_record_is_empty() {
        let job = ExtractedJob::default();
        assert!(job.title.is_empty());
        assert!(job.skills_required.is_empty());
        assert_eq!(job.salary_min, None);
        assert_eq!(job.pay_per_hour, None);
    }
}
