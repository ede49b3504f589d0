use crate::JobType;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A candidate profile as extracted from one intake channel, before review.
///
/// Same optionality contract as [`crate::ExtractedJob`]: empty strings and
/// `None` for anything the channel could not supply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct ExtractedCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub current_company: String,
    pub current_role: String,
    pub preferred_job_type: Option<JobType>,
    pub expected_hourly_rate: Option<f64>,
    pub experience_years: Option<u32>,
    pub skills: Vec<String>,
    pub bio: String,
    pub resume_summary: String,
    pub resume_experience: String,
    pub resume_education: String,
    pub resume_achievements: String,
}
