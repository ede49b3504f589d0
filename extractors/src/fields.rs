use shared_types::{ExtractedCandidate, ExtractedJob, JobSubtype, JobType, WorkMode};
use std::collections::HashMap;

/// Field values keyed by normalized label ("Current Company" and
/// "current_company" both land under "current_company")
pub type FieldMap = HashMap<String, String>;

pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn get(fields: &FieldMap, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| fields.get(*key))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn number(value: &str) -> Option<f64> {
    value.trim().trim_end_matches('+').trim().parse().ok()
}

fn integer(value: &str) -> Option<u32> {
    number(value).map(|v| v.round() as u32)
}

fn skill_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map labeled fields to a job record, honoring the template's fallback
/// labels ("Job Title"/"Position" for "Title", and so on)
pub fn job_from_fields(fields: &FieldMap) -> ExtractedJob {
    ExtractedJob {
        title: get(fields, &["title", "job_title", "position"]),
        description: get(fields, &["description", "job_description"]),
        company: get(fields, &["company"]),
        location: get(fields, &["location"]),
        job_type: JobType::parse(&get(fields, &["job_type", "type"])),
        job_subtype: JobSubtype::parse(&get(fields, &["sub_type", "subtype", "job_subtype"])),
        work_mode: WorkMode::parse(&get(fields, &["work_mode", "mode"])),
        salary_min: integer(&get(fields, &["salary_min", "min_salary"])),
        salary_max: integer(&get(fields, &["salary_max", "max_salary"])),
        pay_per_hour: number(&get(fields, &["pay_per_hour", "hourly_pay"])),
        skills_required: skill_list(&get(
            fields,
            &["skills_required", "skills", "required_skills"],
        )),
        experience_required: integer(&get(
            fields,
            &["experience_required", "required_experience"],
        )),
        recruiter_name: get(fields, &["recruiter_name", "recruiter"]),
        recruiter_email: get(fields, &["recruiter_email"]),
        recruiter_phone: get(fields, &["recruiter_phone"]),
    }
}

pub fn candidate_from_fields(fields: &FieldMap) -> ExtractedCandidate {
    ExtractedCandidate {
        name: get(fields, &["name"]),
        email: get(fields, &["email"]),
        phone: get(fields, &["phone"]),
        location: get(fields, &["location"]),
        current_company: get(fields, &["current_company", "company"]),
        current_role: get(fields, &["current_role", "role"]),
        preferred_job_type: JobType::parse(&get(fields, &["preferred_job_type", "job_type"])),
        expected_hourly_rate: number(&get(fields, &["expected_hourly_rate", "hourly_rate"])),
        experience_years: integer(&get(fields, &["experience_years", "experience"])),
        skills: skill_list(&get(fields, &["skills"])),
        bio: get(fields, &["bio"]),
        resume_summary: get(fields, &["resume_summary", "summary"]),
        resume_experience: get(fields, &["resume_experience", "experience_details"]),
        resume_education: get(fields, &["resume_education", "education"]),
        resume_achievements: get(fields, &["resume_achievements", "achievements"]),
    }
}
