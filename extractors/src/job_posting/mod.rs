mod classify;
mod compensation;
mod contact;
mod description;
mod experience;
mod location;
mod normalize;
mod skills;
mod title;

pub use classify::JobClassifier;
pub use compensation::{Compensation, CompensationExtractor};
pub use contact::{ContactExtractor, RecruiterContact};
pub use description::DescriptionAssembler;
pub use experience::ExperienceExtractor;
pub use location::LocationExtractor;
pub use normalize::{non_empty_lines, strip_emoji, TextNormalizer};
pub use skills::SkillsExtractor;
pub use title::TitleExtractor;

use shared_types::ExtractedJob;
use tracing::debug;

/// Heuristic job-posting extractor.
///
/// Each stage is an independent pass over the cleaned text (never over
/// another stage's output); the stages merge into one [`ExtractedJob`].
/// No input fails: unextractable fields keep their empty defaults.
///
/// All patterns are compiled once in [`JobPostingExtractor::new`]; the
/// extractor is immutable afterwards and safe to share across threads.
pub struct JobPostingExtractor {
    normalizer: TextNormalizer,
    title: TitleExtractor,
    location: LocationExtractor,
    classifier: JobClassifier,
    compensation: CompensationExtractor,
    skills: SkillsExtractor,
    experience: ExperienceExtractor,
    contact: ContactExtractor,
    description: DescriptionAssembler,
}

impl JobPostingExtractor {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            title: TitleExtractor::new(),
            location: LocationExtractor::new(),
            classifier: JobClassifier::new(),
            compensation: CompensationExtractor::new(),
            skills: SkillsExtractor::new(),
            experience: ExperienceExtractor::new(),
            contact: ContactExtractor::new(),
            description: DescriptionAssembler::new(),
        }
    }

    pub fn extract(&self, raw: &str) -> ExtractedJob {
        let text = self.normalizer.clean(raw);
        let lines = non_empty_lines(&text);

        let compensation = self.compensation.extract(&text);
        let recruiter = self.contact.recruiter(&text);

        let record = ExtractedJob {
            title: self.title.extract(&text, &lines),
            description: self.description.assemble(&text, &lines),
            company: self.contact.company(&text),
            location: self.location.extract(&text),
            job_type: self.classifier.job_type(&text),
            job_subtype: self.classifier.job_subtype(&text),
            work_mode: self.classifier.work_mode(&text),
            salary_min: compensation.salary_min,
            salary_max: compensation.salary_max,
            pay_per_hour: compensation.pay_per_hour,
            skills_required: self.skills.extract(&text),
            experience_required: self.experience.extract(&text),
            recruiter_name: recruiter.name,
            recruiter_email: recruiter.email,
            recruiter_phone: recruiter.phone,
        };

        debug!(
            title = %record.title,
            skills = record.skills_required.len(),
            "extracted job posting"
        );
        record
    }
}

impl Default for JobPostingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{JobSubtype, JobType, WorkMode};

    const RECRUITER_BLURB: &str = "💥 Sr. Java Developer – Onsite\n📍 Des Moines, IA (Local Only – DL Required)\n⏳ 6 Months CTH\nMust Have:\nJava, Spring Boot, RabbitMQ";

    #[test]
    fn test_recruiter_blurb_scenario() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract(RECRUITER_BLURB);

        assert_eq!(job.title, "Sr. Java Developer");
        assert_eq!(job.location, "Des Moines, IA");
        assert_eq!(job.work_mode, Some(WorkMode::Onsite));
        assert_eq!(job.job_subtype, Some(JobSubtype::C2h));
        assert_eq!(job.job_type, Some(JobType::Contract));
        assert!(job.skills_required.contains(&"Java".to_string()));
        assert!(job.skills_required.contains(&"Spring Boot".to_string()));
        assert!(job.skills_required.contains(&"RabbitMQ".to_string()));
        assert_eq!(job.experience_required, None);
        assert!(!job.description.is_empty());
    }

    #[test]
    fn test_description_nonempty_for_any_nonempty_input() {
        let extractor = JobPostingExtractor::new();
        for input in ["x", "\n\nline\n\n", "no structure at all", RECRUITER_BLURB] {
            assert!(!extractor.extract(input).description.is_empty(), "input: {input:?}");
        }
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("");

        assert_eq!(job.title, "");
        // Empty raw text means an empty fallback description: the one
        // documented exception to the non-empty description rule
        assert_eq!(job.description, "");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.job_type, None);
        assert_eq!(job.job_subtype, None);
        assert_eq!(job.work_mode, None);
        assert_eq!(job.salary_min, None);
        assert_eq!(job.salary_max, None);
        assert_eq!(job.pay_per_hour, None);
        assert!(job.skills_required.is_empty());
        assert_eq!(job.experience_required, None);
        assert_eq!(job.recruiter_name, "");
        assert_eq!(job.recruiter_email, "");
        assert_eq!(job.recruiter_phone, "");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = JobPostingExtractor::new();
        assert_eq!(extractor.extract(RECRUITER_BLURB), extractor.extract(RECRUITER_BLURB));
    }

    #[test]
    fn test_skills_never_duplicated() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("Java Java java\nMust Have: Java\nPlus: java");
        let mut lowered: Vec<String> = job
            .skills_required
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), job.skills_required.len());
    }

    #[test]
    fn test_salary_range_law() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("Backend role\nComp: $120k - $150k");
        assert_eq!(job.salary_min, Some(120_000));
        assert_eq!(job.salary_max, Some(150_000));
    }

    #[test]
    fn test_hourly_law() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("Support role\nRate: $65/hr");
        assert_eq!(job.pay_per_hour, Some(65.0));
        assert_eq!(job.salary_min, None);
        assert_eq!(job.salary_max, None);
    }

    #[test]
    fn test_subtype_precedence_law() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("Open to C2C and W2");
        assert_eq!(job.job_subtype, Some(JobSubtype::C2c));
    }

    #[test]
    fn test_title_fallback_law() {
        let extractor = JobPostingExtractor::new();
        let job = extractor.extract("🔥 Data Engineer - Remote\nGreat pay");
        assert_eq!(job.title, "Data Engineer");
    }

    #[test]
    fn test_garbage_input_never_panics() {
        let extractor = JobPostingExtractor::new();
        let garbage = "\u{0}\u{1}💥💥||||:::$$$###\n\n\n(((\n𝕏𝕐𝕑";
        let job = extractor.extract(garbage);
        assert!(job.skills_required.is_empty());
    }
}
