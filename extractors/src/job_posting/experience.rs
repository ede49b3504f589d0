use regex::Regex;

/// Experience-years extraction: a labeled "Exp: 8" form first, then an
/// inline "8+ years of experience" form. First match wins; later mentions
/// are ignored.
pub struct ExperienceExtractor {
    labeled: Regex,
    inline: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self {
            labeled: Regex::new(r"(?i)exp(?:erience)?\s*[:=]?\s*(\d+)\s*\+?\s*(?:years?|yrs?|yr)?")
                .unwrap(),
            inline: Regex::new(
                r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:industry\s*)?(?:experience|exp)?",
            )
            .unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> Option<u32> {
        self.labeled
            .captures(text)
            .or_else(|| self.inline.captures(text))
            .and_then(|caps| caps[1].parse().ok())
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
