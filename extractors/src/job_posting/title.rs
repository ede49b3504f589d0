use super::normalize::strip_emoji;
use regex::Regex;

/// Title extraction: ordered strategies, first non-empty result wins.
///
/// 1. A "Role:" / "Role 1:" label line.
/// 2. An "(is) hiring for <title>" phrase.
/// 3. The cleaned first non-empty line.
/// 4. The cleaned second line, when the first cleans down to nothing.
///
/// An empty title is a legal outcome, not an error.
pub struct TitleExtractor {
    role_label: Regex,
    hiring_for: Regex,
    greeting: Regex,
    leading_punct: Regex,
    mode_suffix: Regex,
}

impl TitleExtractor {
    pub fn new() -> Self {
        Self {
            role_label: Regex::new(r"(?im)^role(\s*\d+)?\s*[:=]\s*(.+)$").unwrap(),
            hiring_for: Regex::new(r"(?i)(?:is\s+)?hiring\s+for\s+([^\n]+)").unwrap(),
            greeting: Regex::new(
                r"(?i)^\s*(?:hello|hi|hey)\b[\s!,.:\-]*(?:(?:we\s+are\s+)?accepting\s+resumes?\s+for\s+(?:the\s+)?(?:role\s*(?:of)?)?\s*)?",
            )
            .unwrap(),
            leading_punct: Regex::new(r"^[\s:\-–—•]+").unwrap(),
            mode_suffix: Regex::new(
                r"(?i)\s*[-–—:]\s*(?:remote|hybrid|on-?site|wfh|work\s+from\s+home)\s*$",
            )
            .unwrap(),
        }
    }

    pub fn extract(&self, text: &str, lines: &[String]) -> String {
        if let Some(caps) = self.role_label.captures(text) {
            return strip_emoji(&caps[2]).trim().to_string();
        }

        if let Some(caps) = self.hiring_for.captures(text) {
            return strip_emoji(&caps[1]).trim().to_string();
        }

        let first = lines.first().map(|l| self.clean_line(l)).unwrap_or_default();
        if !first.is_empty() {
            return first;
        }

        lines.get(1).map(|l| self.clean_line(l)).unwrap_or_default()
    }

    fn clean_line(&self, line: &str) -> String {
        let line = strip_emoji(line);
        // Everything after a pipe is boilerplate ("... | Apply now")
        let line = line.split('|').next().unwrap_or("");
        let line = self.greeting.replace(line, "");
        let line = self.leading_punct.replace(&line, "");
        let line = self.mode_suffix.replace(&line, "");
        line.trim().to_string()
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}
