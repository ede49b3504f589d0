use regex::Regex;

/// Description assembly from the residual lines of a posting.
///
/// The first (title) line, location-pin lines, and contact-label lines are
/// consumed by other stages and excluded. A duration mention anywhere in the
/// text becomes a leading "Duration: N months" line. When nothing residual
/// remains, the whole cleaned text stands in, which keeps the description
/// non-empty for every non-empty input.
pub struct DescriptionAssembler {
    duration: Regex,
    pin_line: Regex,
    contact_label: Regex,
}

impl DescriptionAssembler {
    pub fn new() -> Self {
        Self {
            duration: Regex::new(r"(?i)(\d+)\s*\+?\s*months?").unwrap(),
            pin_line: Regex::new(r"^[📍🌍🌎🌏]").unwrap(),
            contact_label: Regex::new(
                r"(?i)^\s*(?:recruiter(?:\s+(?:name|email|phone))?|contact|poc|submitted\s+by|e-?mail|phone|cell|mobile)\s*[:=]",
            )
            .unwrap(),
        }
    }

    pub fn assemble(&self, text: &str, lines: &[String]) -> String {
        let residual: Vec<&str> = lines
            .iter()
            .skip(1)
            .filter(|line| !self.pin_line.is_match(line))
            .filter(|line| !self.contact_label.is_match(line))
            .map(String::as_str)
            .collect();

        if residual.is_empty() {
            return text.trim().to_string();
        }

        let mut parts = Vec::new();
        if let Some(caps) = self.duration.captures(text) {
            parts.push(format!("Duration: {} months", &caps[1]));
        }
        parts.extend(residual.into_iter().map(str::to_string));
        parts.join("\n")
    }
}

impl Default for DescriptionAssembler {
    fn default() -> Self {
        Self::new()
    }
}
