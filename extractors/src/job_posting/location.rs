use super::normalize::strip_emoji;
use regex::Regex;

/// Location extraction from a pin-emoji line or an explicit label.
///
/// Trailing parenthetical remarks ("(Local Only - DL Required)",
/// "(3 days onsite)") are stripped: the eligibility noise is useless and the
/// days-onsite signal belongs to the work-mode stage.
pub struct LocationExtractor {
    pin_line: Regex,
    labeled: Regex,
    noise_paren: Regex,
    days_paren: Regex,
}

impl LocationExtractor {
    pub fn new() -> Self {
        Self {
            pin_line: Regex::new(r"(?i)[📍🌍🌎🌏]\s*(?:location\s*[:=]\s*)?([^\n|]+)").unwrap(),
            labeled: Regex::new(r"(?im)^\s*loc(?:ation)?\s*[:=]\s*([^\n|]+)").unwrap(),
            noise_paren: Regex::new(
                r"(?i)\s*\([^)]*\b(?:local|only|required|dl|drivers?)\b[^)]*\)\s*$",
            )
            .unwrap(),
            days_paren: Regex::new(
                r"(?i)\s*\(\s*\d+\s*days?\s*(?:onsite|on-site|remote|hybrid|in-office)[^)]*\)",
            )
            .unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> String {
        let raw = if let Some(caps) = self.pin_line.captures(text) {
            caps[1].to_string()
        } else if let Some(caps) = self.labeled.captures(text) {
            caps[1].to_string()
        } else {
            return String::new();
        };

        let mut location = strip_emoji(&raw);
        loop {
            let stripped = self.days_paren.replace_all(&location, "");
            let stripped = self.noise_paren.replace(&stripped, "").trim().to_string();
            if stripped == location {
                break;
            }
            location = stripped;
        }
        location.trim().to_string()
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}
