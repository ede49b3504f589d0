use regex::Regex;

/// Strips hashtag-style noise left behind by social-feed copy/paste.
///
/// Total and deterministic: any input, including the empty string, yields a
/// cleaned string.
pub struct TextNormalizer {
    tagged_word: Regex,
    bare_tag: Regex,
    literal_tag: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            // LinkedIn renders tags as "hashtag#word" in plain-text copies
            tagged_word: Regex::new(r"(?i)hashtag#\w+").unwrap(),
            bare_tag: Regex::new(r"#\w+").unwrap(),
            literal_tag: Regex::new(r"(?i)\bhashtag\b").unwrap(),
        }
    }

    pub fn clean(&self, raw: &str) -> String {
        let text = raw.replace('\r', "");
        let text = self.tagged_word.replace_all(&text, "");
        let text = self.bare_tag.replace_all(&text, "");
        let text = self.literal_tag.replace_all(&text, "");
        text.into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed, non-empty lines of the cleaned text
pub fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop emoji-range code points; recruiter blurbs decorate nearly every
/// line with them
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|c| !is_emoji(*c)).collect()
}

fn is_emoji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F000..=0x1FAFF   // pictographs, transport, supplemental symbols
            | 0x2600..=0x27BF   // misc symbols, dingbats
            | 0x2B00..=0x2BFF
            | 0x2190..=0x21FF   // arrows
            | 0x2300..=0x23FF   // misc technical (hourglass, alarm clock)
            | 0xFE00..=0xFE0F   // variation selectors
            | 0x200D            // zero-width joiner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hashtag_noise() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.clean("Java Developer hashtag#hiring #java hashtag needed\r\n");
        assert!(!cleaned.contains('#'));
        assert!(!cleaned.contains("hashtag"));
        assert!(!cleaned.contains('\r'));
        assert!(cleaned.contains("Java Developer"));
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean(""), "");
    }

    #[test]
    fn test_non_empty_lines() {
        let lines = non_empty_lines("  first \n\n  \nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_strip_emoji() {
        assert_eq!(strip_emoji("💥 Sr. Java Developer ⏳"), " Sr. Java Developer ");
        assert_eq!(strip_emoji("📍 Des Moines"), " Des Moines");
        assert_eq!(strip_emoji("plain text"), "plain text");
    }
}
