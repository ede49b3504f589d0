use regex::Regex;

/// Emails carrying this marker were injected by the platform itself and are
/// never a recruiter address
const PLATFORM_DOMAIN_MARKER: &str = "@jobdesk.";

#[derive(Debug, Default, PartialEq)]
pub struct RecruiterContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Company and recruiter contact extraction from labeled lines, with an
/// "<Company> is hiring" fallback for the company and a standalone-email-line
/// fallback for the address.
pub struct ContactExtractor {
    company_label: Regex,
    company_hiring: Regex,
    name_label: Regex,
    email_label: Regex,
    bare_email_line: Regex,
    phone_label: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            company_label: Regex::new(r"(?im)^\s*(?:company|client|employer)\s*[:=]\s*([^\n|]+)")
                .unwrap(),
            company_hiring: Regex::new(r"(?m)^\s*([A-Z][A-Za-z0-9&.,' \-]*?)\s+is\s+hiring\b")
                .unwrap(),
            name_label: Regex::new(
                r"(?im)^\s*(?:recruiter(?:\s+name)?|contact|poc|submitted\s+by)\s*[:=]\s*([^\n|]+)",
            )
            .unwrap(),
            email_label: Regex::new(
                r"(?i)(?:recruiter\s+)?e-?mail\s*[:=]\s*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})",
            )
            .unwrap(),
            bare_email_line: Regex::new(
                r"(?m)^\s*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})\s*$",
            )
            .unwrap(),
            phone_label: Regex::new(
                r"(?im)^\s*(?:recruiter\s+)?(?:phone|cell|mobile)\s*[:=]\s*(\+?[0-9][0-9()\s.\-]{5,})",
            )
            .unwrap(),
        }
    }

    pub fn company(&self, text: &str) -> String {
        if let Some(caps) = self.company_label.captures(text) {
            return caps[1].trim().to_string();
        }
        self.company_hiring
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default()
    }

    pub fn recruiter(&self, text: &str) -> RecruiterContact {
        let name = self
            .name_label
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();

        let email = self
            .email_label
            .captures(text)
            .or_else(|| self.bare_email_line.captures(text))
            .map(|caps| caps[1].trim().to_string())
            .filter(|email| !email.to_lowercase().contains(PLATFORM_DOMAIN_MARKER))
            .unwrap_or_default();

        let phone = self
            .phone_label
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();

        RecruiterContact { name, email, phone }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_label() {
        let extractor = ContactExtractor::new();
        assert_eq!(extractor.company("Client: First National Bank\nRole: DBA"), "First National Bank");
        assert_eq!(extractor.company("Employer = Acme Corp"), "Acme Corp");
    }

    #[test]
    fn test_company_is_hiring() {
        let extractor = ContactExtractor::new();
        assert_eq!(
            extractor.company("Innovation Labs is hiring for React Developer"),
            "Innovation Labs"
        );
        assert_eq!(extractor.company("nobody mentioned"), "");
    }

    #[test]
    fn test_recruiter_labels() {
        let extractor = ContactExtractor::new();
        let text = "Recruiter: Emily Watson\nEmail: emily@innovationlabs.com\nPhone: 555-111-2222";
        let contact = extractor.recruiter(text);
        assert_eq!(contact.name, "Emily Watson");
        assert_eq!(contact.email, "emily@innovationlabs.com");
        assert_eq!(contact.phone, "555-111-2222");
    }

    #[test]
    fn test_poc_and_cell_labels() {
        let extractor = ContactExtractor::new();
        let contact = extractor.recruiter("POC: Raj Patel\nCell: (312) 555-0188");
        assert_eq!(contact.name, "Raj Patel");
        assert_eq!(contact.phone, "(312) 555-0188");
    }

    #[test]
    fn test_standalone_email_fallback() {
        let extractor = ContactExtractor::new();
        let contact = extractor.recruiter("Great role\nsend resumes below\nhiring@staffco.com\nthanks");
        assert_eq!(contact.email, "hiring@staffco.com");
    }

    #[test]
    fn test_platform_email_discarded() {
        let extractor = ContactExtractor::new();
        let contact = extractor.recruiter("Email: noreply@jobdesk.io");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn test_missing_contact_is_empty() {
        let extractor = ContactExtractor::new();
        assert_eq!(extractor.recruiter("nothing labeled"), RecruiterContact::default());
    }
}
