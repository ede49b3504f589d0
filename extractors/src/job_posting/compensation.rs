use regex::Regex;

/// Compensation figures pulled from one posting
#[derive(Debug, Default, PartialEq)]
pub struct Compensation {
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub pay_per_hour: Option<f64>,
}

/// Hourly-rate and annual-range extraction.
///
/// The two patterns are independent passes: a posting quoting both an hourly
/// rate and a range populates both, and no reconciliation is attempted.
pub struct CompensationExtractor {
    hourly: Regex,
    range: Regex,
}

impl CompensationExtractor {
    pub fn new() -> Self {
        Self {
            hourly: Regex::new(r"(?i)\$\s*([\d,]+(?:\.\d+)?)\s*(?:/|per\s+)h(?:ou)?r").unwrap(),
            range: Regex::new(
                r"(?i)\$\s*([\d,]+(?:\.\d+)?)\s*k?\s*(?:-|–|—|to)\s*\$?\s*([\d,]+(?:\.\d+)?)\s*k?",
            )
            .unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> Compensation {
        let mut compensation = Compensation::default();

        if let Some(caps) = self.hourly.captures(text) {
            compensation.pay_per_hour = parse_amount(&caps[1]);
        }

        if let Some(caps) = self.range.captures(text) {
            compensation.salary_min = parse_amount(&caps[1]).map(scale_annual);
            compensation.salary_max = parse_amount(&caps[2]).map(scale_annual);
        }

        compensation
    }
}

impl Default for CompensationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_amount(amount: &str) -> Option<f64> {
    amount.replace(',', "").trim().parse().ok()
}

/// Figures under 1000 are quoted in thousands: "120-150" and "120k-150k"
/// both mean 120000-150000
fn scale_annual(value: f64) -> u32 {
    let scaled = if value < 1000.0 { value * 1000.0 } else { value };
    scaled.round() as u32
}
