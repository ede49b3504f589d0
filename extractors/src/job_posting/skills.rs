use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Canonical skill vocabulary: lowercase match key to display name.
///
/// Slice order is scan order, which fixes the insertion order of
/// dictionary-scan hits and keeps extraction deterministic.
const SKILL_DICTIONARY: &[(&str, &str)] = &[
    // Languages
    ("java", "Java"),
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("c#", "C#"),
    ("c++", "C++"),
    ("golang", "Go"),
    ("rust", "Rust"),
    ("kotlin", "Kotlin"),
    ("swift", "Swift"),
    ("ruby", "Ruby"),
    ("php", "PHP"),
    ("scala", "Scala"),
    ("sql", "SQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("bash", "Bash"),
    ("powershell", "PowerShell"),
    // Frontend
    ("react", "React"),
    ("angular", "Angular"),
    ("vue", "Vue"),
    ("next.js", "Next.js"),
    ("redux", "Redux"),
    ("sass", "Sass"),
    ("tailwind", "Tailwind"),
    ("jquery", "jQuery"),
    // Backend frameworks
    ("node", "Node.js"),
    ("node.js", "Node.js"),
    ("spring", "Spring"),
    ("spring boot", "Spring Boot"),
    ("hibernate", "Hibernate"),
    (".net", ".NET"),
    ("asp.net", "ASP.NET"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("fastapi", "FastAPI"),
    ("express", "Express"),
    ("rails", "Rails"),
    ("laravel", "Laravel"),
    ("graphql", "GraphQL"),
    ("rest", "REST"),
    ("grpc", "gRPC"),
    ("microservices", "Microservices"),
    // Cloud and DevOps
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("jenkins", "Jenkins"),
    ("git", "Git"),
    ("ci/cd", "CI/CD"),
    ("devops", "DevOps"),
    ("linux", "Linux"),
    ("unix", "Unix"),
    // Data stores and pipelines
    ("mysql", "MySQL"),
    ("postgres", "PostgreSQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("oracle", "Oracle"),
    ("redis", "Redis"),
    ("elasticsearch", "Elasticsearch"),
    ("cassandra", "Cassandra"),
    ("dynamodb", "DynamoDB"),
    ("snowflake", "Snowflake"),
    ("databricks", "Databricks"),
    ("kafka", "Kafka"),
    ("rabbitmq", "RabbitMQ"),
    ("spark", "Spark"),
    ("hadoop", "Hadoop"),
    ("airflow", "Airflow"),
    ("etl", "ETL"),
    // Analytics and enterprise platforms
    ("tableau", "Tableau"),
    ("power bi", "Power BI"),
    ("salesforce", "Salesforce"),
    ("sap", "SAP"),
    ("servicenow", "ServiceNow"),
    ("jira", "Jira"),
    ("splunk", "Splunk"),
    ("grafana", "Grafana"),
    ("prometheus", "Prometheus"),
    // Testing
    ("selenium", "Selenium"),
    ("cypress", "Cypress"),
    ("jest", "Jest"),
    ("junit", "JUnit"),
    ("pytest", "pytest"),
    // Process and domain
    ("agile", "Agile"),
    ("scrum", "Scrum"),
    ("machine learning", "Machine Learning"),
    ("data engineering", "Data Engineering"),
    ("production support", "Production Support"),
    ("financial services", "Financial Services"),
];

/// Stop words that make a block token worthless on their own
const NOISE_WORDS: &[&str] = &[
    "must", "have", "required", "require", "requirements", "plus", "nice", "good", "to", "with",
    "and", "or", "the", "a", "an", "of", "in", "on", "for", "is", "are", "be", "we", "you", "our",
    "your", "they", "their", "skills", "skill", "experience", "years", "year", "strong",
    "knowledge", "working", "hands", "ability", "etc",
];

struct SkillMatcher {
    canonical: &'static str,
    pattern: Regex,
}

/// Skills extraction: three merged strategies over the cleaned full text.
///
/// 1. Dictionary scan with token boundaries.
/// 2. Required-skills block capture ("Must Have:", "Tech Stack:", ...).
/// 3. Nice-to-have block capture ("Plus:", "Preferred:", ...).
///
/// Closed vocabulary: block tokens not in the dictionary are dropped. The
/// result keeps each canonical name once, in first-seen order across all
/// three strategies.
pub struct SkillsExtractor {
    matchers: Vec<SkillMatcher>,
    lookup: HashMap<&'static str, &'static str>,
    noise: HashSet<&'static str>,
    required_header: Regex,
    bonus_header: Regex,
    header_line: Regex,
    token_split: Regex,
    bullet_prefix: Regex,
    paren: Regex,
}

impl SkillsExtractor {
    pub fn new() -> Self {
        let matchers = SKILL_DICTIONARY
            .iter()
            .map(|(key, canonical)| SkillMatcher {
                canonical,
                pattern: Regex::new(&format!(
                    r"(?i)(?:^|[^a-z0-9]){}(?:$|[^a-z0-9])",
                    regex::escape(key)
                ))
                .unwrap(),
            })
            .collect();

        Self {
            matchers,
            lookup: SKILL_DICTIONARY.iter().copied().collect(),
            noise: NOISE_WORDS.iter().copied().collect(),
            required_header: Regex::new(
                r"(?im)^\s*(?:must[\s-]?have|mandatory\s+skills?|skills?\s+required|required\s+skills?|required|technologies|tech\s+stack|key\s+skills?|knowledge\s*/\s*skills?)\s*:?",
            )
            .unwrap(),
            bonus_header: Regex::new(
                r"(?im)^\s*(?:plus|nice[\s-]to[\s-]have|good[\s-]to[\s-]have|preferred(?:\s*/\s*recommended)?|bonus)\s*:?",
            )
            .unwrap(),
            // A capitalized label line ends the block
            header_line: Regex::new(r"^[A-Z][A-Za-z0-9 /&'+-]*:\s*$").unwrap(),
            token_split: Regex::new(r"[,;|\n•·]").unwrap(),
            bullet_prefix: Regex::new(r"^[\s\-–—*•]+").unwrap(),
            paren: Regex::new(r"\([^)]*\)").unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut skills = Vec::new();
        let mut seen = HashSet::new();

        for matcher in &self.matchers {
            if matcher.pattern.is_match(text) {
                push_unique(&mut skills, &mut seen, matcher.canonical);
            }
        }

        for block in self.capture_blocks(text, &self.required_header) {
            self.collect_block_tokens(&block, &mut skills, &mut seen);
        }
        for block in self.capture_blocks(text, &self.bonus_header) {
            self.collect_block_tokens(&block, &mut skills, &mut seen);
        }

        skills
    }

    /// Text following a header match, up to a blank line, the next
    /// capitalized label line, or end of text. The remainder of the header's
    /// own line counts ("Skills Required: Java, Python").
    fn capture_blocks(&self, text: &str, header: &Regex) -> Vec<String> {
        let mut blocks = Vec::new();

        for m in header.find_iter(text) {
            let rest = &text[m.end()..];
            let mut block = String::new();

            for (i, line) in rest.split('\n').enumerate() {
                let trimmed = line.trim();
                if i > 0 && trimmed.is_empty() {
                    break;
                }
                if i > 0 && self.header_line.is_match(trimmed) {
                    break;
                }
                if !trimmed.is_empty() {
                    block.push_str(trimmed);
                    block.push('\n');
                }
            }

            if !block.is_empty() {
                blocks.push(block);
            }
        }

        blocks
    }

    fn collect_block_tokens(&self, block: &str, skills: &mut Vec<String>, seen: &mut HashSet<String>) {
        for raw in self.token_split.split(block) {
            for part in raw.split('+') {
                let token = self.bullet_prefix.replace(part, "");
                let token = self.paren.replace_all(&token, "");
                let token = token.trim();

                if token.len() < 2 || token.len() > 60 {
                    continue;
                }
                if self.is_all_noise(token) {
                    continue;
                }
                if let Some(canonical) = self.lookup.get(token.to_lowercase().as_str()) {
                    push_unique(skills, seen, canonical);
                }
            }
        }
    }

    fn is_all_noise(&self, token: &str) -> bool {
        let mut words = token.split_whitespace().peekable();
        if words.peek().is_none() {
            return true;
        }
        words.all(|word| self.noise.contains(word.to_lowercase().as_str()))
    }
}

impl Default for SkillsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(skills: &mut Vec<String>, seen: &mut HashSet<String>, canonical: &str) {
    if seen.insert(canonical.to_lowercase()) {
        skills.push(canonical.to_string());
    }
}
