use super::Level;

const PROBLEM_PAGE_BASE: &str = "https://www.acmicpc.net/problem/";

/// The Baekjoon page for a problem.
pub fn problem_url(problem_id: u64) -> String {
    format!("{}{}", PROBLEM_PAGE_BASE, problem_id)
}

/// Canonical metadata for one problem, normalized from a lookup response.
///
/// The difficulty label and page URL are not stored: they are always derived from
/// `level` and `id`, so they can never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    id: u64,
    name: String,
    level: Level,
    tags: Vec<String>,
}

impl ProblemRecord {
    pub fn new(id: u64, name: impl Into<String>, level: Level, tags: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            tags,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn difficulty(&self) -> &'static str {
        self.level.difficulty()
    }

    pub fn url(&self) -> String {
        problem_url(self.id)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags as they appear in the stub header and the summary table.
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}
