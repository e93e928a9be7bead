use crate::domain::ProblemRecord;
use chrono::NaiveDate;

/// Starter Python solution. Placeholders are replaced literally, in the order of
/// `ContentRenderer::code_stub`.
const CODE_TEMPLATE: &str = "
\"\"\"
    문제 이름: <problem_name>
    문제 번호: <problem_id>
    문제 링크: <url>
    난이도: <difficulty>
    태그: <tags>
\"\"\"
import sys 

def input(): return sys.stdin.readline().rstrip()
";

/// The two documents generated for every problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProblem {
    pub code_stub: String,
    pub metadata: String,
}

/// Renders problem records into files. The date stamped into metadata is fixed
/// at construction so that output is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct ContentRenderer {
    today: NaiveDate,
}

impl ContentRenderer {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// A renderer stamped with the local calendar date.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn render(&self, problem: &ProblemRecord) -> RenderedProblem {
        RenderedProblem {
            code_stub: self.code_stub(problem),
            metadata: self.metadata(problem),
        }
    }

    pub fn code_stub(&self, problem: &ProblemRecord) -> String {
        CODE_TEMPLATE
            .replace("<problem_name>", problem.name())
            .replace("<problem_id>", &problem.id().to_string())
            .replace("<url>", &problem.url())
            .replace("<difficulty>", problem.difficulty())
            .replace("<tags>", &problem.joined_tags())
    }

    /// YAML front matter for static-site and note-taking tools.
    pub fn metadata(&self, problem: &ProblemRecord) -> String {
        let tags = if problem.tags().is_empty() {
            String::new()
        } else {
            problem
                .tags()
                .iter()
                .map(|tag| format!("\n  - {}", tag))
                .collect()
        };

        let lines = [
            "---".to_owned(),
            format!("file: \"{}.md\"", problem.id()),
            format!("name: \"{}\"", problem.name()),
            format!("src: \"{}\"", problem.url()),
            format!("tags: {}", tags),
            "done: false".to_owned(),
            "draft: false".to_owned(),
            format!("level: {}", problem.level()),
            format!("difficulty: \"{}\"", problem.difficulty()),
            format!("date: {}", self.today.format("%Y-%m-%d")),
            "---\n".to_owned(),
        ];
        lines.join("\n")
    }
}
