use super::FetchError;
use crate::domain::{Level, ProblemRecord};
use serde::Deserialize;

const TAG_LANGUAGE: &str = "ko";

/// A Problem object from the solved.ac API, reduced to the fields we use.
/// Unofficial documentation: https://solvedac.github.io/unofficial-documentation
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct SolvedProblem {
    problem_id: u64,
    title_ko: String,
    level: i64,
    tags: Option<Vec<SolvedTag>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SolvedTag {
    display_names: Vec<DisplayName>,
}

#[derive(Deserialize, Debug)]
struct DisplayName {
    language: String,
    name: String,
}

/// Titles arrive HTML-escaped, e.g. `A &amp; B`.
/// Only entities are decoded; anything that looks like markup is kept as text.
fn decode_html_entities(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

/// Korean display names of every tag, in response order.
fn korean_tag_names(tags: Option<Vec<SolvedTag>>) -> Vec<String> {
    tags.unwrap_or_default()
        .into_iter()
        .flat_map(|tag| tag.display_names)
        .filter(|display| display.language == TAG_LANGUAGE)
        .map(|display| display.name)
        .collect()
}

impl TryFrom<SolvedProblem> for ProblemRecord {
    type Error = FetchError;

    /// Checks the integrity of our API response and convert it into a more convenient format.
    fn try_from(json_problem: SolvedProblem) -> Result<Self, Self::Error> {
        let problem_id = json_problem.problem_id;
        let level = Level::parse(json_problem.level)
            .map_err(|level| FetchError::UnknownTier { problem_id, level })?;
        Ok(Self::new(
            problem_id,
            decode_html_entities(&json_problem.title_ko),
            level,
            korean_tag_names(json_problem.tags),
        ))
    }
}
