mod lookup;

use crate::configuration::SolvedAcSettings;
use crate::domain::ProblemRecord;
use lookup::SolvedProblem;
use reqwest::blocking::Client;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("No problem identifiers were given")]
    InvalidRequest,
    #[error("Failed to look up problems on solved.ac")]
    RemoteLookup(#[from] reqwest::Error),
    #[error("Problem {problem_id} has level {level}, which is not a known tier")]
    UnknownTier { problem_id: u64, level: i64 },
}

/// Anything that can turn problem identifiers into normalized records.
pub trait ProblemSource {
    /// Records come back in the source's order, which need not match `identifiers`.
    fn fetch(&self, identifiers: &[String]) -> Result<Vec<ProblemRecord>, FetchError>;
}

/// Blocking client for the solved.ac batch lookup endpoint.
pub struct SolvedAcClient {
    client: Client,
    lookup_url: String,
}

impl SolvedAcClient {
    pub fn new(settings: &SolvedAcSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self::with_client(client, &settings.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            lookup_url: solved_ac_lookup_url(base_url),
        }
    }
}

fn solved_ac_lookup_url(base_url: &str) -> String {
    format!("{}/problem/lookup", base_url.trim_end_matches('/'))
}

impl ProblemSource for SolvedAcClient {
    /// One round trip for the whole batch.
    #[tracing::instrument(name = "Looking up problems on solved.ac", skip(self))]
    fn fetch(&self, identifiers: &[String]) -> Result<Vec<ProblemRecord>, FetchError> {
        if identifiers.is_empty() {
            return Err(FetchError::InvalidRequest);
        }
        let response = self
            .client
            .get(&self.lookup_url)
            .query(&[("problemIds", identifiers.join(","))])
            .send()?
            .error_for_status()?;
        let packet: Vec<SolvedProblem> = response.json()?;
        tracing::debug!("solved.ac returned {} problems", packet.len());

        packet.into_iter().map(ProblemRecord::try_from).collect()
    }
}
