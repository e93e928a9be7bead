use std::path::{Path, PathBuf};

/// What the user asked for: which problems, and where to put them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    identifiers: Vec<String>,
    output_directory: PathBuf,
}

impl GenerationRequest {
    /// Builds a request relative to `working_dir`. Blank identifiers are dropped;
    /// they are otherwise kept as text, since the lookup API is what rejects bad ids.
    pub fn parse(
        identifiers: impl IntoIterator<Item = String>,
        output: Option<&str>,
        working_dir: &Path,
    ) -> Self {
        let identifiers = identifiers
            .into_iter()
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .collect();
        let output_directory = match output {
            Some(dir) if !dir.is_empty() => working_dir.join(dir),
            _ => working_dir.to_path_buf(),
        };
        Self {
            identifiers,
            output_directory,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}
