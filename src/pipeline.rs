use crate::domain::ProblemRecord;
use crate::render::{ContentRenderer, RenderedProblem};
use crate::request::GenerationRequest;
use crate::solved_ac::{FetchError, ProblemSource};
use crate::summary::{SUMMARY_HEADERS, SummaryTable, summary_rows};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const STUB_EXTENSION: &str = "py";
const METADATA_FILE_NAME: &str = "README.md";

/// Failures that stop the whole run.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("No problem identifiers were given")]
    InvalidRequest,
    #[error("Output directory {} does not exist", .0.display())]
    MissingOutputDirectory(PathBuf),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to write to the console")]
    Console(#[from] io::Error),
}

impl PipelineError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidRequest => 2,
            Self::MissingOutputDirectory(_) => 3,
            Self::Fetch(FetchError::InvalidRequest) => 2,
            Self::Fetch(FetchError::RemoteLookup(_)) => 4,
            Self::Fetch(FetchError::UnknownTier { .. }) => 5,
            Self::Console(_) => 1,
        }
    }
}

/// Failure to materialize a single problem. Other problems are unaffected.
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("Failed to create directory {}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct ProblemFailure {
    pub problem_id: u64,
    pub error: WriteError,
}

/// Outcome of a run that got as far as writing.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Problem directories that were fully written, in response order.
    pub generated: Vec<PathBuf>,
    pub failures: Vec<ProblemFailure>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Keeps only alphanumeric characters (in any script) of a problem name.
pub fn strip_to_alphanumeric(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// `[<id>]<name without symbols>`, e.g. `[1000]AB` for "A+B".
pub fn problem_directory_name(problem: &ProblemRecord) -> String {
    format!("[{}]{}", problem.id(), strip_to_alphanumeric(problem.name()))
}

fn write_file(path: PathBuf, contents: &str) -> Result<(), WriteError> {
    fs::write(&path, contents).map_err(|source| WriteError::WriteFile { path, source })
}

/// Creates the problem's directory under `root` if needed and (over)writes both files.
pub fn write_problem(
    root: &Path,
    problem: &ProblemRecord,
    rendered: &RenderedProblem,
) -> Result<PathBuf, WriteError> {
    let problem_dir = root.join(problem_directory_name(problem));
    if !problem_dir.is_dir() {
        fs::create_dir(&problem_dir).map_err(|source| WriteError::CreateDirectory {
            path: problem_dir.clone(),
            source,
        })?;
    }

    let stub_name = format!("{}.{}", problem.id(), STUB_EXTENSION);
    write_file(problem_dir.join(stub_name), &rendered.code_stub)?;
    write_file(problem_dir.join(METADATA_FILE_NAME), &rendered.metadata)?;
    Ok(problem_dir)
}

/// Validate, fetch, summarize, then write every problem.
pub struct PipelineDriver<S, T> {
    source: S,
    table: T,
    renderer: ContentRenderer,
}

impl<S: ProblemSource, T: SummaryTable> PipelineDriver<S, T> {
    pub fn new(source: S, table: T, renderer: ContentRenderer) -> Self {
        Self {
            source,
            table,
            renderer,
        }
    }

    /// Runs one request, writing progress and the summary table to `out`.
    ///
    /// The output directory itself is never created. Per-problem write failures are
    /// collected in the report instead of aborting the batch.
    #[tracing::instrument(
        name = "Generating problem workspaces",
        skip(self, request, out),
        fields(
            problems = request.identifiers().len(),
            output = %request.output_directory().display()
        )
    )]
    pub fn run(
        &self,
        request: &GenerationRequest,
        out: &mut impl Write,
    ) -> Result<RunReport, PipelineError> {
        if !request.is_valid() {
            return Err(PipelineError::InvalidRequest);
        }
        let root = request.output_directory();
        if !root.is_dir() {
            return Err(PipelineError::MissingOutputDirectory(root.to_path_buf()));
        }

        writeln!(out, "Generating problem files...")?;
        let problems = self.source.fetch(request.identifiers())?;

        let table = self.table.render(&SUMMARY_HEADERS, &summary_rows(&problems));
        writeln!(out, "{}", table)?;

        let mut report = RunReport::default();
        for problem in &problems {
            let rendered = self.renderer.render(problem);
            match write_problem(root, problem, &rendered) {
                Ok(dir) => {
                    tracing::info!("Wrote problem {} to {:?}", problem.id(), dir);
                    report.generated.push(dir);
                }
                Err(error) => {
                    tracing::warn!(problem_id = problem.id(), error = %error, "Skipping problem");
                    report.failures.push(ProblemFailure {
                        problem_id: problem.id(),
                        error,
                    });
                }
            }
        }

        writeln!(
            out,
            "Generated {} of {} problems in {}",
            report.generated.len(),
            problems.len(),
            root.display()
        )?;
        for failure in &report.failures {
            writeln!(out, "Problem {}: {}", failure.problem_id, failure.error)?;
        }
        Ok(report)
    }
}
