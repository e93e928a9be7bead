use crate::request::GenerationRequest;
use clap::Parser;
use std::path::Path;

/// Fetch Baekjoon problems from solved.ac and create a folder for each one.
#[derive(Parser, Debug)]
#[command(name = "boj-scaffold", version, about)]
pub struct Cli {
    /// Problem numbers, e.g. `-p 1052 3023`
    #[arg(short, long, num_args = 1.., required = true, value_name = "ID")]
    pub problems: Vec<String>,

    /// Directory (relative to the current one) to create problem folders in
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// Pick problems at random between two levels (not supported yet)
    #[arg(short, long, num_args = 2, value_names = ["MIN_LEVEL", "MAX_LEVEL"])]
    pub random: Option<Vec<u8>>,

    /// How many random problems to pick (not supported yet)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,
}

impl Cli {
    /// Random selection is accepted on the command line but has no effect yet.
    pub fn ignored_flags(&self) -> Vec<&'static str> {
        let mut ignored = vec![];
        if self.random.is_some() {
            ignored.push("--random");
        }
        if self.count.is_some() {
            ignored.push("--count");
        }
        ignored
    }

    pub fn into_request(self, working_dir: &Path) -> GenerationRequest {
        GenerationRequest::parse(self.problems, self.output.as_deref(), working_dir)
    }
}
