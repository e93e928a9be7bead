mod level;
mod problem;
mod tier;

pub use level::Level;
pub use problem::{ProblemRecord, problem_url};
pub use tier::{MAX_LEVEL, tier_name};
