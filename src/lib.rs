pub mod cli;
pub mod configuration;
pub mod domain;
pub mod pipeline;
pub mod render;
pub mod request;
pub mod solved_ac;
pub mod summary;
pub mod telemetry;
