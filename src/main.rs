use anyhow::Context;
use boj_scaffold::cli::Cli;
use boj_scaffold::configuration::get_configuration;
use boj_scaffold::pipeline::PipelineDriver;
use boj_scaffold::render::ContentRenderer;
use boj_scaffold::solved_ac::SolvedAcClient;
use boj_scaffold::summary::MarkdownTable;
use boj_scaffold::telemetry::{get_subscriber, init_subscriber};
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

/// Exit status when some, but not all, problems could be written.
const PARTIAL_FAILURE: u8 = 6;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from here.
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Get config settings
    let configuration = get_configuration().context("Failed to read configuration.")?;

    // Set up tracing telemetry. Logs go to stderr so stdout only carries the summary.
    let subscriber = get_subscriber(configuration.log_level.clone(), std::io::stderr);
    init_subscriber(subscriber)?;

    for flag in cli.ignored_flags() {
        tracing::warn!("{} is not supported yet and will be ignored", flag);
        println!("{} is not supported yet; ignoring it.", flag);
    }

    let working_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let request = cli.into_request(&working_dir);

    let client = SolvedAcClient::new(&configuration.solved_ac)
        .context("Failed to build the solved.ac client")?;
    let driver = PipelineDriver::new(client, MarkdownTable::default(), ContentRenderer::today());

    let mut stdout = std::io::stdout().lock();
    match driver.run(&request, &mut stdout) {
        Ok(report) if report.is_complete() => Ok(ExitCode::SUCCESS),
        Ok(_) => Ok(ExitCode::from(PARTIAL_FAILURE)),
        Err(e) => {
            tracing::error!(error = ?e, "Run failed");
            println!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                println!("  caused by: {}", cause);
                source = cause.source();
            }
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
