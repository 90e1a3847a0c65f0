// Entrypoint for the submission tool.
// - Validates the injected configuration before asking the user anything.
// - Hands a terminal prompt, the working-directory logs and an HTTP client
//   to the UI session, then prints how it went.

use anyhow::Context;
use clap::Parser;
use mp2_submit::artifact::LogDirectory;
use mp2_submit::config::load_configuration;
use mp2_submit::prompt::TerminalPrompt;
use mp2_submit::startup::check_working_directory;
use mp2_submit::transport::SubmissionClient;
use mp2_submit::ui;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const CONTACT_STAFF: &str =
    "Couldn't read submission part ID data. Please contact the course staff about this.";

/// Submit the MP2 test logs for grading.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Check the injected assignment configuration and exit.
    #[arg(long)]
    validate_injection: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr; stdout is reserved for the user-facing flow.
    // RUST_LOG raises verbosity, e.g. RUST_LOG=mp2_submit=debug
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("Failed to install logger")?;

    let args = Args::parse();
    if args.validate_injection {
        load_configuration().context(CONTACT_STAFF)?;
        return Ok(ExitCode::SUCCESS);
    }

    check_working_directory(Path::new("."))?;
    let config = load_configuration().context(CONTACT_STAFF)?;

    ui::display_prereqs_notice();

    let client = SubmissionClient::coursera().context("Failed to build HTTP client")?;
    let outcome = ui::run_session(
        &config,
        &mut TerminalPrompt,
        &LogDirectory::current(),
        &client,
    )?;

    ui::report(&outcome, &mut io::stdout().lock())?;
    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
