// UI layer: runs one submission session in the terminal and renders its
// outcome. The flow is synchronous: prompt, read logs, post, report.

use crate::artifact::ArtifactSource;
use crate::config::Configuration;
use crate::payload::build_submission;
use crate::prompt::{prompt_credentials, LinePrompt};
use crate::transport::{SubmissionResult, Transport};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use tracing::info;

/// How a session ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted,
    Cancelled,
    Rejected(Rejection),
}

/// Why a sent submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The grader refused the token.
    Auth { status: u16 },
    /// The grader could not be reached or answered unexpectedly.
    Transport { message: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// Shown once before prompting. Mostly aimed at MOOC learners.
pub fn display_prereqs_notice() {
    println!();
    println!("REQUIREMENTS: To work on this assignment, we assume you already know how to");
    println!("program in C++ and have a working Bash shell environment (Linux, Windows 10");
    println!("with WSL, or macOS with developer tools). If these are unfamiliar, take an");
    println!("introductory course first; the University of Illinois offers some on Coursera.");
    println!();
}

/// Run one submission attempt.
///
/// An empty email stops the session before any log file is opened or any
/// request is made. A log that cannot be read is returned as an error and
/// nothing is sent.
pub fn run_session<P, S, T>(
    config: &Configuration,
    prompt: &mut P,
    artifacts: &S,
    transport: &T,
) -> Result<Outcome>
where
    P: LinePrompt + ?Sized,
    S: ArtifactSource + ?Sized,
    T: Transport + ?Sized,
{
    println!("==\n== Submitting Solutions \n==");

    let credentials = prompt_credentials(prompt).context("Failed to read credentials")?;
    if credentials.is_cancelled() {
        info!("submission cancelled at email prompt");
        return Ok(Outcome::Cancelled);
    }

    let payload = build_submission(config, &credentials, artifacts)
        .context("Could not collect the test logs to submit")?;

    // spinner is a no-op when stderr is not a terminal
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Submitting...");
    spinner.tick();
    let result = transport.submit(&payload);
    spinner.finish_and_clear();

    Ok(match result {
        SubmissionResult::Success => Outcome::Submitted,
        SubmissionResult::AuthFailure { status } => Outcome::Rejected(Rejection::Auth { status }),
        SubmissionResult::TransportError { message } => {
            Outcome::Rejected(Rejection::Transport { message })
        }
    })
}

/// Print the final human-readable status of a session.
pub fn report<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::Submitted => {
            writeln!(out, "\n\nSUBMISSION FINISHED!\nYou can check your grade on Coursera.\n")
        }
        Outcome::Cancelled => writeln!(out, "!! Submission Cancelled"),
        Outcome::Rejected(Rejection::Auth { .. }) => {
            writeln!(
                out,
                "ERROR:\nSubmission authorization failed. Please check that your submission token is valid."
            )?;
            writeln!(
                out,
                "You can generate a new submission token on the Coursera instructions page\nfor this assignment."
            )
        }
        Outcome::Rejected(Rejection::Transport { message }) => {
            writeln!(out, "ERROR:\nSubmission could not be delivered: {}", message)?;
            writeln!(out, "Check your network connection and run the submission again.")
        }
    }
}
