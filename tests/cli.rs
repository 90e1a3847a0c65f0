//! Runs the `submit` binary the way a student or the release build would.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_submit(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_submit"));
    cmd.args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// =============================================================================
// SECTION 1: --validate-injection
// =============================================================================

mod validate_injection {
    use super::*;

    #[test]
    fn valid_configuration_exits_silently() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_submit(dir.path(), &["--validate-injection"], &[]);

        assert!(out.status.success());
        assert!(out.stdout.is_empty());
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn works_outside_the_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!dir.path().join("Application.cpp").exists());

        let out = run_submit(dir.path(), &["--validate-injection"], &[]);
        assert!(out.status.success());
    }

    #[test]
    fn rust_log_enables_debug_events() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_submit(
            dir.path(),
            &["--validate-injection"],
            &[("RUST_LOG", "mp2_submit=debug")],
        );

        assert!(out.status.success());
        assert!(out.stdout.is_empty());
        assert!(text(&out.stderr).contains("loaded injected configuration"));
    }
}

// =============================================================================
// SECTION 2: NORMAL RUNS
// =============================================================================

mod normal_run {
    use super::*;

    #[test]
    fn wrong_directory_fails_before_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_submit(dir.path(), &[], &[]);

        assert!(!out.status.success());
        assert!(text(&out.stderr).contains("Application.cpp"));
        let stdout = text(&out.stdout);
        assert!(!stdout.contains("Login (Email address)"));
        assert!(!stdout.contains("Submitting Solutions"));
    }

    #[test]
    fn empty_input_cancels_without_reading_logs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Application.cpp"), "int main() {}").unwrap();
        // no dbg.*.log files: a read attempt would fail the run

        let out = run_submit(dir.path(), &[], &[]);

        assert!(out.status.success());
        let stdout = text(&out.stdout);
        assert!(stdout.contains("Login (Email address)"));
        assert!(stdout.contains("!! Submission Cancelled"));
    }
}
