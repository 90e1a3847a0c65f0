// Startup checks that must pass before anything is asked of the user.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File that marks the assignment's project directory.
pub const ANCHOR_FILE: &str = "Application.cpp";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Please run this program from the same directory where {} is (looked in {}).", ANCHOR_FILE, dir.display())]
    WrongDirectory { dir: PathBuf },
}

/// Confirm that `dir` is the assignment's project directory.
pub fn check_working_directory(dir: &Path) -> Result<(), StartupError> {
    if dir.join(ANCHOR_FILE).is_file() {
        Ok(())
    } else {
        Err(StartupError::WrongDirectory {
            dir: dir.to_path_buf(),
        })
    }
}
