// Artifact sources: where the per-part debug logs come from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to obtain the artifact for one part.
#[derive(Debug, Error)]
pub enum ArtifactReadError {
    #[error("no artifact for part #{index}")]
    Missing { index: usize },

    #[error("could not read artifact for part #{index} from {}", path.display())]
    Io {
        index: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ArtifactReadError {
    /// Ordinal position of the part whose artifact failed.
    pub fn index(&self) -> usize {
        match self {
            ArtifactReadError::Missing { index } | ArtifactReadError::Io { index, .. } => *index,
        }
    }
}

/// Supplies artifact text by part position.
pub trait ArtifactSource {
    fn read_artifact(&self, index: usize) -> Result<String, ArtifactReadError>;
}

/// Reads `dbg.<index>.log` files from a directory.
#[derive(Debug, Clone)]
pub struct LogDirectory {
    dir: PathBuf,
}

impl LogDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LogDirectory { dir: dir.into() }
    }

    /// The process working directory, where the grader's test run leaves its logs.
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn file_name(index: usize) -> String {
        format!("dbg.{}.log", index)
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(Self::file_name(index))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSource for LogDirectory {
    fn read_artifact(&self, index: usize) -> Result<String, ArtifactReadError> {
        let path = self.path_for(index);
        // read_to_string owns the handle for the duration of the call only
        let content = fs::read_to_string(&path).map_err(|source| ArtifactReadError::Io {
            index,
            path: path.clone(),
            source,
        })?;
        debug!(index, path = %path.display(), bytes = content.len(), "read artifact");
        Ok(content)
    }
}

/// Artifacts held in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifacts {
    contents: Vec<String>,
}

impl InMemoryArtifacts {
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InMemoryArtifacts {
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArtifactSource for InMemoryArtifacts {
    fn read_artifact(&self, index: usize) -> Result<String, ArtifactReadError> {
        self.contents
            .get(index)
            .cloned()
            .ok_or(ArtifactReadError::Missing { index })
    }
}
