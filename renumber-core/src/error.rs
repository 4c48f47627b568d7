use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for a renumber run.
///
/// The first three are fatal before any filesystem mutation. Per-file rename
/// failures are not represented here: they are recorded in
/// [`crate::apply::RenameOutcome`] and never abort the batch.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{} does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no .txt files found in {}", .0.display())]
    NoEligibleFiles(PathBuf),

    /// The confirmation gate received a non-affirmative answer.
    #[error("aborted by user")]
    Aborted,

    /// Preflight found a rename target already present on disk.
    #[error("rename target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("invalid index pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the failure means the input was invalid before any work
    /// started (as opposed to the user declining or an internal fault).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory(_) | Self::NoEligibleFiles(_) | Self::Pattern { .. }
        )
    }
}
