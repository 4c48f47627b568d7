use crate::allocate::RenameEntry;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Outcome of one attempted rename.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutcome {
    pub old_name: String,
    pub new_name: String,
    pub renamed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Success/failure counters for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub succeeded: usize,
    pub failed: usize,
}

impl ApplyStats {
    pub fn tally(outcomes: &[RenameOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.renamed).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// Report the planned targets that already exist on disk.
///
/// Allocation never reuses a reserved index, so a collision can only come
/// from something the scanner did not list (a hidden file, a non-.txt file,
/// a directory). Used by the opt-in preflight check before any mutation.
pub fn detect_collisions(entries: &[RenameEntry]) -> Vec<PathBuf> {
    entries
        .iter()
        .filter(|entry| entry.new_path != entry.old_path && entry.new_path.exists())
        .map(|entry| entry.new_path.clone())
        .collect()
}

/// Attempt a single rename, capturing the error instead of propagating it.
///
/// A mapping whose target equals its source is a no-op success; the rename
/// syscall is not invoked.
pub fn rename_entry(entry: &RenameEntry) -> RenameOutcome {
    if entry.old_path == entry.new_path {
        return RenameOutcome {
            old_name: entry.old_name.clone(),
            new_name: entry.new_name.clone(),
            renamed: true,
            error: None,
        };
    }

    match fs::rename(&entry.old_path, &entry.new_path) {
        Ok(()) => RenameOutcome {
            old_name: entry.old_name.clone(),
            new_name: entry.new_name.clone(),
            renamed: true,
            error: None,
        },
        Err(e) => RenameOutcome {
            old_name: entry.old_name.clone(),
            new_name: entry.new_name.clone(),
            renamed: false,
            error: Some(e.to_string()),
        },
    }
}

/// Apply every entry in order. One failure never aborts the remaining
/// entries; indices were allocated before any mutation began, so the rest of
/// the mapping stays valid.
pub fn apply_renames(entries: &[RenameEntry]) -> Vec<RenameOutcome> {
    entries.iter().map(rename_entry).collect()
}
