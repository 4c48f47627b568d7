use crate::classify::{Classification, FileEntry, NamePattern};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One planned rename: old path paired with the target path carrying a
/// freshly allocated index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub index: u64,
}

/// Harvest the indices already taken by reserved files.
///
/// Duplicate indices in the listing collapse to one set member; the
/// allocator only needs to know which values are off-limits.
pub fn used_indices(classification: &Classification) -> BTreeSet<u64> {
    classification
        .reserved
        .iter()
        .filter_map(|entry| entry.index)
        .collect()
}

/// Assign the smallest unused non-negative indices to the pending files, in
/// input order, and pair each with its target path under `dir`.
///
/// For a fixed pending order and used set the result is deterministic: the k
/// pending files receive exactly the k smallest integers not in `used`, in
/// increasing order.
pub fn allocate_indices(
    dir: &Path,
    pattern: &NamePattern,
    pending: &[FileEntry],
    used: &BTreeSet<u64>,
) -> Vec<RenameEntry> {
    let mut used = used.clone();
    let mut candidate: u64 = 0;
    let mut entries = Vec::with_capacity(pending.len());

    for file in pending {
        while used.contains(&candidate) {
            candidate += 1;
        }
        let new_name = pattern.filename_for(candidate);
        entries.push(RenameEntry {
            old_path: dir.join(&file.name),
            new_path: dir.join(&new_name),
            old_name: file.name.clone(),
            new_name,
            index: candidate,
        });
        used.insert(candidate);
        candidate += 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MatchMode;

    fn pending(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry {
                name: (*n).to_string(),
                index: None,
            })
            .collect()
    }

    fn pattern(prefix: &str) -> NamePattern {
        NamePattern::new(prefix, crate::DEFAULT_INDEX_PATTERN, MatchMode::Loose).unwrap()
    }

    #[test]
    fn fills_gaps_with_smallest_unused_indices() {
        let used: BTreeSet<u64> = [0, 2].into_iter().collect();
        let entries = allocate_indices(
            Path::new("/data"),
            &pattern("Document"),
            &pending(&["notes.txt", "a.txt"]),
            &used,
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].new_name, "Document_1.txt");
        assert_eq!(entries[1].new_name, "Document_3.txt");
        assert_eq!(entries[0].old_path, Path::new("/data/notes.txt"));
        assert_eq!(entries[1].new_path, Path::new("/data/Document_3.txt"));
    }

    #[test]
    fn empty_pending_produces_empty_mapping() {
        let entries = allocate_indices(
            Path::new("/data"),
            &pattern("file"),
            &[],
            &BTreeSet::new(),
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn counts_from_zero_when_nothing_is_used() {
        let entries = allocate_indices(
            Path::new("/data"),
            &pattern("file"),
            &pending(&["x.txt", "y.txt", "z.txt"]),
            &BTreeSet::new(),
        );
        let indices: Vec<u64> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn used_indices_collapses_duplicates() {
        let classification = Classification {
            reserved: vec![
                FileEntry {
                    name: "file_1.txt".to_string(),
                    index: Some(1),
                },
                FileEntry {
                    name: "old_file_1.txt".to_string(),
                    index: Some(1),
                },
            ],
            pending: vec![],
        };
        let used = used_indices(&classification);
        assert_eq!(used.len(), 1);
        assert!(used.contains(&1));
    }
}
