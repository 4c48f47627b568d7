use crate::error::Error;
use regex::Regex;

/// How strictly a filename must match `<prefix>_<index>.txt` to count as
/// already conforming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Substring search: the pattern may appear anywhere in the name, so
    /// `old_Document_5.txt` is treated as conforming. Mirrors the reference
    /// behavior and is the default.
    #[default]
    Loose,
    /// The entire filename must equal `<prefix>_<index>.txt`.
    Anchored,
}

/// Compiled recognizer for `<prefix>_(<index pattern>)\.txt`.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    prefix: String,
}

impl NamePattern {
    pub fn new(prefix: &str, index_pattern: &str, mode: MatchMode) -> Result<Self, Error> {
        let body = format!("{}_({})\\.txt", regex::escape(prefix), index_pattern);
        let pattern = match mode {
            MatchMode::Loose => body,
            MatchMode::Anchored => format!("^{body}$"),
        };
        let regex = Regex::new(&pattern).map_err(|source| Error::Pattern {
            pattern: index_pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            prefix: prefix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract the captured index from `name`, or `None` when the name does
    /// not conform. A captured digit run too large for `u64` is treated as
    /// non-conforming rather than panicking.
    pub fn extract_index(&self, name: &str) -> Option<u64> {
        let captures = self.regex.captures(name)?;
        captures.get(1)?.as_str().parse().ok()
    }

    /// The canonical filename for `index` under this prefix.
    pub fn filename_for(&self, index: u64) -> String {
        format!("{}_{}.txt", self.prefix, index)
    }
}

/// One filename within the target directory, with the index extracted from
/// it when the name conforms to the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub index: Option<u64>,
}

/// Disjoint partition of a directory listing: every input name lands in
/// exactly one bucket, input order preserved within each.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Already conform to the naming scheme; left untouched.
    pub reserved: Vec<FileEntry>,
    /// Will receive a newly allocated index.
    pub pending: Vec<FileEntry>,
}

/// Partition `files` into reserved and pending entries.
pub fn classify_files(files: &[String], pattern: &NamePattern) -> Classification {
    let mut classification = Classification::default();

    for name in files {
        match pattern.extract_index(name) {
            Some(index) => classification.reserved.push(FileEntry {
                name: name.clone(),
                index: Some(index),
            }),
            None => classification.pending.push(FileEntry {
                name: name.clone(),
                index: None,
            }),
        }
    }

    classification
}
