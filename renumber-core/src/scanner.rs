use crate::error::Error;
use std::fs;
use std::path::Path;

/// Validate `dir` and list the eligible filenames inside it.
///
/// Eligible means: a regular file directly inside `dir` whose name ends in
/// `.txt` and does not start with `.` (hidden files such as `.DS_Store` are
/// skipped). The listing is sorted lexicographically so classification and
/// index allocation are reproducible across platforms; OS directory order is
/// not stable.
///
/// No side effects. Fails with [`Error::NotADirectory`] when `dir` is missing
/// or not a directory, and [`Error::NoEligibleFiles`] when the filtered
/// listing is empty.
pub fn scan_directory(dir: &Path) -> Result<Vec<String>, Error> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<String> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".txt") && !name.starts_with('.'))
        .collect();

    files.sort();

    if files.is_empty() {
        return Err(Error::NoEligibleFiles(dir.to_path_buf()));
    }

    Ok(files)
}
