use crate::allocate::{allocate_indices, used_indices};
use crate::apply::{detect_collisions, rename_entry, ApplyStats};
use crate::classify::{classify_files, MatchMode, NamePattern};
use crate::confirm::Confirmer;
use crate::error::Error;
use crate::output::RunResult;
use crate::preview::{format_outcome_line, render_plan, should_use_color, Preview};
use crate::scanner::scan_directory;
use anyhow::{Context, Result};
use std::path::Path;

/// Options for a run operation beyond the folder and prefix.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Regex capturing the index inside a conforming filename.
    pub pattern: String,
    pub mode: MatchMode,
    pub preview: Preview,
    /// Plan and preview only, mutate nothing.
    pub dry_run: bool,
    /// Abort before any rename when a target already exists on disk.
    pub preflight: bool,
    /// Skip the confirmation gate.
    pub auto_approve: bool,
    pub use_color: Option<bool>,
    /// Suppress preview and per-file progress lines on stdout.
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pattern: crate::DEFAULT_INDEX_PATTERN.to_string(),
            mode: MatchMode::Loose,
            preview: Preview::Table,
            dry_run: false,
            preflight: false,
            auto_approve: false,
            use_color: None,
            quiet: false,
        }
    }
}

/// Run the full rename pipeline against `folder`.
///
/// Scan, classify, allocate, preview, confirm, then apply. Returns the
/// structured result plus the rendered preview, if any. Fatal errors
/// ([`Error::NotADirectory`], [`Error::NoEligibleFiles`], [`Error::Aborted`],
/// [`Error::TargetExists`]) occur before any filesystem mutation; per-file
/// rename failures are recorded in the result and never abort the batch.
pub fn run_operation(
    folder: &Path,
    prefix: &str,
    options: &RunOptions,
    confirmer: &mut dyn Confirmer,
) -> Result<(RunResult, Option<String>)> {
    let files = scan_directory(folder)?;

    let pattern = NamePattern::new(prefix, &options.pattern, options.mode)?;
    let classification = classify_files(&files, &pattern);

    // Indices are allocated up front, before any mutation, so one failed
    // rename cannot invalidate the rest of the mapping.
    let used = used_indices(&classification);
    let entries = allocate_indices(folder, &pattern, &classification.pending, &used);

    let preview_output = match options.preview {
        Preview::None => None,
        format => Some(render_plan(
            &classification,
            &entries,
            format,
            options.use_color,
        )),
    };

    if let Some(ref preview) = preview_output {
        if !options.quiet {
            println!("{preview}");
        }
    }

    let mut result = RunResult {
        folder: folder.display().to_string(),
        prefix: prefix.to_string(),
        reserved: classification.reserved.len(),
        pending: classification.pending.len(),
        succeeded: 0,
        failed: 0,
        dry_run: options.dry_run,
        renames: Vec::new(),
    };

    if options.dry_run || entries.is_empty() {
        return Ok((result, preview_output));
    }

    if options.preflight {
        let collisions = detect_collisions(&entries);
        if let Some(target) = collisions.into_iter().next() {
            return Err(Error::TargetExists(target))
                .context("preflight check failed, no files were renamed");
        }
    }

    if !options.auto_approve {
        let prompt = format!("About to rename {} file(s). Continue?", entries.len());
        if !confirmer.confirm(&prompt)? {
            return Err(Error::Aborted.into());
        }
    }

    let use_color = should_use_color(options.use_color);
    for entry in &entries {
        let outcome = rename_entry(entry);
        if !options.quiet {
            println!("{}", format_outcome_line(&outcome, use_color));
        }
        result.renames.push(outcome);
    }

    let stats = ApplyStats::tally(&result.renames);
    result.succeeded = stats.succeeded;
    result.failed = stats.failed;

    Ok((result, preview_output))
}
