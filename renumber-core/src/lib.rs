#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod allocate;
pub mod apply;
pub mod classify;
pub mod config;
pub mod confirm;
pub mod error;
pub mod operations;
pub mod output;
pub mod preview;
pub mod scanner;

pub use allocate::{allocate_indices, used_indices, RenameEntry};
pub use apply::{apply_renames, detect_collisions, rename_entry, ApplyStats, RenameOutcome};
pub use classify::{classify_files, Classification, FileEntry, MatchMode, NamePattern};
pub use config::Config;
pub use confirm::{Confirmer, StdinConfirmer};
pub use error::Error;
pub use operations::{run_operation, RunOptions};
pub use output::{OutputFormat, OutputFormatter, RunResult, VersionResult};
pub use preview::{render_plan, should_use_color, Preview};
pub use scanner::scan_directory;

/// Numeric pattern recognized inside conforming filenames when the caller
/// does not supply one: a run of decimal digits.
pub const DEFAULT_INDEX_PATTERN: &str = r"\d+";

/// Default filename prefix when neither the CLI nor the config provides one.
pub const DEFAULT_PREFIX: &str = "file";
