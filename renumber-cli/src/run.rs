use crate::cli::{OutputFormat, PreviewArg};
use anyhow::Result;
use renumber_core::{
    run_operation, Config, MatchMode, OutputFormatter, Preview, RunOptions, StdinConfirmer,
};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_run(
    folder: PathBuf,
    prefix: Option<String>,
    anchored: bool,
    preflight: bool,
    dry_run: bool,
    preview: Option<PreviewArg>,
    output: OutputFormat,
    quiet: bool,
    auto_approve: bool,
    no_color: bool,
) -> Result<()> {
    // Config supplies defaults; flags win.
    let config = Config::load().unwrap_or_default();

    let prefix = prefix.unwrap_or(config.defaults.prefix);
    let preview: Preview = preview
        .or_else(|| PreviewArg::from_str(&config.defaults.preview_format))
        .map_or(Preview::Table, std::convert::Into::into);
    let mode = if anchored || config.defaults.anchored {
        MatchMode::Anchored
    } else {
        MatchMode::Loose
    };
    let use_color = if no_color {
        Some(false)
    } else {
        config.defaults.use_color
    };

    let json = output == OutputFormat::Json;
    let options = RunOptions {
        pattern: renumber_core::DEFAULT_INDEX_PATTERN.to_string(),
        mode,
        preview: if json { Preview::None } else { preview },
        dry_run,
        preflight,
        auto_approve,
        use_color,
        quiet: quiet || json,
    };

    let mut confirmer = StdinConfirmer;
    let (result, _preview) = run_operation(&folder, &prefix, &options, &mut confirmer)?;

    println!("{}", result.format(output.into()));
    Ok(())
}
