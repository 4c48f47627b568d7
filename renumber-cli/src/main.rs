use anyhow::Result;
use clap::Parser;
use renumber_core::{Error, OutputFormatter, VersionResult};
use std::io;
use std::process;

mod cli;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            folder,
            prefix,
            anchored,
            preflight,
            dry_run,
            preview,
            output,
            quiet,
        } => run::handle_run(
            folder,
            prefix,
            anchored,
            preflight,
            dry_run,
            preview,
            output,
            quiet,
            cli.yes,
            cli.no_color,
        ),

        Commands::Version { output } => handle_version(output),

        Commands::Completions { shell } => handle_completions(shell),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

/// Map each fatal error kind to a distinct, scriptable exit code: 1 for a
/// declined prompt or a preflight collision, 2 for invalid input, 3 for
/// anything unexpected.
fn exit_code_for(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<Error>() {
        Some(err) if err.is_invalid_input() => 2,
        Some(Error::Aborted | Error::TargetExists(_)) => 1,
        _ => 3,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "renumber".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}

fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "renumber", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn invalid_input_maps_to_exit_code_2() {
        let e = anyhow::Error::from(Error::NotADirectory("/nope".into()));
        assert_eq!(exit_code_for(&e), 2);
        let e = anyhow::Error::from(Error::NoEligibleFiles("/empty".into()));
        assert_eq!(exit_code_for(&e), 2);
    }

    #[test]
    fn user_abort_and_collisions_map_to_exit_code_1() {
        let e = anyhow::Error::from(Error::Aborted);
        assert_eq!(exit_code_for(&e), 1);
        let e = anyhow::Error::from(Error::TargetExists("/d/file_0.txt".into()));
        assert_eq!(exit_code_for(&e), 1);
    }

    #[test]
    fn unknown_errors_map_to_exit_code_3() {
        let e = anyhow!("something else broke");
        assert_eq!(exit_code_for(&e), 3);
    }

    #[test]
    fn context_does_not_hide_the_error_kind() {
        use anyhow::Context;
        let e: anyhow::Error = Err::<(), _>(Error::Aborted)
            .context("while running")
            .unwrap_err();
        assert_eq!(exit_code_for(&e), 1);
    }
}
