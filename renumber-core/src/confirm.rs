use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Capability for the confirmation gate, injectable so the run pipeline is
/// testable without a terminal.
pub trait Confirmer {
    /// Present `prompt` and return whether the user answered affirmatively.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Reads a y/N answer from stdin.
#[derive(Debug, Default)]
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{prompt} [y/N]: ");
        io::stdout().flush().context("Failed to flush stdout")?;
        read_confirmation(&mut io::stdin().lock())
    }
}

fn read_confirmation<R: BufRead>(reader: &mut R) -> Result<bool> {
    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
