// loxrs/src/main.rs

use anyhow::Result;
use clap::Parser;
use loxrs::cli::{run_file, run_prompt};
use loxrs::constants::{EX_DATAERR, EX_USAGE};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "loxrs")]
#[command(about = "Tokenizer for the Lox scripting language", long_about = None)]
#[command(version)]
struct Cli {
    /// Script to tokenize (omit to start an interactive prompt)
    script: Option<PathBuf>,

    /// Print the token sequence as JSON instead of one token per line
    #[arg(long)]
    json: bool,
}

fn entrypoint(cli: Cli) -> Result<bool> {
    match cli.script {
        Some(script) => run_file(&script, cli.json),
        None => {
            run_prompt(cli.json)?;
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; only real usage errors
            // carry the usage exit status.
            let status = if e.use_stderr() { EX_USAGE } else { 0 };
            e.print().expect("Failed to print argument error");
            return ExitCode::from(status);
        }
    };

    match entrypoint(cli) {
        Ok(had_error) => {
            if had_error {
                ExitCode::from(EX_DATAERR)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
