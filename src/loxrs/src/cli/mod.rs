// loxrs/src/cli/mod.rs

//! Command line entry points for the Lox tokenizer.

pub mod file;
pub mod prompt;

pub use file::run_file;
pub use prompt::run_prompt;

use anyhow::Result;
use loxrs_scanner::ScanOutput;

/// Scan a source string and print the result: tokens to stdout, lexical
/// errors to stderr.
///
/// Returns true when the scan reported lexical errors.
pub fn run(source: &str, json: bool) -> Result<bool> {
    let output = loxrs_scanner::scan(source);
    log::debug!(
        "scanned {} tokens, {} errors",
        output.tokens.len(),
        output.errors.len()
    );
    print_output(&output, json)?;
    Ok(output.has_errors())
}

fn print_output(output: &ScanOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output.tokens)?);
    } else {
        for token in &output.tokens {
            println!("{}", token);
        }
    }

    for error in &output.errors {
        eprintln!("{}", error);
    }

    Ok(())
}
