// loxrs/src/cli/prompt.rs

//! Interactive mode: tokenize one line at a time.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::run;

/// Run the interactive prompt until end of input.
///
/// Each line is scanned as an independent source with a fresh line counter.
/// Lexical errors are reported and never terminate the loop.
pub fn run_prompt(json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(|c| c == '\n' || c == '\r');
        run(source, json)?;
    }

    Ok(())
}
