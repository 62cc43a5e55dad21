// loxrs/src/cli/file.rs

//! File mode: tokenize a whole script in one scan.

use anyhow::Result;
use std::path::Path;

use super::run;

/// Tokenize a script file, printing tokens to stdout and lexical errors to
/// stderr.
///
/// Returns true when the script contained lexical errors, so the caller can
/// pick the exit status.
pub fn run_file(path: &Path, json: bool) -> Result<bool> {
    let source = fs_err::read_to_string(path)?;
    log::debug!("read {} bytes from {}", source.len(), path.display());
    run(&source, json)
}
