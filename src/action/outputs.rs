// SPDX-License-Identifier: MIT

//! Step outputs for GitHub Actions

use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Set a step output, using the `GITHUB_OUTPUT` file when the runner provides one
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let output_file = env::var(OUTPUT_FILE_VAR)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    emit_output(output_file.as_deref(), name, value, &mut io::stdout())
}

/// Write an output to `output_file`, or as a `::set-output` command on `stdout`
pub fn emit_output<W: Write>(
    output_file: Option<&Path>,
    name: &str,
    value: &str,
    stdout: &mut W,
) -> Result<()> {
    match output_file {
        Some(path) => write_output(path, name, value),
        None => {
            writeln!(stdout, "::set-output name={}::{}", name, value)?;
            Ok(())
        }
    }
}

/// Append `name=value` to an output file
pub fn write_output<P: AsRef<Path>>(path: P, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}
