//! Interactive input selection.
//!
//! Lists the CSV files of a directory and asks the operator for the input
//! file, the output file name and verbosity. Readers and writers are generic
//! so the prompts run against stdin/stdout in the binary and against buffers
//! in tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::config::{Config, Opt, CSV_EXTENSION};
use crate::error_handling::ExtractionError;

/// Lists the CSV files in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns `ExtractionError::NoCsvFiles` if there are none. An unreadable
/// directory is treated the same way.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read directory {}: {}", dir.display(), e);
            return Err(ExtractionError::NoCsvFiles(dir.to_path_buf()));
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ExtractionError::NoCsvFiles(dir.to_path_buf()));
    }
    Ok(files)
}

/// Prints the 1-indexed file menu.
pub fn print_csv_menu<W: Write>(files: &[PathBuf], out: &mut W) -> Result<(), ExtractionError> {
    writeln!(out, "\nFound CSV files:")?;
    for (i, file) in files.iter().enumerate() {
        let name = file.file_name().unwrap_or(file.as_os_str());
        writeln!(out, "{}. {}", i + 1, name.to_string_lossy())?;
    }
    Ok(())
}

/// Asks for a menu number until a valid one is given.
///
/// Non-numeric and out-of-range answers are reported and the question is
/// asked again.
///
/// # Errors
///
/// Returns `ExtractionError::InputClosed` if the input ends before a valid
/// answer, or `ExtractionError::Console` on IO failure.
pub fn select_file<R: BufRead, W: Write>(
    files: &[PathBuf],
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf, ExtractionError> {
    loop {
        let answer = ask(
            "Select the number of the CSV file you want to use: ",
            "a file selection",
            input,
            out,
        )?;
        match answer.trim().parse::<i64>() {
            Ok(n) if n >= 1 && (n as usize) <= files.len() => {
                return Ok(files[n as usize - 1].clone());
            }
            Ok(_) => writeln!(out, "Invalid selection. Please select a number from the list.")?,
            Err(_) => writeln!(out, "Please enter a numeric value.")?,
        }
    }
}

/// Asks for the output file name.
pub fn prompt_output_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf, ExtractionError> {
    let answer = ask(
        "Enter the name for the output file (it will be saved in the current directory): ",
        "an output file name",
        input,
        out,
    )?;
    Ok(PathBuf::from(answer.trim()))
}

/// Asks whether to print per-token output. Only `yes` (any case) enables it.
pub fn prompt_verbose<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<bool, ExtractionError> {
    let answer = ask(
        "Would you like verbose output? (yes/no): ",
        "a verbosity answer",
        input,
        out,
    )?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Builds the run configuration from CLI options, prompting for what is missing.
///
/// - `--input` skips the file menu; otherwise CSV files in `dir` are listed
///   and one is selected.
/// - `--output` takes the output path and verbosity from the flags; otherwise
///   both are asked for.
pub fn resolve_config<R: BufRead, W: Write>(
    opt: Opt,
    dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<Config, ExtractionError> {
    let input_path = match opt.input {
        Some(path) => path,
        None => {
            let files = list_csv_files(dir)?;
            print_csv_menu(&files, out)?;
            select_file(&files, input, out)?
        }
    };

    let (output, verbose) = match opt.output {
        Some(output) => (output, opt.verbose),
        None => {
            let output = prompt_output_path(input, out)?;
            let verbose = prompt_verbose(input, out)?;
            (output, verbose)
        }
    };

    Ok(Config {
        input: input_path,
        output,
        verbose,
    })
}

fn ask<R: BufRead, W: Write>(
    question: &str,
    expecting: &'static str,
    input: &mut R,
    out: &mut W,
) -> Result<String, ExtractionError> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ExtractionError::InputClosed(expecting));
    }
    Ok(line)
}
