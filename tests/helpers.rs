// Shared test helpers for input files and configured runs.

use std::path::{Path, PathBuf};

use domain_extractor::Config;

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write input file");
    path
}

/// Builds a quiet configuration for the given input and output.
#[allow(dead_code)] // Not every test file builds configs
pub fn config_for(input: &Path, output: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        ..Default::default()
    }
}

/// Reads the output file as lines.
#[allow(dead_code)] // Not every test file reads output
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
