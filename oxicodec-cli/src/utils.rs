//! Utility functions for the CLI.

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Boxed error used by every command.
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Create a spinner for a step of unknown length.
pub fn create_spinner(message: &str, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Use `path` if given, otherwise ask for one interactively.
pub fn resolve_path(path: Option<PathBuf>, prompt: &str, default: Option<&str>) -> CliResult<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let answer = input.interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

/// `path` with `suffix` appended to its file name.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// `path` with `suffix` removed from its file name, if present.
pub fn strip_suffix(path: &Path, suffix: &str) -> Option<PathBuf> {
    path.to_str()
        .and_then(|s| s.strip_suffix(suffix))
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Write a token stream as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> CliResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a token stream written by [`write_json`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Compressed size as a percentage of the original.
pub fn ratio_percent(original: u64, compressed: u64) -> Option<f64> {
    (original > 0).then(|| compressed as f64 / original as f64 * 100.0)
}

/// Print the size summary shared by `compress` and `stats`.
pub fn print_sizes(original: u64, compressed: u64) {
    println!("Original Size        : {} bytes", original);
    println!("Compressed Size      : {} bytes", compressed);
    if let Some(ratio) = ratio_percent(original, compressed) {
        println!("Compression Ratio    : {:.2}%", ratio);
    }
}
