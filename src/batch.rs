//! Batch driver: queue construction, transcription, cleaning, and output.
//!
//! Per-file failures never abort the run — they are logged, reported as
//! events, and the queue continues. Only environment-level failures (the
//! output directory cannot be created) are fatal.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use crate::cleaner;
use crate::config::BatchConfig;
use crate::engine::Engine;
use crate::vocabulary::Vocabulary;

/// Events emitted while the batch runs.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// A file has been picked up for transcription.
    FileStarted {
        index: usize,
        total: usize,
        path: PathBuf,
    },
    /// A file was transcribed, cleaned, and written out.
    FileFinished { path: PathBuf, output: PathBuf },
    /// A file failed; the batch continues.
    FileFailed { path: PathBuf, error: String },
}

/// Outcome of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Build the transcription queue from file and folder arguments.
///
/// Folders are enumerated by the configured audio extensions; files given
/// explicitly are queued as-is. Duplicates and files over the size gate are
/// skipped with a warning.
pub fn build_queue(inputs: &[PathBuf], config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let mut queue = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(input)
                .with_context(|| format!("Failed to read folder: {}", input.display()))?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && has_audio_extension(path, config))
                .collect();
            entries.sort();

            for path in entries {
                enqueue(path, config, &mut queue, &mut seen);
            }
        } else if input.is_file() {
            enqueue(input.clone(), config, &mut queue, &mut seen);
        } else {
            warn!(path = %input.display(), "Input does not exist, skipping");
        }
    }

    Ok(queue)
}

fn has_audio_extension(path: &Path, config: &BatchConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            config
                .audio_extensions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
}

fn enqueue(
    path: PathBuf,
    config: &BatchConfig,
    queue: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) {
    if !seen.insert(path.clone()) {
        return;
    }

    let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let limit = config.max_file_size_mb * 1024 * 1024;
    if size > limit {
        warn!(
            path = %path.display(),
            size_mb = size / (1024 * 1024),
            limit_mb = config.max_file_size_mb,
            "File exceeds size limit, skipping"
        );
        return;
    }

    queue.push(path);
}

/// Default output directory name: `<prefix>_<timestamp>` in the working
/// directory.
pub fn default_output_dir(prefix: &str) -> PathBuf {
    PathBuf::from(format!(
        "{prefix}_{}",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Transcribe, clean, and write out every queued file.
pub fn run_batch(
    engine: &mut Engine,
    vocabulary: &Vocabulary,
    queue: &[PathBuf],
    output_dir: &Path,
    mut on_event: impl FnMut(BatchEvent),
) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let total = queue.len();
    let mut processed = 0;
    let mut failed = 0;

    for (index, path) in queue.iter().enumerate() {
        on_event(BatchEvent::FileStarted {
            index,
            total,
            path: path.clone(),
        });

        match process_file(engine, vocabulary, path, output_dir) {
            Ok(output) => {
                processed += 1;
                on_event(BatchEvent::FileFinished {
                    path: path.clone(),
                    output,
                });
            }
            Err(err) => {
                failed += 1;
                warn!(path = %path.display(), error = %format!("{err:#}"), "File failed, continuing");
                on_event(BatchEvent::FileFailed {
                    path: path.clone(),
                    error: format!("{err:#}"),
                });
            }
        }
    }

    info!(processed, failed, "Batch complete");

    Ok(BatchSummary { processed, failed })
}

fn process_file(
    engine: &mut Engine,
    vocabulary: &Vocabulary,
    path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let raw = engine.transcribe_file(path)?;
    let cleaned = cleaner::clean(&raw, vocabulary);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    let output_path = output_dir.join(format!("{stem}.txt"));
    write_transcript(&output_path, path, &cleaned)?;

    Ok(output_path)
}

/// Write one transcript with its provenance header.
fn write_transcript(output: &Path, source: &Path, text: &str) -> Result<()> {
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = format!(
        "LEXIVOX TRANSCRIPT\nGenerated: {}\nSource: {}\n\n{}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        source_name,
        text,
    );

    fs::write(output, content)
        .with_context(|| format!("Failed to write transcript: {}", output.display()))
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
