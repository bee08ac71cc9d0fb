//! Ledger file I/O
//!
//! Loading appends decoded transactions to an existing ledger. Saving
//! replaces the destination file completely, writing through a temp file and
//! a rename so a failed write leaves the old content in place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::codec::{decode, encode_to, SkippedLine};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;

/// What a load did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub path: PathBuf,
    /// Transactions appended to the ledger
    pub loaded: usize,
    /// Lines that were skipped as malformed
    pub skipped: Vec<SkippedLine>,
}

/// Read a ledger file and append its transactions to `ledger`
///
/// A missing path, or one that is not a regular file, is an error. Malformed
/// lines are not: they are skipped and listed in the report.
pub fn load_into<P: AsRef<Path>>(path: P, ledger: &mut Ledger) -> TrackerResult<LoadReport> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(TrackerError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)
        .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    // Invalid UTF-8 decodes to U+FFFD instead of failing the whole load
    let text = String::from_utf8_lossy(&bytes);
    let outcome = decode(&text);
    let loaded = outcome.count();
    ledger.extend(outcome.transactions);

    info!(
        path = %path.display(),
        loaded,
        skipped = outcome.skipped.len(),
        "loaded ledger file"
    );

    Ok(LoadReport {
        path: path.to_path_buf(),
        loaded,
        skipped: outcome.skipped,
    })
}

/// Write the whole ledger to `path`, overwriting any previous content
pub fn save<P: AsRef<Path>>(path: P, ledger: &Ledger) -> TrackerResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = encode_to(ledger, &mut writer).and_then(|_| writer.flush());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(TrackerError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), count = ledger.count(), "saved ledger file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
