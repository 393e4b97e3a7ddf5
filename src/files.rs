use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Files under `dir` with extension `ext`, sorted by path. Only the top level
/// is listed unless `recursive` is set.
pub fn discover(dir: &Path, ext: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) == Some(ext) {
            out.push(entry.into_path());
        }
    }
    out.sort();
    debug!(dir = %dir.display(), ext, found = out.len(), "discovered files");
    Ok(out)
}

/// File stem, used as the list title when a document has none.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sibling path with the same stem and `ext`.
pub fn output_path(input: &Path, ext: &str) -> PathBuf {
    input.with_extension(ext)
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_report(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn remove_source(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ──
