//! Locating candidate files in a folder

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Signature of a folder listing, so a run can swap in its own
pub type DiscoverFn = fn(&Path, &[String]) -> Result<Vec<PathBuf>>;

/// Default extension filter
pub const DEFAULT_EXTENSIONS: [&str; 1] = ["pdf"];

/// Whether `path`'s file name ends in `.<ext>` for one of `extensions`
///
/// Comparison ignores ASCII case; a leading dot on an extension is ignored.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_ascii_lowercase()) else {
        return false;
    };
    extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        !ext.is_empty() && name.ends_with(&format!(".{}", ext))
    })
}

/// List files directly inside `dir` that match `extensions`
///
/// Not recursive. Results keep the order the filesystem enumerates them in.
pub fn discover_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if has_extension(&path, extensions) {
            debug!(path = %path.display(), "discovered file");
            files.push(path);
        }
    }
    Ok(files)
}
