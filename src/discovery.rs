//! Input discovery.
//!
//! A source path is either a single image file or a directory whose
//! immediate `.png` files form the batch. Directory entries are sorted by
//! file name so registration order, and therefore the emitted artifacts,
//! do not depend on filesystem enumeration order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MdtileError, Result};

/// Collect the batch input files for a source path.
///
/// A file path is returned as-is (the decoder decides whether it is
/// usable). A directory yields its immediate png files, sorted. Anything
/// else is an IO error.
pub fn discover(source: &Path) -> Result<Vec<PathBuf>> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }

    if !source.is_dir() {
        return Err(MdtileError::Io {
            path: source.to_path_buf(),
            message: "no such file or directory".to_string(),
        });
    }

    let files = WalkDir::new(source)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_png(path))
        .collect();

    Ok(files)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
