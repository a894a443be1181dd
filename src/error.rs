use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal error type for mdtile operations.
///
/// Per-file skips are not represented here; they are recoverable and the
/// batch driver reports them as it goes. Anything that becomes an
/// `MdtileError` aborts the whole batch.
#[derive(Error, Diagnostic, Debug)]
pub enum MdtileError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mdtile::io))]
    Io { path: PathBuf, message: String },

    #[error("tileset registry is full ({capacity} tilesets)")]
    #[diagnostic(
        code(mdtile::registry),
        help("split the source directory into smaller batches")
    )]
    CapacityExceeded { capacity: usize },
}

pub type Result<T> = std::result::Result<T, MdtileError>;
