//! Tileset registry and identifier naming.
//!
//! The registry is the only state that survives across files in a batch:
//! an ordered, capacity-bounded collection of extracted tilesets. The
//! naming policy that turns tileset names into C identifiers lives here
//! too, resolved once per batch after all files have been read.

use std::path::Path;

use crate::error::{MdtileError, Result};
use crate::tiles::TILE_BYTES;

/// Default maximum number of tilesets in one batch.
pub const DEFAULT_CAPACITY: usize = 512;

/// Base identifier used when several files are accepted and no name was
/// supplied on the command line.
pub const DEFAULT_BASE_NAME: &str = "til";

/// One extracted tileset, immutable after registration.
#[derive(Debug, Clone)]
pub struct Tileset {
    /// Source file name without its extension.
    pub name: String,
    /// Number of 8x8 tiles.
    pub tile_count: usize,
    /// Tile-major pixel data, `tile_count * 32` bytes.
    pub data: Vec<u8>,
}

impl Tileset {
    /// Derive a tileset name from a source file name: the stem, or the
    /// whole name when there is no extension to strip.
    pub fn name_for(file_name: &str) -> String {
        Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string())
    }
}

/// Ordered, capacity-bounded collection of tilesets.
#[derive(Debug)]
pub struct TilesetRegistry {
    capacity: usize,
    entries: Vec<Tileset>,
}

impl TilesetRegistry {
    /// Create a registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a registry bounded to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Register an extracted tileset under the given source file name.
    ///
    /// The capacity bound is checked before anything is added; exceeding
    /// it is fatal to the batch, unlike per-file validation skips.
    pub fn register(&mut self, file_name: &str, data: Vec<u8>, tile_count: usize) -> Result<()> {
        if self.entries.len() >= self.capacity {
            return Err(MdtileError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        debug_assert_eq!(data.len(), tile_count * TILE_BYTES);

        self.entries.push(Tileset {
            name: Tileset::name_for(file_name),
            tile_count,
            data,
        });
        Ok(())
    }

    /// Whether a tileset with this name is already registered. Duplicate
    /// names would collide in the emitted identifiers; the driver warns
    /// but does not reject.
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tilesets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tileset> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Tileset> {
        self.entries.get(index)
    }
}

impl Default for TilesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved identifier naming for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// Base identifier: output file names, include guard, prefix.
    pub base: String,
    /// Whether array and size identifiers carry the `base_` prefix.
    pub use_prefix: bool,
}

impl Naming {
    /// Resolve the batch naming from an optional user-supplied base name.
    ///
    /// With no name given: a single accepted file lends its own stem as
    /// the base and gets no prefix; several files fall back to the fixed
    /// default base with prefixes on every identifier. A user-supplied
    /// name always prefixes.
    pub fn resolve(user_name: Option<&str>, registry: &TilesetRegistry) -> Self {
        match user_name {
            Some(name) => Self {
                base: name.to_string(),
                use_prefix: true,
            },
            None if registry.len() == 1 => Self {
                base: registry.entries[0].name.clone(),
                use_prefix: false,
            },
            None => Self {
                base: DEFAULT_BASE_NAME.to_string(),
                use_prefix: true,
            },
        }
    }

    /// C identifier of the emitted array. Case is preserved; only the
    /// optional prefix is added.
    pub fn array_identifier(&self, tileset: &Tileset) -> String {
        if self.use_prefix {
            format!("{}_{}", self.base, tileset.name)
        } else {
            tileset.name.clone()
        }
    }

    /// Identifier of the size `#define`: the uppercased array identifier
    /// with a `_SIZE` suffix.
    pub fn size_identifier(&self, tileset: &Tileset) -> String {
        format!("{}_SIZE", self.array_identifier(tileset).to_ascii_uppercase())
    }

    /// Include-guard identifier for the header artifact.
    pub fn guard(&self) -> String {
        format!("{}_H", self.base.to_ascii_uppercase())
    }
}
