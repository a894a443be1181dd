//! mdtile - Sega Mega Drive/Genesis tileset extractor
//!
//! A library and CLI for transcoding indexed png images into the Mega
//! Drive's tile-addressed 4bpp format, emitted as C source files for the
//! hardware build toolchain.

pub mod cli;
pub mod decode;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod output;
pub mod registry;
pub mod tiles;
pub mod validate;

pub use decode::{decode_png, ColorMode, DecodeError, DecodedImage};
pub use discovery::discover;
pub use emit::{render_header, render_source, write_artifacts};
pub use error::{MdtileError, Result};
pub use registry::{Naming, Tileset, TilesetRegistry, DEFAULT_BASE_NAME, DEFAULT_CAPACITY};
pub use tiles::{extract_tiles, pack_4bpp, TILE_BYTES, TILE_WORDS};
pub use validate::{validate, Rejection};
