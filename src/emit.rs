//! C source emission.
//!
//! Renders the registry into the two artifacts the hardware toolchain
//! consumes: a header with one size `#define` and one `extern` array
//! declaration per tileset, and a source file with the fully-initialized
//! `uint32_t` array literals. The text is the compatibility surface, so
//! word assembly, hex formatting and separators are load-bearing: each
//! 32-bit word is four consecutive tile bytes, most significant first,
//! printed as `0x` plus eight uppercase hex digits.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MdtileError, Result};
use crate::registry::{Naming, TilesetRegistry};
use crate::tiles::TILE_WORDS;

const BANNER: &str = "/* Generated with mdtile - Sega Mega Drive/Genesis tileset extractor */\n\n";

/// Render the declarations artifact (the `.h` file).
pub fn render_header(registry: &TilesetRegistry, naming: &Naming) -> String {
    let guard = naming.guard();
    let mut out = String::new();

    out.push_str(BANNER);
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));
    out.push_str("#include <stdint.h>\n\n");

    for tileset in registry.iter() {
        out.push_str(&format!(
            "#define {}    {}\n",
            naming.size_identifier(tileset),
            tileset.tile_count
        ));
    }
    out.push('\n');

    for tileset in registry.iter() {
        out.push_str(&format!(
            "extern const uint32_t {}[{} * {}];\n",
            naming.array_identifier(tileset),
            naming.size_identifier(tileset),
            TILE_WORDS
        ));
    }
    out.push('\n');

    out.push_str(&format!("#endif /* {guard} */\n"));
    out
}

/// Render the definitions artifact (the `.c` file).
///
/// Each tile prints as one line of 8 words joined by `", "`; tiles are
/// separated by a comma, a newline and a 4-space indent; each array closes
/// with a newline before the brace.
pub fn render_source(registry: &TilesetRegistry, naming: &Naming) -> String {
    let mut out = String::new();

    out.push_str(&format!("#include \"{}.h\"\n\n", naming.base));

    for tileset in registry.iter() {
        out.push_str(&format!(
            "const uint32_t {}[{} * {}] = {{",
            naming.array_identifier(tileset),
            naming.size_identifier(tileset),
            TILE_WORDS
        ));

        for (index, tile) in tileset.data.chunks_exact(4 * TILE_WORDS).enumerate() {
            if index > 0 {
                out.push(',');
            }
            out.push_str("\n    ");

            for (word, bytes) in tile.chunks_exact(4).enumerate() {
                if word > 0 {
                    out.push_str(", ");
                }
                let value = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                out.push_str(&format!("0x{value:08X}"));
            }
        }

        out.push_str("\n};\n\n");
    }

    out
}

/// Write both artifacts into the destination directory as `<base>.h` and
/// `<base>.c`, returning their paths.
///
/// The header is written first. A failure on either file aborts the batch;
/// there is no retry and no rollback of an already-written sibling.
pub fn write_artifacts(
    registry: &TilesetRegistry,
    naming: &Naming,
    dest: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let header_path = dest.join(format!("{}.h", naming.base));
    let source_path = dest.join(format!("{}.c", naming.base));

    fs::write(&header_path, render_header(registry, naming)).map_err(|e| MdtileError::Io {
        path: header_path.clone(),
        message: format!("failed to write header artifact: {}", e),
    })?;

    fs::write(&source_path, render_source(registry, naming)).map_err(|e| MdtileError::Io {
        path: source_path.clone(),
        message: format!("failed to write source artifact: {}", e),
    })?;

    Ok((header_path, source_path))
}
