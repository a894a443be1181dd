//! Pixel packing and tile extraction.
//!
//! The Mega Drive VDP addresses VRAM in 8x8-pixel tiles of 32 bytes each
//! (8 rows of 4 packed 4bpp bytes). This module converts an 8bpp index
//! buffer to the packed 4bpp layout and reorders a scanline-major image
//! into tile-major blocks. Pixel values are never altered, only grouped.

/// Bytes per tile: 8 rows of 4 packed bytes.
pub const TILE_BYTES: usize = 32;

/// 32-bit words per tile, as serialized in the emitted C arrays.
pub const TILE_WORDS: usize = 8;

/// Pack an 8bpp index buffer into 4bpp, two pixels per byte.
///
/// The earlier pixel of each pair lands in the high nibble. Only the low
/// nibble of each source byte is significant; valid inputs never use more
/// than 16 palette entries. The output is half the input length.
pub fn pack_4bpp(pixels: &[u8]) -> Vec<u8> {
    let mut packed = Vec::with_capacity(pixels.len() / 2);
    for pair in pixels.chunks_exact(2) {
        packed.push(((pair[0] & 0x0F) << 4) | (pair[1] & 0x0F));
    }
    packed
}

/// Reorder a packed 4bpp scanline-major image into tile-major blocks.
///
/// Tiles are taken left-to-right, top-to-bottom. For each tile, 8 rows of
/// 4 bytes are copied starting at `ty * 8 * pitch + tx * 4`, one row every
/// `pitch` bytes, where `pitch` is the packed row stride `width / 2`.
/// Dimensions must already be validated as multiples of 8.
pub fn extract_tiles(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    let tile_width = (width / 8) as usize;
    let tile_height = (height / 8) as usize;
    let pitch = tile_width * 4;

    let mut tiles = Vec::with_capacity(tile_width * tile_height * TILE_BYTES);

    for ty in 0..tile_height {
        for tx in 0..tile_width {
            let origin = ty * 8 * pitch + tx * 4;
            for row in 0..8 {
                let start = origin + row * pitch;
                tiles.extend_from_slice(&packed[start..start + 4]);
            }
        }
    }

    tiles
}
