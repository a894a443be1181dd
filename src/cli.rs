//! Command line surface and batch driver.
//!
//! Runs the pipeline strictly sequentially, one file at a time:
//! decode -> validate -> pack -> extract -> register, then a single emission
//! pass over the registry. Per-file failures skip the file and keep the
//! batch going; registry overflow and artifact write failures are fatal.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::decode::{decode_png, DecodeError};
use crate::discovery::discover;
use crate::emit::write_artifacts;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::{Naming, Tileset, TilesetRegistry};
use crate::tiles::{extract_tiles, pack_4bpp};
use crate::validate::{validate, Rejection};

/// Extract Sega Mega Drive/Genesis tilesets from indexed png images
#[derive(Parser, Debug)]
#[command(name = "mdtile")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version information and exit
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Directory to look for png files in, or a single png file
    #[arg(short = 's', long = "source", value_name = "PATH", default_value = ".")]
    pub source: PathBuf,

    /// Destination directory for the generated .h and .c files
    #[arg(short = 'd', long = "dest", value_name = "PATH", default_value = ".")]
    pub dest: PathBuf,

    /// Base name for generated files, defines and arrays
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,
}

/// Why a file was skipped. Skips are logged and the batch continues.
#[derive(Error, Debug)]
pub enum Skip {
    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Rejected(#[from] Rejection),
}

/// One accepted file, ready for registration.
#[derive(Debug)]
struct Extracted {
    file_name: String,
    tile_count: usize,
    data: Vec<u8>,
}

pub fn run(cli: Cli) -> Result<()> {
    let printer = Printer::new();

    let files = discover(&cli.source)?;
    printer.info(
        "Reading",
        &format!("{} ({})", cli.source.display(), plural(files.len(), "file", "files")),
    );

    let mut registry = TilesetRegistry::new();

    for file in &files {
        match process_file(file) {
            Ok(extracted) => {
                let name = Tileset::name_for(&extracted.file_name);
                if registry.contains_name(&name) {
                    printer.warning(
                        "Duplicate",
                        &format!("{} collides with an earlier tileset named '{}'", file.display(), name),
                    );
                }
                registry.register(&extracted.file_name, extracted.data, extracted.tile_count)?;
                printer.status(
                    "Extracted",
                    &format!(
                        "{} ({})",
                        file.display(),
                        plural(extracted.tile_count, "tile", "tiles")
                    ),
                );
            }
            Err(skip) => {
                printer.warning("Skipping", &format!("{}: {}", file.display(), skip));
            }
        }
    }

    println!("{} extracted", plural(registry.len(), "tileset", "tilesets"));

    if registry.is_empty() {
        return Ok(());
    }

    let naming = Naming::resolve(cli.name.as_deref(), &registry);
    let (header_path, source_path) = write_artifacts(&registry, &naming, &cli.dest)?;
    printer.status("Writing", &header_path.display().to_string());
    printer.status("Writing", &source_path.display().to_string());

    Ok(())
}

/// Run one file through decode, validation, packing and extraction.
fn process_file(path: &Path) -> std::result::Result<Extracted, Skip> {
    let image = decode_png(path)?;
    validate(&image)?;

    let (width, height) = (image.width, image.height);
    let packed = if image.bit_depth == 8 {
        pack_4bpp(&image.pixels)
    } else {
        // Already two pixels per byte in the extractor's layout.
        image.pixels
    };

    let data = extract_tiles(&packed, width, height);
    let tile_count = (width / 8) as usize * (height / 8) as usize;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Extracted {
        file_name,
        tile_count,
        data,
    })
}
