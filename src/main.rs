use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use deepzoom_tiler::deepzoom::{PyramidBuilder, PyramidConfig};
use deepzoom_tiler::deepzoom::pyramid::{DEFAULT_OVERLAP, DEFAULT_TILE_SIZE};
use deepzoom_tiler::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "deepzoom_tiler")]
#[command(about = "Create image tiles and a .dzi descriptor for a deep zoom viewer", long_about = None)]
struct Args {
    /// Tile edge length in pixels
    #[arg(short = 't', long, value_name = "N", default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: u32,

    /// Pixels shared between neighbouring tiles
    #[arg(short = 'o', long, value_name = "N", default_value_t = DEFAULT_OVERLAP)]
    overlap: u32,

    /// Encode the tiles of each level in parallel
    #[arg(short = 'p', long)]
    parallel: bool,

    /// Print a per-step timing summary when done
    #[arg(long)]
    timings: bool,

    /// Source image; the tile format follows its extension
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    let config = PyramidConfig::builder()
        .tile_size(args.tile_size)
        .overlap(args.overlap)
        .parallel(args.parallel)
        .build();
    let builder = PyramidBuilder::new(config)?;

    info!(
        tile_size = builder.config().tile_size,
        overlap = builder.config().overlap,
        parallel = builder.config().parallel,
        "Tiling {}",
        args.image.display()
    );

    let summary = builder
        .build_file(&args.image)
        .with_context(|| format!("failed to build pyramid for {}", args.image.display()))?;

    info!(
        levels = summary.levels.len(),
        tiles = summary.tiles_written,
        "Wrote {} and {}",
        summary.files_dir.display(),
        summary.descriptor_path.display()
    );

    if args.timings {
        summary.timings.print_summary();
    }

    Ok(())
}
