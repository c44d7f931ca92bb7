use std::borrow::Cow;
use std::fs;
use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::deepzoom::{
    codec::{FileTileWriter, ImageSourceReader, SourceImage, SourceReader, TileFormat, TileWriter},
    common::error::{Result, TilerError},
    descriptor::DziDescriptor,
    geometry::{LevelDimensions, Tile, TilePartitioner, level_dimensions, max_level},
    layout::PyramidLayout,
    pyramid::timing::{BuildTimings, Timer},
    pyramid::types::{BuildSummary, LevelSummary, PyramidConfig},
};

/// Resampling filter used for every level below full resolution.
const LEVEL_FILTER: FilterType = FilterType::Lanczos3;

pub struct PyramidBuilder<R: SourceReader, W: TileWriter> {
    reader: R,
    writer: W,
    config: PyramidConfig,
    partitioner: TilePartitioner,
}

impl PyramidBuilder<ImageSourceReader, FileTileWriter> {
    pub fn new(config: PyramidConfig) -> Result<Self> {
        Self::with_custom(ImageSourceReader, FileTileWriter, config)
    }
}

impl<R: SourceReader, W: TileWriter> PyramidBuilder<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PyramidConfig) -> Result<Self> {
        config.validate()?;
        let partitioner = TilePartitioner::new(config.tile_size, config.overlap);
        Ok(Self {
            reader,
            writer,
            config,
            partitioner,
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(TilerError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decode `source_path` and write its pyramid and descriptor next to it.
    #[instrument(skip(self, source_path), fields(source = %source_path.as_ref().display()))]
    pub fn build_file<P: AsRef<Path>>(&self, source_path: P) -> Result<BuildSummary> {
        let source_path = source_path.as_ref();
        let format = TileFormat::from_path(source_path)?;
        let layout = PyramidLayout::for_source(source_path, &format)?;

        let mut timings = BuildTimings::new();

        let timer = Timer::start("read_input_file");
        let input_data = fs::read(source_path).map_err(|e| {
            TilerError::InputReadError(format!("{}: {}", source_path.display(), e))
        })?;
        timings.record(timer);

        let timer = Timer::start("decode_source");
        let source = {
            let _span = tracing::info_span!("decode_source", bytes = input_data.len()).entered();
            self.reader.read_source(&input_data, &format)?
        };
        timings.record(timer);

        let mut summary = self.build(&source, &layout)?;
        timings.extend(std::mem::take(&mut summary.timings));
        summary.timings = timings;

        Ok(summary)
    }

    /// Write every level of `source` and then the descriptor, as laid out by `layout`.
    ///
    /// Levels are generated from full resolution down to 1x1. Each level is
    /// resampled from `source` itself, never from the level above it.
    #[instrument(skip(self, source, layout), fields(width = source.width(), height = source.height()))]
    pub fn build(&self, source: &SourceImage, layout: &PyramidLayout) -> Result<BuildSummary> {
        let (width, height) = source.dimensions();
        self.validate_dimensions(width, height)?;

        let mut timings = BuildTimings::new();

        info!(path = %layout.files_dir().display(), "Creating directory");
        create_dir(layout.files_dir())?;

        let mut levels = Vec::new();
        let mut tiles_written = 0;
        for dimensions in level_dimensions(width, height) {
            let timer = Timer::start(format!("level_{}", dimensions.level));
            let level = self.build_level(source, layout, dimensions)?;
            timings.record_level(timer, level.grid.tile_count());

            tiles_written += level.grid.tile_count();
            levels.push(level);
        }

        let timer = Timer::start("write_descriptor");
        let descriptor = DziDescriptor {
            format: source.format.extension.clone(),
            overlap: self.config.overlap,
            tile_size: self.config.tile_size,
            width,
            height,
        };
        descriptor.write_to(layout.descriptor_path())?;
        timings.record(timer);

        info!(
            levels = levels.len(),
            tiles = tiles_written,
            "Pyramid complete"
        );

        Ok(BuildSummary {
            max_level: max_level(width, height),
            levels,
            tiles_written,
            files_dir: layout.files_dir().to_path_buf(),
            descriptor_path: layout.descriptor_path().to_path_buf(),
            timings,
        })
    }

    fn build_level(
        &self,
        source: &SourceImage,
        layout: &PyramidLayout,
        dimensions: LevelDimensions,
    ) -> Result<LevelSummary> {
        let LevelDimensions { level, width, height } = dimensions;
        let grid = self.partitioner.grid(width, height);

        info!(
            "level {} is {} x {} ({} columns, {} rows)",
            level, width, height, grid.columns, grid.rows
        );

        let level_image = {
            let _span = tracing::debug_span!("resample", level, width, height).entered();
            resample(&source.image, width, height)
        };

        let level_dir = layout.level_dir(level);
        create_dir(&level_dir)?;

        let tiles: Vec<Tile> = self.partitioner.tiles(width, height).collect();
        let writer = &self.writer;
        let write = |tile: &Tile| {
            write_tile(writer, &level_image, layout, level, tile, &source.format)
        };

        if self.config.parallel {
            tiles.par_iter().try_for_each(write)?;
        } else {
            tiles.iter().try_for_each(write)?;
        }

        Ok(LevelSummary {
            level,
            width,
            height,
            grid,
        })
    }

    pub fn config(&self) -> &PyramidConfig {
        &self.config
    }

    pub fn partitioner(&self) -> &TilePartitioner {
        &self.partitioner
    }
}

/// The full-resolution level reuses the source; every other level is resampled from it.
fn resample(source: &DynamicImage, width: u32, height: u32) -> Cow<'_, DynamicImage> {
    if source.width() == width && source.height() == height {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(source.resize_exact(width, height, LEVEL_FILTER))
    }
}

fn write_tile<W: TileWriter>(
    writer: &W,
    level_image: &DynamicImage,
    layout: &PyramidLayout,
    level: u32,
    tile: &Tile,
    format: &TileFormat,
) -> Result<()> {
    let rect = tile.rect;
    let cropped = level_image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    let path = layout.tile_path(level, tile.column, tile.row);

    debug!(
        level,
        column = tile.column,
        row = tile.row,
        width = cropped.width(),
        height = cropped.height(),
        "Writing tile"
    );

    writer.write_tile(&cropped, &path, format)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| TilerError::OutputWriteError(format!("{}: {}", path.display(), e)))
}
