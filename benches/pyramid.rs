use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use deepzoom_tiler::deepzoom::{
    ImageSourceReader, PyramidBuilder, PyramidConfig, PyramidLayout, SourceReader, TileFormat,
    TilePartitioner,
};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn generate_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

fn benchmark_partitioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_by_size");

    let sizes = vec![
        (1000, 1000, "1000x1000"),
        (10000, 8000, "10000x8000"),
        (60000, 40000, "60000x40000"),
    ];

    for (width, height, label) in sizes {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(width, height),
            |b, &(w, h)| {
                let partitioner = TilePartitioner::new(256, 1);
                b.iter(|| partitioner.tiles(black_box(w), black_box(h)).count());
            },
        );
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_by_mode");
    group.sample_size(10);

    let format = TileFormat::from_extension("png").unwrap();
    let data = generate_png(1024, 768);
    let source = ImageSourceReader.read_source(&data, &format).unwrap();

    for (parallel, label) in [(false, "sequential"), (true, "parallel")] {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            let dir = tempfile::tempdir().unwrap();
            let layout =
                PyramidLayout::for_source(&dir.path().join("bench.png"), &format).unwrap();
            let config = PyramidConfig::builder()
                .tile_size(256)
                .overlap(1)
                .parallel(parallel)
                .build();
            let builder = PyramidBuilder::new(config).unwrap();

            b.iter(|| builder.build(black_box(&source), &layout).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_partitioning, benchmark_build);
criterion_main!(benches);
