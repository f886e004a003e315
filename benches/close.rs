use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use beamspot::models::{GrayRaster, PointI};
use beamspot::utils::filters::{gaussian_filter, median_filter};
use beamspot::utils::morphology::{StructureElement, close};

fn noisy_raster(width: usize, height: usize) -> GrayRaster {
    let mut raster = GrayRaster::new(width, height, 255);
    let mut state = 0x2545F491u32;
    for value in raster.data_mut() {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        *value = (state >> 24) as u8;
    }
    raster
}

fn bench_close_small_disk(c: &mut Criterion) {
    let raster = noisy_raster(640, 480);
    let se = StructureElement::disk(1.9, PointI::default()).unwrap();
    c.bench_function("close_640x480_r1.9", |b| {
        b.iter_batched(
            || raster.clone(),
            |mut buf| close(black_box(&mut buf), black_box(&se)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_close_large_disk(c: &mut Criterion) {
    let raster = noisy_raster(640, 480);
    let se = StructureElement::disk(3.4, PointI::default()).unwrap();
    c.bench_function("close_640x480_r3.4", |b| {
        b.iter_batched(
            || raster.clone(),
            |mut buf| close(black_box(&mut buf), black_box(&se)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_median_filter(c: &mut Criterion) {
    let raster = noisy_raster(640, 480);
    c.bench_function("median_640x480", |b| {
        b.iter(|| median_filter(black_box(&raster)))
    });
}

fn bench_gaussian_filter(c: &mut Criterion) {
    let raster = noisy_raster(640, 480);
    c.bench_function("gaussian_640x480", |b| {
        b.iter(|| gaussian_filter(black_box(&raster)))
    });
}

criterion_group!(
    benches,
    bench_close_small_disk,
    bench_close_large_disk,
    bench_median_filter,
    bench_gaussian_filter
);
criterion_main!(benches);
