use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hsi_cube_rs::hyperspectral::correction::{apply_white_reference, white_reference_spectrum};
use hsi_cube_rs::hyperspectral::cube::rotate_cube_270;
use hsi_cube_rs::hyperspectral::ReferenceRegion;
use ndarray::Array3;

fn generate_mock_cube(bands: usize, rows: usize, columns: usize) -> Array3<f32> {
    Array3::from_shape_fn((bands, rows, columns), |(b, r, c)| {
        0.1 + ((b + r + c) % 256) as f32 / 256.0
    })
}

fn benchmark_correction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("white_reference_by_size");
    let region = ReferenceRegion::new(10, 60, 10, 60);

    let sizes = vec![
        (20, 128, 128, "20x128x128"),
        (50, 256, 256, "50x256x256"),
        (200, 256, 320, "200x256x320"),
    ];

    for (bands, rows, columns, label) in sizes {
        let cube = generate_mock_cube(bands, rows, columns);

        group.bench_with_input(BenchmarkId::from_parameter(label), &cube, |b, cube| {
            b.iter(|| {
                let spectrum = white_reference_spectrum(black_box(cube.view()), region).unwrap();
                apply_white_reference(cube.view(), spectrum.view()).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_rotation(c: &mut Criterion) {
    let cube = generate_mock_cube(50, 256, 320);

    c.bench_function("rotate_cube_270", |b| {
        b.iter(|| rotate_cube_270(black_box(cube.view())))
    });
}

criterion_group!(benches, benchmark_correction_sizes, benchmark_rotation);
criterion_main!(benches);
