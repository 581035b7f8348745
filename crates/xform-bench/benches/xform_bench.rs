//! Benchmarks for xform-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use xform_math::{Mat4, Vec3, simd};
use xform_scene::{Scene, SceneConfig};

fn sample_matrices() -> (Mat4, Mat4) {
    let a = Mat4::from_transform(
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(0.3, 1.2, -0.4),
        Vec3::new(1.5, 0.5, 2.0),
    );
    let b = Mat4::perspective(70.0, 1.777, 0.1, 1000.0);
    (a, b)
}

/// Benchmark the 4x4 kernel operations.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");
    let (a, b) = sample_matrices();

    group.bench_function("multiply_into", |bench| {
        let mut dst = Mat4::IDENTITY;
        bench.iter(|| {
            Mat4::multiply_into(black_box(&a), black_box(&b), &mut dst);
            black_box(&dst);
        })
    });

    group.bench_function("multiply_x4", |bench| {
        bench.iter(|| simd::multiply_x4(black_box(&a), black_box(&b)))
    });

    group.bench_function("inverse_into", |bench| {
        let mut dst = Mat4::IDENTITY;
        bench.iter(|| Mat4::inverse_into(black_box(&a), &mut dst))
    });

    group.bench_function("normal_matrix_into", |bench| {
        let mut dst = Mat4::IDENTITY;
        bench.iter(|| Mat4::normal_matrix_into(black_box(&a), &mut dst))
    });

    group.bench_function("compose", |bench| {
        let mut m = Mat4::IDENTITY;
        bench.iter(|| {
            m.compose(
                black_box(Vec3::new(1.0, 2.0, 3.0)),
                black_box(Vec3::new(0.1, 0.2, 0.3)),
                black_box(Vec3::ONE),
            );
            black_box(&m);
        })
    });

    group.bench_function("look_at_into", |bench| {
        let mut dst = Mat4::IDENTITY;
        bench.iter(|| {
            Mat4::look_at_into(
                black_box(Vec3::new(0.0, 30.0, 30.0)),
                Vec3::ZERO,
                Vec3::Y,
                &mut dst,
            );
            black_box(&dst);
        })
    });

    group.bench_function("perspective_into", |bench| {
        let mut dst = Mat4::IDENTITY;
        bench.iter(|| {
            Mat4::perspective_into(black_box(70.0), 1.777, 0.1, 1000.0, &mut dst);
            black_box(&dst);
        })
    });

    group.bench_function("glam_multiply", |bench| {
        let (ga, gb) = (a.to_glam(), b.to_glam());
        bench.iter(|| black_box(ga) * black_box(gb))
    });

    group.finish();
}

/// Benchmark batch point transforms, scalar vs SIMD.
fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points");
    let (m, _) = sample_matrices();

    for size in [1000, 10000, 100000].iter() {
        let points: Vec<Vec3> = (0..*size)
            .map(|i| Vec3::splat(i as f32 / *size as f32))
            .collect();
        let mut out = vec![Vec3::ZERO; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &points, |b, p| {
            b.iter(|| {
                for (src, dst) in p.iter().zip(out.iter_mut()) {
                    *dst = m.transform_point(black_box(*src));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("simd", size), &points, |b, p| {
            b.iter(|| simd::transform_points(&m, black_box(p), &mut out))
        });
    }

    group.finish();
}

/// Benchmark a full scene frame.
fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    for count in [100, 1000, 10000].iter() {
        let config = SceneConfig {
            seed: Some(7),
            entity_count: *count,
            ..SceneConfig::default()
        };
        let Ok(mut scene) = Scene::from_config(&config) else {
            continue;
        };

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_function(BenchmarkId::new("update", count), |b| {
            let mut time = 0.0;
            b.iter(|| {
                time += 16.0;
                let _ = scene.update(time, 16.0);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mat4, bench_points, bench_scene);

criterion_main!(benches);
