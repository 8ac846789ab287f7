//! Benchmarks for glkit operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use glkit_io::{BinarySerialize, read_array, write_array, write_value};
use glkit_math::fast::*;
use glkit_math::{Mat4, Vec3, simd};

/// Fast kernel against the std transcendental it replaces.
fn bench_fast_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_math");

    let size = 10000;
    let positive: Vec<f32> = (1..=size).map(|i| i as f32 * 0.01).collect();
    let angles: Vec<f32> = (0..size).map(|i| (i as f32 / size as f32 - 0.5) * 2.0).collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("inv_sqrt_fast", |b| {
        b.iter(|| positive.iter().map(|&x| fast_inv_sqrt(black_box(x))).collect::<Vec<_>>())
    });
    group.bench_function("inv_sqrt_std", |b| {
        b.iter(|| positive.iter().map(|&x| 1.0 / black_box(x).sqrt()).collect::<Vec<_>>())
    });
    group.bench_function("inv_sqrt_simd", |b| {
        b.iter(|| simd::batch_fast_inv_sqrt(black_box(&positive)))
    });

    group.bench_function("sin_fast", |b| {
        b.iter(|| angles.iter().map(|&x| fast_sin(black_box(x))).collect::<Vec<_>>())
    });
    group.bench_function("sin_std", |b| {
        b.iter(|| angles.iter().map(|&x| black_box(x).sin()).collect::<Vec<_>>())
    });

    group.bench_function("exp_fast", |b| {
        b.iter(|| angles.iter().map(|&x| fast_exp(black_box(x))).collect::<Vec<_>>())
    });
    group.bench_function("exp_std", |b| {
        b.iter(|| angles.iter().map(|&x| black_box(x).exp()).collect::<Vec<_>>())
    });

    group.bench_function("atan2_fast", |b| {
        b.iter(|| angles.iter().map(|&y| fast_atan2(black_box(y), 1.0)).collect::<Vec<_>>())
    });
    group.bench_function("atan2_std", |b| {
        b.iter(|| angles.iter().map(|&y| black_box(y).atan2(1.0)).collect::<Vec<_>>())
    });

    group.finish();
}

/// Normalizing vectors through the fast path and the exact path.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let vectors: Vec<Vec3> = (0..10000)
        .map(|i| Vec3::new(i as f32, 1.0, (i % 7) as f32))
        .collect();
    group.throughput(Throughput::Elements(vectors.len() as u64));

    group.bench_function("fast", |b| {
        b.iter(|| vectors.iter().map(|v| black_box(*v).fast_normalize()).collect::<Vec<_>>())
    });
    group.bench_function("exact", |b| {
        b.iter(|| vectors.iter().map(|v| black_box(*v).normalize()).collect::<Vec<_>>())
    });
    group.bench_function("simd_batch", |b| {
        b.iter(|| {
            let mut vs = vectors.clone();
            simd::batch_fast_normalize(&mut vs);
            vs
        })
    });

    group.finish();
}

/// Bulk block writes against per-element writes.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [16usize, 1024, 16384] {
        let mats: Vec<Mat4> = (0..size)
            .map(|i| Mat4::from_translation(Vec3::splat(i as f32)))
            .collect();
        let points: Vec<Vec3> = (0..size).map(|i| Vec3::splat(i as f32)).collect();
        group.throughput(Throughput::Bytes((size * Mat4::BYTE_SIZE) as u64));

        group.bench_with_input(BenchmarkId::new("mat4_bulk", size), &mats, |b, m| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(m.len() * Mat4::BYTE_SIZE);
                write_array(&mut buf, black_box(m), 0, m.len()).expect("write");
                buf
            })
        });

        group.bench_with_input(BenchmarkId::new("mat4_single", size), &mats, |b, m| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(m.len() * Mat4::BYTE_SIZE);
                for v in black_box(m) {
                    write_value(&mut buf, v).expect("write");
                }
                buf
            })
        });

        group.bench_with_input(BenchmarkId::new("vec3_write", size), &points, |b, p| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(p.len() * Vec3::BYTE_SIZE);
                write_array(&mut buf, black_box(p), 0, p.len()).expect("write");
                buf
            })
        });

        let mut encoded = Vec::new();
        write_array(&mut encoded, &mats, 0, size).expect("encode");
        group.bench_with_input(BenchmarkId::new("mat4_read", size), &encoded, |b, bytes| {
            let mut out = vec![Mat4::ZERO; size];
            b.iter(|| read_array(&mut Cursor::new(black_box(bytes)), &mut out, 0, size).expect("read"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fast_math, bench_normalize, bench_serialize);
criterion_main!(benches);
