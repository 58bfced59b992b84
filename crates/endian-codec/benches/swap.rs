use criterion::{black_box, criterion_group, criterion_main, Criterion};
use endian_codec::{encode_be32, to_big_endian_16, to_big_endian_32};

fn bench_swap(c: &mut Criterion) {
    c.bench_function("to_big_endian_16", |b| {
        b.iter(|| to_big_endian_16(black_box(0x0020)))
    });

    c.bench_function("to_big_endian_32", |b| {
        b.iter(|| to_big_endian_32(black_box(0x1234_5678)))
    });

    c.bench_function("encode_be32_x256", |b| {
        b.iter(|| {
            for i in 0..256u32 {
                black_box(encode_be32(black_box(i)));
            }
        })
    });
}

criterion_group!(benches, bench_swap);
criterion_main!(benches);
