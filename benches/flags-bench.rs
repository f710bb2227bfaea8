use std::hint::black_box;

use byteflags::{ByteFlagSet, FlagSet, FLAG_COUNT};
use criterion::{criterion_group, criterion_main, Criterion};

fn set_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("set-clear");
    let mut flags = ByteFlagSet::new();
    let mut slot = 0;
    group.bench_function("toggle", |b| {
        b.iter(|| {
            flags.set(slot, true);
            flags.set(slot, false);
            slot = (slot + 1) % FLAG_COUNT;
        })
    });
    group.finish();
}

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let mut flags = ByteFlagSet::new();
    flags.set(0, true);
    flags.set(3, true);
    flags.set(7, true);
    group.bench_function("to_array", |b| b.iter(|| black_box(flags.to_array())));
    group.finish();
}

criterion_group!(benches, set_clear, decode);
criterion_main!(benches);
