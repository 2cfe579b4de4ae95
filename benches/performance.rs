use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slotvec::{HeapAlloc, SlotVec};

fn bench_sequential_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_add");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let alloc = HeapAlloc;
                let mut vec = SlotVec::new(&alloc).unwrap();

                for i in 0..size {
                    black_box(vec.add(i).unwrap());
                }

                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("preallocated", size), size, |b, &size| {
            b.iter(|| {
                let alloc = HeapAlloc;
                let mut vec = SlotVec::with_capacity(&alloc, size + 1).unwrap();

                for i in 0..size {
                    black_box(vec.add(i).unwrap());
                }

                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get_operations", size), size, |b, &size| {
            let alloc = HeapAlloc;
            let mut vec = SlotVec::with_capacity(&alloc, size + 1).unwrap();

            for i in 0..size {
                vec.add(i).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(vec.get(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_remove_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_shift");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("front_removal", size), size, |b, &size| {
            b.iter(|| {
                let alloc = HeapAlloc;
                let mut vec = SlotVec::with_capacity(&alloc, size + 1).unwrap();
                for i in 0..size {
                    vec.add(i).unwrap();
                }

                for _ in 0..size / 2 {
                    black_box(vec.remove(0, false).unwrap());
                }

                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_shrink_compaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("half_tombstoned", size), size, |b, &size| {
            b.iter(|| {
                let alloc = HeapAlloc;
                let mut vec = SlotVec::with_capacity(&alloc, size + 1).unwrap();
                for i in 0..size {
                    vec.add(i).unwrap();
                }
                for index in (0..size).step_by(2).rev() {
                    vec.remove(index, false).unwrap();
                }

                black_box(vec.shrink().unwrap());
                black_box(vec.capacity())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_add,
    bench_random_access,
    bench_remove_shift,
    bench_shrink_compaction
);
criterion_main!(benches);
