use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap;

type RandomState = hashbrown::DefaultHashBuilder;
type TwoWayMap<K, V> = twoway_map::two_way_map::TwoWayMap<K, V, RandomState>;

type BiHashMap<L, R> = bimap::BiHashMap<L, R, RandomState, RandomState>;

const SIZES: &[usize] = &[10000];

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("twoway_map", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: TwoWayMap<usize, usize> = TwoWayMap::default();
                for i in 0..size {
                    map.set(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("twoway_map_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map: TwoWayMap<usize, usize> =
                        TwoWayMap::with_capacity_and_hasher(size, RandomState::default());
                    for i in 0..size {
                        map.set(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("bimap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: BiHashMap<usize, usize> = BiHashMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("hashmap_pair", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut forward: HashMap<usize, usize, RandomState> = HashMap::default();
                    let mut reverse: HashMap<usize, usize, RandomState> = HashMap::default();
                    for i in 0..size {
                        forward.insert(black_box(i), black_box(i * 2));
                        reverse.insert(black_box(i * 2), black_box(i));
                    }
                    (forward, reverse)
                })
            },
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        let mut map: TwoWayMap<usize, usize> = TwoWayMap::default();
        let mut bi: BiHashMap<usize, usize> = BiHashMap::default();
        for i in 0..size {
            map.set(i, i * 2);
            bi.insert(i, i * 2);
        }

        group.bench_with_input(
            BenchmarkId::new("twoway_map_forward", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(map.get(&black_box(i)));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("twoway_map_reverse", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(map.get_by_value(&black_box(i * 2)));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bimap_forward", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(bi.get_by_left(&black_box(i)));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bimap_reverse", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        black_box(bi.get_by_right(&black_box(i * 2)));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("twoway_map_pop_first", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || {
                        let mut map: TwoWayMap<usize, usize> = TwoWayMap::default();
                        for i in 0..size {
                            map.set(i, i * 2);
                        }
                        map
                    },
                    |mut map| {
                        while let Some(entry) = map.pop_first() {
                            black_box(entry);
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );

        group.bench_with_input(
            BenchmarkId::new("twoway_map_pop_last", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || {
                        let mut map: TwoWayMap<usize, usize> = TwoWayMap::default();
                        for i in 0..size {
                            map.set(i, i * 2);
                        }
                        map
                    },
                    |mut map| {
                        while let Some(entry) = map.pop_last() {
                            black_box(entry);
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bimap_remove", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || {
                        let mut map: BiHashMap<usize, usize> = BiHashMap::default();
                        for i in 0..size {
                            map.insert(i, i * 2);
                        }
                        map
                    },
                    |mut map| {
                        for i in 0..size {
                            black_box(map.remove_by_left(&i));
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        let mut map: TwoWayMap<usize, usize> = TwoWayMap::default();
        for i in 0..size {
            map.set(i, i * 2);
        }

        group.bench_with_input(BenchmarkId::new("twoway_map", size), &size, |b, _| {
            b.iter(|| {
                for entry in map.iter() {
                    black_box(entry);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_removal,
    bench_iteration
);
criterion_main!(benches);
