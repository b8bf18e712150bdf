use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use storefront_sorting::{CaseOrdering, SortAlgorithm};

fn prices(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1.0..1000.0)).collect()
}

/// Each algorithm against each input ordering, across a few sizes.
fn bench_orderings(c: &mut Criterion) {
    for algorithm in SortAlgorithm::ALL {
        let mut group = c.benchmark_group(format!("{algorithm}_sort"));

        for len in [100usize, 500, 1000] {
            group.throughput(Throughput::Elements(len as u64));

            for ordering in CaseOrdering::ALL {
                let mut rng = StdRng::seed_from_u64(0x5EED);
                let mut input = prices(len, 42);
                ordering.arrange(&mut input, &mut rng);

                group.bench_with_input(
                    BenchmarkId::new(ordering.label(), len),
                    &input,
                    |b, input| {
                        b.iter_batched(
                            || input.clone(),
                            |mut data| {
                                black_box(algorithm.sort(&mut data));
                            },
                            BatchSize::SmallInput,
                        );
                    },
                );
            }
        }

        group.finish();
    }
}

/// Both algorithms on identical shuffled input.
fn bench_bubble_vs_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_vs_insertion");
    let input = prices(1000, 7);

    for algorithm in SortAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    black_box(algorithm.sort(&mut data));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_orderings, bench_bubble_vs_insertion);
criterion_main!(benches);
