//! Criterion benchmarks for the u-search optimizers.
//!
//! Uses synthetic integer problems so the numbers measure the engines'
//! own overhead rather than any objective.

use std::convert::Infallible;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_search::brute_force::{BruteForce, BruteForceConfig};
use u_search::ga::{
    BasicSizer, ElitismReplacement, GeneticAlgorithm, Pipeline, RandomMatchmaker,
    RouletteSelection,
};
use u_search::result::{BestResult, TopResult};
use u_search::sa::{Annealing, ExponentialCooler, FixedEquilibrium, SaConfig, SimulatedAnnealing};
use u_search::space::{product, IntNeighbor, IntRange};
use u_search::state::{maximize, Comparator, State};
use u_search::tabu::{
    Exploration, FixedNeighborhood, FixedTenure, ImprovesBest, IntRangeMemory, TabuSearch,
};
use u_search::termination::IterationTermination;

// ===========================================================================
// Synthetic problem: a bumpy landscape over integers
// ===========================================================================

fn bumpy(x: i32) -> f64 {
    let x = f64::from(x);
    1000.0 - (x - 700.0).abs() + 25.0 * (x / 7.0).sin()
}

fn objective(x: &i32) -> Result<State<i32>, Infallible> {
    Ok(State::new(*x, bumpy(*x)))
}

fn pair_objective(config: &(i32, i32)) -> Result<State<(i32, i32)>, Infallible> {
    Ok(State::new(*config, bumpy(config.0) + bumpy(config.1 * 3)))
}

fn range(size: i32) -> IntRange {
    IntRange::new(1, size, 1).expect("valid range")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_pairs");
    group.sample_size(10);

    for &workers in &[1usize, 4] {
        let search = BruteForce::new(BruteForceConfig::default().with_workers(workers))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(workers), &search, |b, search| {
            b.iter(|| {
                let mut result = TopResult::new(10, maximize);
                let stats = search
                    .run(
                        &mut result,
                        |_: &State<(i32, i32)>| true,
                        pair_objective,
                        product(range(300), range(300)),
                    )
                    .expect("infallible objective");
                black_box((stats, result))
            })
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_bumpy");
    group.sample_size(10);

    for &(pop, gen) in &[(50usize, 50usize), (200, 30)] {
        let init: Vec<i32> = range(1000).iter().step_by(1000 / pop).collect();
        group.bench_with_input(
            BenchmarkId::new(format!("p{pop}_g{gen}"), pop),
            &init,
            |b, init| {
                b.iter(|| {
                    let mut neighbor = IntNeighbor::new(range(1000), 20, Some(3)).expect("valid span");
                    let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);
                    let better = maximize as Comparator<i32>;
                    GeneticAlgorithm::new()
                        .run(
                            black_box(init),
                            &mut result,
                            |_: &State<i32>| true,
                            objective,
                            Pipeline::new(
                                BasicSizer::new(1.0).expect("valid growth"),
                                RouletteSelection::new(Some(1)),
                                RandomMatchmaker::<2>::new(Some(2)).expect("valid group"),
                                |[a, b]: [i32; 2]| [(a + b) / 2],
                                |child: i32| neighbor.next_from(child),
                                ElitismReplacement::new(0.5, better).expect("valid ratio"),
                                IterationTermination::new(gen),
                            ),
                            &mut [],
                        )
                        .expect("infallible objective");
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_bumpy");
    group.sample_size(10);

    for &trials in &[10usize, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            b.iter(|| {
                let mut sa = SimulatedAnnealing::new(
                    SaConfig::default()
                        .with_start_temperature(100.0)
                        .with_min_temperature(0.1)
                        .with_seed(42),
                )
                .expect("valid config");
                let mut result = BestResult::new(State::new(1, f64::NEG_INFINITY), maximize);
                sa.run(
                    1,
                    &mut result,
                    |_: &State<i32>| true,
                    objective,
                    Annealing::new(
                        IntNeighbor::new(range(1000), 30, Some(7)).expect("valid span"),
                        |current: &State<i32>, candidate: &State<i32>| current.value - candidate.value,
                        ExponentialCooler::new(0.95).expect("valid decay"),
                        FixedEquilibrium::new(trials).expect("valid trials"),
                    ),
                    &mut [],
                )
                .expect("infallible objective");
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_bumpy");
    group.sample_size(10);

    for &samples in &[10usize, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            b.iter(|| {
                let mut tabu = TabuSearch::new();
                let mut result = BestResult::new(State::new(1, f64::NEG_INFINITY), maximize);
                tabu.run(
                    1,
                    &mut result,
                    |_: &State<i32>| true,
                    objective,
                    Exploration::new(
                        IntNeighbor::new(range(1000), 30, Some(5)).expect("valid span"),
                        FixedNeighborhood::new(samples).expect("valid size"),
                        IntRangeMemory::new(range(1000), FixedTenure::new(20).expect("valid tenure"))
                            .expect("small range"),
                        ImprovesBest::new(maximize as Comparator<i32>),
                        IterationTermination::new(200),
                    ),
                    &mut [],
                )
                .expect("infallible objective");
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_brute_force, bench_ga, bench_sa, bench_tabu);
criterion_main!(benches);
