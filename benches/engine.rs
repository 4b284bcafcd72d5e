//! Benchmarks for the progression engine at realistic stat values.
//!
//! Run with: cargo bench --bench engine

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dansu::economy::{forward_cost, spend_exp};
use dansu::planner::{plan_target_rank, AllocationPolicy};
use dansu::{GameTables, StatType};

fn bench_cumulative_exp(c: &mut Criterion) {
    let tables = GameTables::builtin();
    let mut group = c.benchmark_group("cumulative_exp");

    for hp in [100_000u64, 5_900_000, 6_025_000, 50_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(hp), hp, |b, &hp| {
            b.iter(|| black_box(tables.experience.cumulative_exp(StatType::Hp, black_box(hp))));
        });
    }

    group.finish();
}

fn bench_forward_cost(c: &mut Criterion) {
    let tables = GameTables::builtin();

    c.bench_function("forward_cost_0_to_10m", |b| {
        b.iter(|| {
            let breakdown = forward_cost(black_box(0), black_box(10_000_000), tables.costs.hp.tiers(), 15);
            black_box(breakdown)
        });
    });
}

fn bench_spend_exp(c: &mut Criterion) {
    let tables = GameTables::builtin();
    let mut group = c.benchmark_group("spend_exp");

    for budget in [1_000_000_000_000u64, 100_000_000_000_000, u64::MAX].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(budget), budget, |b, &budget| {
            b.iter(|| {
                let spend = spend_exp(
                    black_box(6_000_000),
                    black_box(budget),
                    StatType::Hp,
                    &tables.experience,
                    &tables.costs,
                    0,
                );
                black_box(spend)
            });
        });
    }

    group.finish();
}

fn bench_target_rank(c: &mut Criterion) {
    let tables = GameTables::builtin();

    c.bench_function("target_rank_99_both", |b| {
        b.iter(|| {
            let plan = plan_target_rank(tables, black_box(6_000_000), black_box(3_000_000), 99, AllocationPolicy::Both, 0);
            black_box(plan)
        });
    });
}

criterion_group!(
    benches,
    bench_cumulative_exp,
    bench_forward_cost,
    bench_spend_exp,
    bench_target_rank,
);

criterion_main!(benches);
