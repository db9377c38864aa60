// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_breadcrumbs::{
    CollapsePolicy, LayoutEngine, LayoutOptions, RowModel, Step, Trigger, find_collapse_ranges,
    plan_compact, plan_wide,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }

    fn width(&mut self) -> f64 {
        40.0 + (self.next_u64() % 120) as f64
    }
}

fn gen_steps(n: usize, collapsible_percent: u64, seed: u64) -> (Vec<Step>, Vec<f64>) {
    let mut rng = Rng::new(seed);
    let mut steps = Vec::with_capacity(n);
    let mut widths = Vec::with_capacity(n);
    for i in 0..n {
        let step = if i + 1 == n {
            Step::current(format!("step {i}"))
        } else {
            Step::link(format!("step {i}"), format!("/{i}"))
        };
        let collapsible = i > 0 && rng.chance(collapsible_percent);
        steps.push(step.with_collapsible(collapsible));
        widths.push(rng.width());
    }
    (steps, widths)
}

fn bench_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse_ranges");
    for &n in &[16_usize, 256, 4096] {
        let (steps, _) = gen_steps(n, 60, 0xB4EAD);
        let flags: Vec<bool> = steps.iter().map(|s| s.collapsible).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| black_box(find_collapse_ranges(black_box(flags.iter().copied()))));
        });
    }
    group.finish();
}

fn bench_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    for &n in &[16_usize, 256, 4096] {
        let (steps, widths) = gen_steps(n, 60, 0xC0FFEE);
        let total: f64 = widths.iter().sum();
        let container = total * 0.5;
        group.throughput(Throughput::Elements(n as u64));

        let all = LayoutOptions::default();
        group.bench_function(format!("wide_all_ranges/n={n}"), |b| {
            b.iter(|| black_box(plan_wide(&steps, &widths, black_box(container), &all)));
        });

        let until = LayoutOptions::default()
            .with_policy(CollapsePolicy::UntilFits)
            .with_indicator_width(16.0);
        group.bench_function(format!("wide_until_fits/n={n}"), |b| {
            b.iter(|| black_box(plan_wide(&steps, &widths, black_box(container), &until)));
        });

        group.bench_function(format!("compact/n={n}"), |b| {
            b.iter(|| black_box(plan_compact(&steps)));
        });
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for &n in &[16_usize, 256] {
        let (steps, widths) = gen_steps(n, 60, 0xFEED);
        let total: f64 = widths.iter().sum();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("resize_cycle/n={n}"), |b| {
            b.iter_batched(
                || {
                    RowModel::new(steps.clone())
                        .with_widths(&widths)
                        .with_container_width(total)
                },
                |mut row| {
                    let mut engine = LayoutEngine::new();
                    for w in [total * 0.5, total, total * 0.25, total * 2.0] {
                        row.set_container_width(w);
                        black_box(engine.recompute(&steps, &mut row, false, Trigger::Resize));
                    }
                    row
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ranges, bench_plans, bench_recompute);
criterion_main!(benches);
