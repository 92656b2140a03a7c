//! Benchmarks for dependency validation
//!
//! Run with: cargo bench -p task-deps

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use task_deps::{DependencyGraph, TaskSnapshot, validate_no_cycle};

/// Generate a wide set of pending tasks all depending on a single root
fn generate_wide_tasks(task_count: usize) -> Vec<TaskSnapshot> {
    let mut tasks = vec![TaskSnapshot::pending("root", Vec::<String>::new())];
    tasks.extend((0..task_count).map(|i| TaskSnapshot::pending(format!("task_{i}"), ["root"])));
    tasks
}

/// Generate a linear chain task_0 -> task_1 -> ... -> task_{depth-1}
fn generate_chain_tasks(depth: usize) -> Vec<TaskSnapshot> {
    (0..depth)
        .map(|i| {
            let deps = if i + 1 < depth {
                vec![format!("task_{}", i + 1)]
            } else {
                vec![]
            };
            TaskSnapshot::pending(format!("task_{i}"), deps)
        })
        .collect()
}

/// Generate fan-out/fan-in levels, every task depending on the whole next level
fn generate_diamond_tasks(width: usize, depth: usize) -> Vec<TaskSnapshot> {
    let mut tasks = Vec::new();
    for level in 0..depth {
        let next: Vec<String> = if level + 1 < depth {
            (0..width)
                .map(|w| format!("level_{}_task_{w}", level + 1))
                .collect()
        } else {
            vec!["sink".to_string()]
        };
        for w in 0..width {
            tasks.push(TaskSnapshot::pending(
                format!("level_{level}_task_{w}"),
                next.clone(),
            ));
        }
    }
    tasks
}

fn benchmark_wide_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_accept");

    for count in [100, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let tasks = generate_wide_tasks(count);
            let deps: Vec<String> = (0..count).map(|i| format!("task_{i}")).collect();
            b.iter(|| black_box(validate_no_cycle("candidate", &deps, &tasks)));
        });
    }

    group.finish();
}

fn benchmark_chain_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_reject");

    for depth in [100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let tasks = generate_chain_tasks(depth);
            let tail = format!("task_{}", depth - 1);
            let deps = vec!["task_0".to_string()];
            b.iter(|| black_box(validate_no_cycle(&tail, &deps, &tasks)));
        });
    }

    group.finish();
}

fn benchmark_diamond_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("diamond_accept");

    for (width, depth) in [(5, 5), (10, 5), (5, 10), (10, 10)] {
        let label = format!("w{width}_d{depth}");
        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &(width, depth),
            |b, &(width, depth)| {
                let tasks = generate_diamond_tasks(width, depth);
                let deps: Vec<String> = (0..width).map(|w| format!("level_0_task_{w}")).collect();
                b.iter(|| black_box(validate_no_cycle("candidate", &deps, &tasks)));
            },
        );
    }

    group.finish();
}

fn benchmark_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");

    for count in [100, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let tasks = generate_wide_tasks(count);
            let deps = vec!["root".to_string()];
            b.iter(|| black_box(DependencyGraph::build("candidate", &deps, &tasks).edge_count()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_wide_accept,
    benchmark_chain_reject,
    benchmark_diamond_accept,
    benchmark_graph_construction,
);

criterion_main!(benches);
