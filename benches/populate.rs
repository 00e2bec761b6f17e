use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId,
    Criterion, PlotConfiguration,
};
use densebench::{fill, Bitmap, Config, DenseSet, OrderedSet};
use rand::{seq::SliceRandom, thread_rng};

/// Fill sizes, up to the full range the populators use.
const COUNTS: [u16; 6] = [1, 10, 100, 1_000, 10_000, u16::MAX];

macro_rules! new_benchmark_group {
    // Initialize a new benchmark group with logarithmic axis scale.
    ($c:ident, $name:literal) => {{
        let plot_config =
            PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
        let mut group = $c.benchmark_group($name);
        group.plot_config(plot_config);
        group
    }};
}

macro_rules! bench_fill_sequential {
    // Benchmark a single fill, in ascending order as the populators do.
    ($group:ident, $count:ident, $set:ty) => {
        let benchmark_id = BenchmarkId::new(stringify!($set), $count);
        $group.bench_with_input(benchmark_id, $count, |b, &$count| {
            let config = Config {
                instances: 1,
                fill_bound: $count,
            };
            b.iter(|| fill::<$set>(black_box(&config)));
        });
    };
}

fn fill_sequential(c: &mut Criterion) {
    let mut group = new_benchmark_group!(c, "Fill/Sequential");
    for count in COUNTS.iter() {
        bench_fill_sequential!(group, count, Bitmap);
        bench_fill_sequential!(group, count, OrderedSet);
    }
    group.finish();
}

macro_rules! bench_fill_shuffled {
    // Benchmark a fill with the same values, in random order.
    ($group:ident, $count:ident, $set:ty) => {
        let benchmark_id = BenchmarkId::new(stringify!($set), $count);
        $group.bench_with_input(benchmark_id, $count, |b, &$count| {
            let values = shuffled_values($count);
            b.iter(|| {
                let mut set = <$set>::new();
                for value in &values {
                    set.insert(*value);
                }
                set
            });
        });
    };
}

fn fill_shuffled(c: &mut Criterion) {
    let mut group = new_benchmark_group!(c, "Fill/Shuffled");
    for count in COUNTS.iter() {
        bench_fill_shuffled!(group, count, Bitmap);
        bench_fill_shuffled!(group, count, OrderedSet);
    }
    group.finish();
}

macro_rules! bench_contains {
    // Benchmark membership test, with a value present or absent.
    ($group:ident, $count:ident, $present:literal, $set:ty) => {
        let benchmark_id = BenchmarkId::new(
            format!("{}/{}", stringify!($set), stringify!($present)),
            $count,
        );
        $group.bench_with_input(benchmark_id, $count, |b, &$count| {
            let set = filled::<$set>($count);
            // The last value is never part of a fill.
            let value = if $present { $count / 2 } else { u16::MAX };
            b.iter(|| set.contains(black_box(value)));
        });
    };
}

fn contains(c: &mut Criterion) {
    let mut group = new_benchmark_group!(c, "Contains");
    for count in COUNTS.iter() {
        bench_contains!(group, count, true, Bitmap);
        bench_contains!(group, count, true, OrderedSet);
        bench_contains!(group, count, false, Bitmap);
        bench_contains!(group, count, false, OrderedSet);
    }
    group.finish();
}

macro_rules! bench_cardinality {
    // Benchmark cardinality computation.
    ($group:ident, $count:ident, $set:ty) => {
        $group.bench_with_input(
            BenchmarkId::new(stringify!($set), $count),
            $count,
            |b, &$count| {
                let set = filled::<$set>($count);
                b.iter(|| set.cardinality());
            },
        );
    };
}

fn cardinality(c: &mut Criterion) {
    let mut group = new_benchmark_group!(c, "Cardinality");
    for count in COUNTS.iter() {
        bench_cardinality!(group, count, Bitmap);
        bench_cardinality!(group, count, OrderedSet);
    }
    group.finish();
}

/// Returns the values `0..count`, in random order.
fn shuffled_values(count: u16) -> Vec<u16> {
    let mut values = (0..count).collect::<Vec<_>>();
    values.shuffle(&mut thread_rng());
    values
}

/// Builds a set holding `0..count`.
fn filled<S: DenseSet>(count: u16) -> S {
    fill(&Config {
        instances: 1,
        fill_bound: count,
    })
}

criterion_group!(
    benches,
    fill_sequential,
    fill_shuffled,
    contains,
    cardinality
);

criterion_main!(benches);
