use criterion::{Criterion, black_box, criterion_group, criterion_main};

use inkline_predicate::{
    AlwaysTrue, And, BinaryPredicate, Longer, Not, Or, TangentAligned, UnaryPredicate,
    WithinRadius,
};
use inkline_viewmap::{CurveElement, Polyline, Vec3};

fn sine_curve(id: u64, samples: usize) -> Polyline {
    #[allow(clippy::cast_precision_loss)]
    let positions = (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            Vec3::new(t * 10.0, (t * std::f64::consts::TAU).sin(), 0.0)
        })
        .collect();
    Polyline::new(id, positions)
}

fn combinator_tree() -> Box<dyn UnaryPredicate> {
    // Or(And(WithinRadius, TangentAligned), Not(AlwaysTrue))
    Box::new(Or::new(
        Box::new(And::new(
            Box::new(WithinRadius::new(Vec3::new(5.0, 0.0, 0.0), 6.0)),
            Box::new(TangentAligned::new(Vec3::new(1.0, 0.0, 0.0), 0.5)),
        )),
        Box::new(Not::new(Box::new(AlwaysTrue::new()))),
    ))
}

fn bench_constant_predicate(c: &mut Criterion) {
    let curve = sine_curve(1, 64);
    let it = curve.iter();
    let mut predicate = AlwaysTrue::new();

    c.bench_function("eval_constant_predicate", |b| {
        b.iter(|| black_box(predicate.evaluate(black_box(&it))));
    });
}

fn bench_combinator_tree(c: &mut Criterion) {
    let curve = sine_curve(1, 64);
    let it = curve.iter();
    let mut predicate = combinator_tree();

    c.bench_function("eval_combinator_tree", |b| {
        b.iter(|| black_box(predicate.evaluate(black_box(&it))));
    });
}

fn bench_traversal_pass(c: &mut Criterion) {
    let curve = sine_curve(1, 256);
    let mut predicate = combinator_tree();

    c.bench_function("eval_traversal_pass_256_points", |b| {
        b.iter(|| {
            let mut it = curve.iter();
            let mut selected = 0_usize;
            while !it.at_end() {
                if predicate.evaluate(&it).unwrap() {
                    selected += 1;
                }
                it.advance();
            }
            black_box(selected)
        });
    });
}

fn bench_binary_ordering(c: &mut Criterion) {
    let long = sine_curve(1, 128);
    let short = sine_curve(2, 16);
    let mut predicate = Longer::new();

    // Touch the accessors once so construction cost stays out of the loop.
    black_box(long.length_2d());
    black_box(short.length_2d());

    c.bench_function("eval_binary_ordering", |b| {
        b.iter(|| black_box(predicate.evaluate(black_box(&long), black_box(&short))));
    });
}

criterion_group!(
    benches,
    bench_constant_predicate,
    bench_combinator_tree,
    bench_traversal_pass,
    bench_binary_ordering,
);
criterion_main!(benches);
