use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::gradebook::recompute;
use gradebook_core::grading::classify_all;
use gradebook_core::model::Record;
use gradebook_core::statistics::compute;

fn make_scores(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 37) % 101) as f64).collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for n in [30, 1_000, 100_000] {
        let scores = make_scores(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| compute(black_box(&scores)))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let scores = make_scores(1_000);
    c.bench_function("classify_all/1000", |b| {
        b.iter(|| classify_all(black_box(&scores)))
    });
}

fn bench_recompute(c: &mut Criterion) {
    let rows: Vec<Record> = (0..1_000)
        .map(|i| {
            let score = if i % 10 == 0 {
                "n/a".to_string()
            } else {
                ((i * 37) % 101).to_string()
            };
            Record::ungraded("Student Name", score)
        })
        .collect();

    c.bench_function("recompute/1000", |b| b.iter(|| recompute(black_box(&rows))));
}

criterion_group!(benches, bench_compute, bench_classify, bench_recompute);
criterion_main!(benches);
